use crate::claim::category::Category;
use crate::claim::classifier::classify;
use crate::claim::fingerprint::claim_fingerprint;
use crate::claim::normalize::normalize;
use crate::evidence::cache::ClaimsIndex;
use crate::evidence::live_links::deep_links;
use crate::evidence::model::EvidenceSource;
use crate::evidence::reliability::ReliabilityTable;
use crate::evidence::scorer::ConfidenceScorer;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Retrieval {
    pub sources: Vec<EvidenceSource>,
    pub confidence: f64,
    pub category: Category,
    pub cache_id: Option<String>,
}

/// Composes cache matching, deep-link construction and scoring over the
/// process-lifetime index and reliability table.
#[derive(Debug, Clone, Copy)]
pub struct EvidenceRetriever<'a> {
    index: &'a ClaimsIndex,
    table: &'a ReliabilityTable,
}

impl<'a> EvidenceRetriever<'a> {
    pub fn new(index: &'a ClaimsIndex, table: &'a ReliabilityTable) -> Self {
        Self { index, table }
    }

    pub fn retrieve(&self, claim_text: &str) -> Retrieval {
        let normalized = normalize(claim_text);
        let cached = self.index.best_match(&normalized);
        // Labeling only; the category does not gate which sources are returned.
        let category = classify(&normalized);

        let mut sources: Vec<EvidenceSource> = cached
            .map(|c| c.sources.clone())
            .unwrap_or_default();
        sources.extend(deep_links(claim_text));

        let confidence = ConfidenceScorer::new(self.table).score(&sources);
        let cache_id = cached.map(|c| c.id.clone());

        tracing::debug!(
            claim_fingerprint = %claim_fingerprint(&normalized),
            cache_id = cache_id.as_deref().unwrap_or("-"),
            %category,
            sources = sources.len(),
            confidence,
            "evidence retrieved"
        );

        Retrieval {
            sources,
            confidence,
            category,
            cache_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evidence::model::CachedClaim;

    fn index() -> ClaimsIndex {
        ClaimsIndex::new(vec![CachedClaim {
            id: "tea_covid".to_string(),
            keywords: vec!["herbal tea".to_string(), "covid".to_string()],
            sources: vec![EvidenceSource::new(
                "WHO Myth Busters",
                "https://www.who.int/emergencies/myth-busters",
            )
            .with_excerpt("No herbal remedy cures COVID-19.")],
        }])
    }

    #[test]
    fn cached_sources_precede_deep_links() {
        let idx = index();
        let r = EvidenceRetriever::new(&idx, ReliabilityTable::builtin())
            .retrieve("Herbal tea cures COVID");
        assert_eq!(r.cache_id.as_deref(), Some("tea_covid"));
        assert_eq!(r.sources.len(), 3);
        assert_eq!(r.sources[0].title, "WHO Myth Busters");
        assert_eq!(r.sources[1].title, "WHO Search");
        assert_eq!(r.sources[2].title, "Reuters Fact Check Search");
        assert_eq!(r.category, Category::False);
        // (0.98 + 0.95 + 0.9) / 3 + 0.04
        assert!((r.confidence - (2.83 / 3.0 + 0.04)).abs() < 1e-9);
    }

    #[test]
    fn miss_returns_only_deep_links() {
        let idx = index();
        let r = EvidenceRetriever::new(&idx, ReliabilityTable::builtin())
            .retrieve("A mask limits viral spread");
        assert_eq!(r.cache_id, None);
        assert_eq!(r.sources.len(), 2);
        assert_eq!(r.category, Category::True);
    }

    #[test]
    fn unweighted_table_scores_links_at_baseline() {
        let idx = ClaimsIndex::default();
        let table = ReliabilityTable::default();
        let r = EvidenceRetriever::new(&idx, &table).retrieve("");
        assert!((r.confidence - 0.72).abs() < 1e-9);
        assert_eq!(r.category, Category::False);
        assert_eq!(r.cache_id, None);
    }
}
