use crate::claim::normalize::normalize;
use crate::error::CoreResult;
use crate::evidence::model::CachedClaim;
use std::fs;
use std::path::Path;

/// Number of non-empty normalized keywords contained in `query`.
pub fn overlap_score(query: &str, claim: &CachedClaim) -> usize {
    claim
        .keywords
        .iter()
        .map(|k| normalize(k))
        .filter(|k| !k.is_empty() && query.contains(k.as_str()))
        .count()
}

/// Best keyword-overlap match. Ties keep the earliest entry, and entries with
/// zero overlap are never returned.
pub fn match_claim<'a>(query: &str, index: &'a [CachedClaim]) -> Option<&'a CachedClaim> {
    let mut best = None;
    let mut best_score = 0;
    for item in index {
        let score = overlap_score(query, item);
        if score > best_score {
            best = Some(item);
            best_score = score;
        }
    }
    best
}

/// Static index of previously analyzed claims, loaded once.
#[derive(Debug, Clone, Default)]
pub struct ClaimsIndex {
    claims: Vec<CachedClaim>,
}

impl ClaimsIndex {
    pub fn new(claims: Vec<CachedClaim>) -> Self {
        Self { claims }
    }

    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        let claims: Vec<CachedClaim> = serde_json::from_str(json)?;
        Ok(Self { claims })
    }

    /// A missing file yields an empty index; a malformed one is an error.
    pub fn load(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::warn!(path = %path.display(), "claims index file not found");
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)?;
        let index = Self::from_json_str(&text)?;
        tracing::info!(path = %path.display(), claims = index.len(), "loaded claims index");
        Ok(index)
    }

    pub fn claims(&self) -> &[CachedClaim] {
        &self.claims
    }

    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    pub fn best_match(&self, query: &str) -> Option<&CachedClaim> {
        match_claim(query, &self.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claim(id: &str, keywords: &[&str]) -> CachedClaim {
        CachedClaim {
            id: id.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            sources: vec![],
        }
    }

    #[test]
    fn empty_index_has_no_match() {
        assert!(match_claim("herbal tea cures covid", &[]).is_none());
    }

    #[test]
    fn zero_overlap_sole_entry_is_not_selected() {
        let index = vec![claim("c1", &["microchip"])];
        assert!(match_claim("herbal tea cures covid", &index).is_none());

        let no_keywords = vec![claim("c2", &[])];
        assert!(match_claim("anything", &no_keywords).is_none());
    }

    #[test]
    fn highest_overlap_wins() {
        let index = vec![
            claim("tea", &["herbal tea"]),
            claim("tea_covid", &["herbal tea", "covid", "cure"]),
        ];
        let best = match_claim("herbal tea cures covid", &index).unwrap();
        assert_eq!(best.id, "tea_covid");
    }

    #[test]
    fn ties_keep_first_seen() {
        let index = vec![claim("first", &["covid"]), claim("second", &["tea"])];
        let best = match_claim("herbal tea cures covid", &index).unwrap();
        assert_eq!(best.id, "first");
    }

    #[test]
    fn keywords_are_normalized_and_blank_ones_ignored() {
        let index = vec![claim("c", &["  HERBAL\tTea ", "", "\"covid\""])];
        assert_eq!(overlap_score("herbal tea cures covid", &index[0]), 2);
    }

    #[test]
    fn load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let idx = ClaimsIndex::load(dir.path().join("absent.json")).unwrap();
        assert!(idx.is_empty());
    }

    #[test]
    fn load_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("claims_index.json");
        std::fs::write(&p, "{not json").unwrap();
        assert!(ClaimsIndex::load(&p).is_err());
    }
}
