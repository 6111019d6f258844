use crate::claim::category::Category;
use crate::error::{CoreError, CoreResult};
use crate::evidence::model::EvidenceSource;
use crate::verdict::language::Language;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Pre-authored response for one (category, language) pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VerdictRecord {
    pub verdict: String,
    pub confidence: f64,
    pub explanation: String,
    #[serde(default)]
    pub sources: Vec<EvidenceSource>,
    pub suggested_reply: String,
    pub id: String,
}

/// Demo verdicts keyed by category tag, then language tag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DemoPayload {
    by_category: BTreeMap<String, BTreeMap<String, VerdictRecord>>,
}

impl DemoPayload {
    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// A missing file yields an empty payload; a malformed one is an error.
    pub fn load(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::warn!(path = %path.display(), "demo payload file not found");
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)?;
        let payload = Self::from_json_str(&text)?;
        tracing::info!(
            path = %path.display(),
            categories = payload.by_category.len(),
            "loaded demo payload"
        );
        Ok(payload)
    }

    pub fn insert(&mut self, category: Category, language: Language, record: VerdictRecord) {
        self.by_category
            .entry(category.as_str().to_string())
            .or_default()
            .insert(language.as_str().to_string(), record);
    }

    pub fn contains(&self, category: Category) -> bool {
        self.by_category.contains_key(category.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.by_category.is_empty()
    }

    /// Categories present in the payload that are also known tags.
    pub fn categories(&self) -> Vec<Category> {
        self.by_category
            .keys()
            .filter_map(|k| Category::from_tag(k))
            .collect()
    }

    /// Record in exactly `language`, without fallback.
    pub fn lookup_exact(&self, category: Category, language: Language) -> Option<&VerdictRecord> {
        self.by_category
            .get(category.as_str())
            .and_then(|by_language| by_language.get(language.as_str()))
    }

    /// Record in `language`, falling back to English.
    pub fn lookup(&self, category: Category, language: Language) -> CoreResult<&VerdictRecord> {
        let by_language = self.by_category.get(category.as_str()).ok_or_else(|| {
            CoreError::NotFound(format!("category {} not found", category.as_str()))
        })?;
        by_language
            .get(language.as_str())
            .or_else(|| by_language.get(Language::En.as_str()))
            .ok_or_else(|| CoreError::NotFound("demo data not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(verdict: &str) -> VerdictRecord {
        VerdictRecord {
            verdict: verdict.to_string(),
            confidence: 0.9,
            explanation: "x".to_string(),
            sources: vec![],
            suggested_reply: "r".to_string(),
            id: "demo_1".to_string(),
        }
    }

    #[test]
    fn lookup_falls_back_to_english() {
        let mut p = DemoPayload::default();
        p.insert(Category::False, Language::En, record("Likely False"));
        p.insert(Category::False, Language::Hi, record("संभवतः गलत"));

        assert_eq!(p.lookup(Category::False, Language::Hi).unwrap().verdict, "संभवतः गलत");
        assert_eq!(p.lookup(Category::False, Language::Ta).unwrap().verdict, "Likely False");
        assert!(p.lookup_exact(Category::False, Language::Ta).is_none());
        assert!(p.lookup_exact(Category::True, Language::En).is_none());
    }

    #[test]
    fn lookup_miss_is_not_found() {
        let mut p = DemoPayload::default();
        p.insert(Category::True, Language::Ta, record("Likely True"));

        let err = p.lookup(Category::True, Language::En).unwrap_err();
        assert!(matches!(err, CoreError::NotFound(_)));
        let err = p.lookup(Category::MemeImage, Language::En).unwrap_err();
        assert!(err.to_string().contains("category meme_image not found"));
    }

    #[test]
    fn parses_nested_json_and_ignores_unknown_category_tags() {
        let json = r#"{
            "false": {"en": {"verdict": "Likely False", "confidence": 0.92,
                "explanation": "e", "sources": [{"title": "WHO", "url": "https://www.who.int"}],
                "suggested_reply": "s", "id": "false_en"}},
            "legacy": {}
        }"#;
        let p = DemoPayload::from_json_str(json).unwrap();
        assert!(p.contains(Category::False));
        assert_eq!(p.categories(), vec![Category::False]);
        let rec = p.lookup(Category::False, Language::En).unwrap();
        assert_eq!(rec.sources[0].excerpt, None);
    }
}
