use crate::claim::category::Category;
use crate::claim::classifier::classify_with_override;
use crate::claim::fingerprint::claim_fingerprint;
use crate::claim::normalize::normalize;
use crate::error::{CoreError, CoreResult};
use crate::evidence::reliability::ReliabilityTable;
use crate::evidence::scorer::ConfidenceScorer;
use crate::verdict::language::Language;
use crate::verdict::payload::{DemoPayload, VerdictRecord};
use serde::{Deserialize, Serialize};

pub const STORED_CONFIDENCE_SHARE: f64 = 0.6;
pub const RECOMPUTED_CONFIDENCE_SHARE: f64 = 0.4;
pub const MAX_BLENDED_CONFIDENCE: f64 = 0.98;

fn default_language() -> String {
    Language::En.as_str().to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimRequest {
    pub text: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_id: Option<String>,
}

impl ClaimRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: default_language(),
            demo_id: None,
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_demo_id(mut self, demo_id: impl Into<String>) -> Self {
        self.demo_id = Some(demo_id.into());
        self
    }
}

pub fn blend_confidence(stored: f64, recomputed: f64) -> f64 {
    (STORED_CONFIDENCE_SHARE * stored + RECOMPUTED_CONFIDENCE_SHARE * recomputed)
        .clamp(0.0, MAX_BLENDED_CONFIDENCE)
}

/// Category actually served: the classified (or overridden) category when the
/// payload carries it, otherwise the default.
pub fn resolve_category(payload: &DemoPayload, req: &ClaimRequest) -> Category {
    let normalized = normalize(&req.text);
    let category = classify_with_override(&normalized, req.demo_id.as_deref());
    if payload.contains(category) {
        category
    } else {
        Category::default()
    }
}

pub fn check_claim(
    payload: &DemoPayload,
    table: &ReliabilityTable,
    req: &ClaimRequest,
) -> CoreResult<VerdictRecord> {
    let category = resolve_category(payload, req);
    let language = Language::from_tag(&req.language);

    // Only a record in the requested language is re-scored; the English
    // fallback is served with its stored confidence.
    let record = match payload.lookup_exact(category, language) {
        Some(found) => {
            let mut record = found.clone();
            let recomputed = ConfidenceScorer::new(table).score(&record.sources);
            record.confidence = blend_confidence(record.confidence, recomputed);
            record
        }
        None => payload.lookup(category, language)?.clone(),
    };

    tracing::debug!(
        claim_fingerprint = %claim_fingerprint(&normalize(&req.text)),
        %category,
        %language,
        confidence = record.confidence,
        "claim checked"
    );
    Ok(record)
}

/// Stored record for the claim's category and language, never re-scored.
pub fn lookup_verdict(payload: &DemoPayload, req: &ClaimRequest) -> CoreResult<VerdictRecord> {
    let category = resolve_category(payload, req);
    Ok(payload
        .lookup(category, Language::from_tag(&req.language))?
        .clone())
}

/// Unblended demo record for an explicit category tag.
pub fn get_demo(
    payload: &DemoPayload,
    category_tag: &str,
    language: &str,
) -> CoreResult<VerdictRecord> {
    let category = Category::from_tag(category_tag)
        .filter(|c| payload.contains(*c))
        .ok_or_else(|| CoreError::NotFound(format!("category {} not found", category_tag)))?;
    Ok(payload
        .lookup(category, Language::from_tag(language))?
        .clone())
}
