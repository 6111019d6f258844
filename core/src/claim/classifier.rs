use crate::claim::category::Category;

/// Conjunctive substring rule: every term must appear in the normalized claim.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub terms: &'static [&'static str],
    pub category: Category,
}

impl KeywordRule {
    pub fn matches(&self, normalized: &str) -> bool {
        self.terms.iter().all(|term| normalized.contains(term))
    }
}

// Evaluated top to bottom; first match wins.
pub const KEYWORD_RULES: &[KeywordRule] = &[
    KeywordRule {
        terms: &["herbal tea", "covid"],
        category: Category::False,
    },
    KeywordRule {
        terms: &["vitamin c", "covid"],
        category: Category::PartlyTrue,
    },
    KeywordRule {
        terms: &["mask", "viral spread"],
        category: Category::True,
    },
    KeywordRule {
        terms: &["vaccine", "microchip"],
        category: Category::MemeImage,
    },
];

pub fn classify(normalized: &str) -> Category {
    KEYWORD_RULES
        .iter()
        .find(|rule| rule.matches(normalized))
        .map(|rule| rule.category)
        .unwrap_or_default()
}

/// A valid override tag bypasses the rules entirely.
pub fn classify_with_override(normalized: &str, override_tag: Option<&str>) -> Category {
    match override_tag.and_then(Category::from_tag) {
        Some(category) => category,
        None => classify(normalized),
    }
}
