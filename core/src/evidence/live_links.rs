use crate::evidence::model::EvidenceSource;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

const WHO_SEARCH_BASE: &str =
    "https://www.who.int/search?indexCatalogue=genericsearchindex1&searchQuery=";
const REUTERS_SEARCH_BASE: &str = "https://www.reuters.com/site-search/?query=";

// Unreserved characters left as-is in query values.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~');

/// Form-style query encoding: spaces become `+`, everything outside
/// `[A-Za-z0-9_.~-]` is percent-encoded.
pub fn encode_query_value(raw: &str) -> String {
    // '%' itself is escaped to %25, so every %20 left here came from a space.
    utf8_percent_encode(raw, QUERY_VALUE)
        .to_string()
        .replace("%20", "+")
}

/// Search deep links for the raw claim. They are handed to the user as-is and
/// never dereferenced here.
pub fn deep_links(raw_claim: &str) -> Vec<EvidenceSource> {
    let q = encode_query_value(raw_claim.trim());
    vec![
        EvidenceSource::new("WHO Search", format!("{}{}", WHO_SEARCH_BASE, q)),
        EvidenceSource::new(
            "Reuters Fact Check Search",
            format!("{}{}&section=fact-check", REUTERS_SEARCH_BASE, q),
        ),
    ]
}
