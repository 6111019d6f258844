use crate::error::{CoreError, CoreResult};
use idna::domain_to_ascii;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReliabilityEntry {
    pub host: String, // substring matched against the source hostname
    pub weight: f64,
}

impl ReliabilityEntry {
    pub fn new(host: impl Into<String>, weight: f64) -> Self {
        Self {
            host: host.into(),
            weight,
        }
    }

    pub fn canonicalize(mut self) -> CoreResult<Self> {
        if !self.weight.is_finite() || !(0.0..=1.0).contains(&self.weight) {
            return Err(CoreError::InvalidInput(format!(
                "reliability weight for '{}' must be within [0, 1]",
                self.host
            )));
        }
        let host = self.host.trim();
        if host.is_empty() {
            return Err(CoreError::InvalidInput(
                "reliability host must not be empty".to_string(),
            ));
        }
        let host_ascii = domain_to_ascii(host)
            .map_err(|_| CoreError::InvalidInput("invalid reliability host".to_string()))?;
        self.host = host_ascii.to_ascii_lowercase();
        Ok(self)
    }

    pub fn matches_host(&self, hostname: &str) -> bool {
        !self.host.is_empty() && hostname.contains(&self.host)
    }
}

/// Read-only lookup table of trusted evidence domains.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReliabilityTable {
    entries: Vec<ReliabilityEntry>,
}

static DEFAULT_TABLE: Lazy<ReliabilityTable> = Lazy::new(|| ReliabilityTable {
    entries: vec![
        ReliabilityEntry::new("who.int", 0.95),
        ReliabilityEntry::new("cdc.gov", 0.95),
        ReliabilityEntry::new("science.org", 0.92),
        ReliabilityEntry::new("pubmed.ncbi.nlm.nih.gov", 0.92),
        ReliabilityEntry::new("reuters.com", 0.9),
        ReliabilityEntry::new("bbc.com", 0.88),
        ReliabilityEntry::new("apnews.com", 0.88),
    ],
});

impl ReliabilityTable {
    pub fn builtin() -> &'static ReliabilityTable {
        &DEFAULT_TABLE
    }

    pub fn from_entries(entries: Vec<ReliabilityEntry>) -> CoreResult<Self> {
        let entries = entries
            .into_iter()
            .map(ReliabilityEntry::canonicalize)
            .collect::<CoreResult<Vec<_>>>()?;
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[ReliabilityEntry] {
        &self.entries
    }

    /// Highest weight among matching entries, if any entry matches.
    pub fn best_weight(&self, hostname: &str) -> Option<f64> {
        self.entries
            .iter()
            .filter(|e| e.matches_host(hostname))
            .map(|e| e.weight)
            .reduce(f64::max)
    }
}

/// Lowercased hostname of `url`; unparseable or host-less URLs yield "".
/// Scheme-relative links (`//host/path`) keep their host.
pub fn hostname_from_url(url: &str) -> String {
    let url = url.trim();
    let parsed = if url.starts_with("//") {
        Url::parse(&format!("https:{}", url))
    } else {
        Url::parse(url)
    };
    parsed
        .ok()
        .and_then(|u| u.host_str().map(|h| h.to_ascii_lowercase()))
        .unwrap_or_default()
}
