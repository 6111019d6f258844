use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DATA_DIR_ENV: &str = "INFOGUARD_DATA_DIR";
pub const DEFAULT_DATA_DIR: &str = "sample_data";
pub const DEMO_PAYLOAD_FILE: &str = "preloaded_demo.json";
pub const CLAIMS_INDEX_FILE: &str = "claims_index.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceConfig {
    pub data_dir: PathBuf,
    pub demo_payload_file: String,
    pub claims_index_file: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::with_data_dir(DEFAULT_DATA_DIR)
    }
}

impl ServiceConfig {
    pub fn with_data_dir(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            demo_payload_file: DEMO_PAYLOAD_FILE.to_string(),
            claims_index_file: CLAIMS_INDEX_FILE.to_string(),
        }
    }

    pub fn from_env() -> Self {
        match std::env::var(DATA_DIR_ENV) {
            Ok(dir) if !dir.trim().is_empty() => Self::with_data_dir(dir.trim()),
            _ => Self::default(),
        }
    }

    pub fn demo_payload_path(&self) -> PathBuf {
        self.data_dir.join(&self.demo_payload_file)
    }

    pub fn claims_index_path(&self) -> PathBuf {
        self.data_dir.join(&self.claims_index_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_join_data_dir() {
        let cfg = ServiceConfig::with_data_dir("/srv/infoguard");
        assert_eq!(
            cfg.demo_payload_path(),
            PathBuf::from("/srv/infoguard/preloaded_demo.json")
        );
        assert_eq!(
            cfg.claims_index_path(),
            PathBuf::from("/srv/infoguard/claims_index.json")
        );
        assert_eq!(ServiceConfig::default().data_dir, PathBuf::from("sample_data"));
    }
}
