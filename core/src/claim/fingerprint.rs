use sha2::{Digest, Sha256};

pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut h = Sha256::new();
    h.update(bytes);
    hex::encode(h.finalize())
}

/// Short stable identifier for log lines; raw claim text is never logged.
pub fn claim_fingerprint(normalized: &str) -> String {
    sha256_hex(normalized.as_bytes())[..12].to_string()
}
