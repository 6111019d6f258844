pub mod check;
pub mod language;
pub mod payload;

pub use check::{check_claim, get_demo, lookup_verdict, ClaimRequest};
pub use language::Language;
pub use payload::{DemoPayload, VerdictRecord};
