pub mod cache;
pub mod live_links;
pub mod model;
pub mod reliability;
pub mod retriever;
pub mod scorer;

pub use cache::{match_claim, ClaimsIndex};
pub use model::{CachedClaim, EvidenceSource};
pub use reliability::{ReliabilityEntry, ReliabilityTable};
pub use retriever::{EvidenceRetriever, Retrieval};
pub use scorer::{score, ConfidenceScorer};
