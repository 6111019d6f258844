pub mod category;
pub mod classifier;
pub mod fingerprint;
pub mod normalize;

pub use category::Category;
pub use classifier::{classify, classify_with_override};
pub use normalize::normalize;
