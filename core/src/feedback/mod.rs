pub mod log;

pub use log::{FeedbackEvent, FeedbackLog, FeedbackRequest};
