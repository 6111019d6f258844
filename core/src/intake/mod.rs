//! Collaborators that turn images and chat messages into plain claim text.

pub mod messaging;
pub mod ocr;
