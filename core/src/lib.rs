pub mod claim;
pub mod evidence;
pub mod feedback;
pub mod intake;
pub mod service;
pub mod verdict;

pub mod error;
