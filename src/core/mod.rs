//! Configuration and request-scoped domain types

pub mod config;
pub mod submission;

pub use config::AppConfig;
pub use submission::{Submission, ValidSubmission};
