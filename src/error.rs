// File: src/error.rs
use std::io;

/// Errors raised while building, loading or saving a rule set.
/// The response selector itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum MentorError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("binary rule pack error: {0}")]
    Binary(#[from] bincode::Error),
    #[error("JSON rule pack error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid rule set: {0}")]
    InvalidRuleSet(String),
}

pub type Result<T> = std::result::Result<T, MentorError>;
