/// Error types for the greenprompt crate.
use thiserror::Error;

/// Errors related to rule configuration loading and compilation.
#[derive(Error, Debug)]
pub enum RuleError {
    #[error("Failed to load rule configuration: {0}")]
    ConfigLoadFailed(String),

    #[error("Invalid rule pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

/// Application-level errors.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Rule error: {0}")]
    Rules(#[from] RuleError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
