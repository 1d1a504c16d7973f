// ============================================================================
// playtally-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Error types for the playtally-core library
//
// The aggregation routine itself never fails: every label either contributes
// to the total or is skipped. The errors below cover the fallible edges around
// it: reading inputs, loading and compiling scrape rules, and serializing the
// popup message.

use thiserror::Error;

/// Errors produced by the playtally-core library.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid extraction rule '{name}': {reason}")]
    InvalidRule { name: String, reason: String },

    #[error("JSON error: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Not a playlist page: {0}")]
    NotPlaylistPage(String),

    #[error("Path error: {0}")]
    PathError(String),
}

/// Result type for playtally-core operations.
pub type CoreResult<T> = std::result::Result<T, CoreError>;
