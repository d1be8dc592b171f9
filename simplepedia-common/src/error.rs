//! Common error types for Simplepedia

use thiserror::Error;

use crate::models::ArticleId;

/// Common result type for Simplepedia operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across Simplepedia crates
#[derive(Error, Debug)]
pub enum Error {
    /// Edit referenced an id that is not in the collection
    #[error("Article not found: {0}")]
    ArticleNotFound(ArticleId),

    /// Title is empty after trimming
    #[error("Article title must not be empty")]
    EmptyTitle,

    /// No further ids can be assigned
    #[error("Article id space exhausted")]
    IdExhausted,

    /// A button that the bar currently has disabled was pressed
    #[error("Button not available: {0}")]
    ButtonDisabled(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON decoding error (seed fixtures)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML decoding error (config files)
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}
