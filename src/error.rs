//! Error types for bionic-bold operations.
//!
//! The engine itself cannot fail; errors come from the edges: reading and
//! writing pages or settings, decoding messages, and parsing modes.

use thiserror::Error;

/// Errors that can occur around the bionic engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid emphasis mode {0:?}: expected \"auto\" or a positive integer")]
    InvalidMode(String),

    #[error("could not serialize page: {0}")]
    Serialize(String),
}

pub type Result<T> = std::result::Result<T, Error>;
