//! Error types for the input and output collaborators.
//!
//! The processing pipeline itself never fails; only reading, writing and
//! fetching text can.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    /// Input file could not be read
    #[error("Error reading {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output file could not be written
    #[error("Error writing {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error reading stdin: {0}")]
    Stdin(#[source] std::io::Error),

    /// HTTP transport failure or non-success status
    #[error("Error fetching {url}: {message}")]
    Fetch { url: String, message: String },

    /// Response body did not have the expected shape
    #[error("Error parsing JSON from {url}: path={path} error={message}")]
    Json {
        url: String,
        path: String,
        message: String,
    },

    /// The API answered but reported failure
    #[error("API at {url} reported failure: {message}")]
    Api { url: String, message: String },
}

pub type Result<T> = std::result::Result<T, SourceError>;
