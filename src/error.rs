//! File-level errors shared by the tools.
//!
//! Every variant aborts processing of a single file only; batch callers log
//! the error and move on to the next file.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FileError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Error reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Error parsing {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid JSON structure after translation: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Error writing {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid terminology file {}: {reason}", path.display())]
    Terminology { path: PathBuf, reason: String },
}
