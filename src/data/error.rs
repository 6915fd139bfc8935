use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Reasons a question batch could not be loaded.
///
/// A failed load never produces a partial session.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server responded with status {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed response: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("question source reported error code {code}")]
    Api { code: u32 },
    #[error("question {index} is malformed: {reason}")]
    Malformed { index: usize, reason: &'static str },
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
