use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::models::QuestionRecord;

use super::{LoadError, QuestionSource, parse_batch};

/// Replays a saved response body from disk, for offline play.
#[derive(Debug, Clone)]
pub struct FileQuestionSource {
    path: PathBuf,
}

impl FileQuestionSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl QuestionSource for FileQuestionSource {
    async fn fetch_batch(&self) -> Result<Vec<QuestionRecord>, LoadError> {
        let body = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| LoadError::Read {
                path: self.path.clone(),
                source,
            })?;

        parse_batch(&body)
    }
}
