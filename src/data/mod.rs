//! Question sources: the remote trivia service and saved response files.

mod error;
mod file;
mod http;
mod response;

use async_trait::async_trait;

use crate::models::QuestionRecord;

pub use error::LoadError;
pub use file::FileQuestionSource;
pub use http::HttpQuestionSource;
pub use response::parse_batch;

/// Anything that can hand the controller a fresh batch of questions.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    async fn fetch_batch(&self) -> Result<Vec<QuestionRecord>, LoadError>;
}

#[async_trait]
impl<T: QuestionSource + ?Sized> QuestionSource for Box<T> {
    async fn fetch_batch(&self) -> Result<Vec<QuestionRecord>, LoadError> {
        (**self).fetch_batch().await
    }
}
