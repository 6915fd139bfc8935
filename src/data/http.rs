use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::SourceConfig;
use crate::models::QuestionRecord;

use super::{LoadError, QuestionSource, parse_batch};

/// Fetches batches from an Open Trivia DB compatible endpoint.
#[derive(Debug, Clone)]
pub struct HttpQuestionSource {
    client: Client,
    config: SourceConfig,
}

impl HttpQuestionSource {
    /// # Errors
    ///
    /// Returns `LoadError::Http` if the HTTP client cannot be built.
    pub fn new(config: SourceConfig) -> Result<Self, LoadError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }
}

#[async_trait]
impl QuestionSource for HttpQuestionSource {
    async fn fetch_batch(&self) -> Result<Vec<QuestionRecord>, LoadError> {
        debug!(url = %self.config.api_url, amount = self.config.amount, "requesting question batch");

        let response = self
            .client
            .get(&self.config.api_url)
            .query(&self.config.query())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(LoadError::Status(response.status()));
        }

        let body = response.text().await?;
        parse_batch(&body)
    }
}
