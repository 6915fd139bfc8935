//! Where and how the question batch is fetched.

use std::fmt;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://opentdb.com/api.php";
pub const DEFAULT_AMOUNT: u32 = 10;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings for [`crate::data::HttpQuestionSource`].
#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub api_url: String,
    pub amount: u32,
    pub category: Option<u32>,
    pub difficulty: Option<Difficulty>,
    pub timeout: Duration,
}

impl SourceConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            ..Self::default()
        }
    }

    /// Query parameters sent with every batch request.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("amount", self.amount.to_string()),
            ("type", "multiple".to_string()),
        ];
        if let Some(category) = self.category {
            query.push(("category", category.to_string()));
        }
        if let Some(difficulty) = self.difficulty {
            query.push(("difficulty", difficulty.to_string()));
        }
        query
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            amount: DEFAULT_AMOUNT,
            category: None,
            difficulty: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
