#![allow(dead_code)]

use async_trait::async_trait;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::mpsc;
use trivia_quiz::{Controller, LoadError, QuestionRecord, QuestionSource, QuizEvent, parse_batch};

/// Serves the same response body on every fetch.
pub struct CannedSource {
    body: String,
}

impl CannedSource {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

#[async_trait]
impl QuestionSource for CannedSource {
    async fn fetch_batch(&self) -> Result<Vec<QuestionRecord>, LoadError> {
        parse_batch(&self.body)
    }
}

pub const TWO_CAPITALS: &str = r#"{
    "response_code": 0,
    "results": [
        {
            "category": "Geography",
            "type": "multiple",
            "difficulty": "easy",
            "question": "What is the capital of France?",
            "correct_answer": "Paris",
            "incorrect_answers": ["Berlin", "Rome"]
        },
        {
            "category": "Geography",
            "type": "multiple",
            "difficulty": "easy",
            "question": "What is the capital of Japan?",
            "correct_answer": "Tokyo",
            "incorrect_answers": ["Kyoto", "Osaka", "Nagoya"]
        }
    ]
}"#;

pub const EMPTY: &str = r#"{"response_code": 0, "results": []}"#;

pub fn controller(
    body: &str,
) -> (
    Controller<CannedSource, StdRng>,
    mpsc::UnboundedReceiver<QuizEvent>,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let controller = Controller::new(CannedSource::new(body), StdRng::seed_from_u64(42), tx);
    (controller, rx)
}

pub fn drain(rx: &mut mpsc::UnboundedReceiver<QuizEvent>) -> Vec<QuizEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}
