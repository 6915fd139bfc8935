//! Session store: the loaded batch, the current position, and the tally.

use crate::error::ContractViolation;
use crate::models::{QuestionRecord, Summary};

/// State of one run through a batch.
///
/// `current_index` never exceeds the batch length and `correct_count` never
/// exceeds `current_index`. The batch is fixed until the next [`Session::load`].
#[derive(Debug, Clone, Default)]
pub struct Session {
    questions: Vec<QuestionRecord>,
    current_index: usize,
    correct_count: usize,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole session with a fresh batch.
    pub fn load(&mut self, questions: Vec<QuestionRecord>) {
        *self = Self {
            questions,
            current_index: 0,
            correct_count: 0,
        };
    }

    pub fn current(&self) -> Option<&QuestionRecord> {
        self.questions.get(self.current_index)
    }

    /// Scores the current question and moves past it.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::NoCurrentQuestion`] once the batch is
    /// exhausted; the session is left unchanged.
    pub fn record_answer(&mut self, was_correct: bool) -> Result<(), ContractViolation> {
        if self.is_complete() {
            return Err(ContractViolation::NoCurrentQuestion);
        }

        if was_correct {
            self.correct_count += 1;
        }
        self.current_index += 1;
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.current_index == self.questions.len()
    }

    pub fn summary(&self) -> Summary {
        Summary {
            correct_count: self.correct_count,
            total: self.questions.len(),
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }
}
