//! Messages exchanged between the controller and the display surface.

use crate::models::Summary;

/// Emitted by the controller for the display surface to render.
#[derive(Debug, Clone, PartialEq)]
pub enum QuizEvent {
    /// A batch request is in flight.
    Loading,

    /// The batch request failed; no session is active.
    LoadFailed { reason: String },

    /// Next question to answer. Text is normalized and choices are shuffled.
    QuestionReady {
        number: usize,
        total: usize,
        prompt: String,
        choices: Vec<String>,
        category: Option<String>,
        difficulty: Option<String>,
    },

    /// Outcome of the last selection.
    AnswerScored {
        was_correct: bool,
        correct_answer: String,
    },

    /// Every question has been answered.
    Finished(Summary),
}

/// The respondent picked a choice, identified by its displayed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub choice_text: String,
}

impl Selection {
    pub fn new(choice_text: impl Into<String>) -> Self {
        Self {
            choice_text: choice_text.into(),
        }
    }
}
