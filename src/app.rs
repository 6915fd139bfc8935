use crate::events::{QuizEvent, Selection};
use crate::models::Summary;

/// Which screen the display surface is showing.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Loading,
    Question,
    Finished(Summary),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PresentedQuestion {
    pub number: usize,
    pub total: usize,
    pub prompt: String,
    pub choices: Vec<String>,
    pub category: Option<String>,
    pub difficulty: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub was_correct: bool,
    pub correct_answer: String,
}

impl Feedback {
    pub fn message(&self) -> String {
        if self.was_correct {
            "Correct answer!!".to_string()
        } else {
            format!("Wrong answer... The correct answer is {}", self.correct_answer)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnsweredQuestion {
    pub prompt: String,
    pub was_correct: bool,
    pub correct_answer: String,
}

/// View model for the terminal display surface, fed by [`QuizEvent`]s.
pub struct App {
    screen: Screen,
    question: Option<PresentedQuestion>,
    selected_option: usize,
    feedback: Option<Feedback>,
    answered: Vec<AnsweredQuestion>,
    result_scroll: usize,
}

impl App {
    pub fn new() -> Self {
        Self {
            screen: Screen::Loading,
            question: None,
            selected_option: 0,
            feedback: None,
            answered: Vec::new(),
            result_scroll: 0,
        }
    }

    pub fn apply(&mut self, event: QuizEvent) {
        match event {
            QuizEvent::Loading => *self = Self::new(),
            QuizEvent::LoadFailed { reason } => {
                self.question = None;
                self.feedback = None;
                self.screen = Screen::Failed(reason);
            }
            QuizEvent::QuestionReady {
                number,
                total,
                prompt,
                choices,
                category,
                difficulty,
            } => {
                self.question = Some(PresentedQuestion {
                    number,
                    total,
                    prompt,
                    choices,
                    category,
                    difficulty,
                });
                self.selected_option = 0;
                self.screen = Screen::Question;
            }
            QuizEvent::AnswerScored {
                was_correct,
                correct_answer,
            } => {
                if let Some(question) = &self.question {
                    self.answered.push(AnsweredQuestion {
                        prompt: question.prompt.clone(),
                        was_correct,
                        correct_answer: correct_answer.clone(),
                    });
                }
                self.feedback = Some(Feedback {
                    was_correct,
                    correct_answer,
                });
            }
            QuizEvent::Finished(summary) => {
                self.question = None;
                self.result_scroll = 0;
                self.screen = Screen::Finished(summary);
            }
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn question(&self) -> Option<&PresentedQuestion> {
        self.question.as_ref()
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    pub fn answered(&self) -> &[AnsweredQuestion] {
        &self.answered
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    /// Restart is hidden while a load is in flight or a question is open.
    pub fn can_restart(&self) -> bool {
        matches!(self.screen, Screen::Finished(_) | Screen::Failed(_))
    }

    fn num_options(&self) -> usize {
        self.question
            .as_ref()
            .map_or(0, |question| question.choices.len())
    }

    pub fn select_next_option(&mut self) {
        let count = self.num_options();
        if count > 0 {
            self.selected_option = (self.selected_option + 1) % count;
        }
    }

    pub fn select_previous_option(&mut self) {
        let count = self.num_options();
        if count > 0 {
            self.selected_option = (self.selected_option + count - 1) % count;
        }
    }

    /// Moves the cursor to `index`; false if there is no such choice.
    pub fn select_option(&mut self, index: usize) -> bool {
        if index < self.num_options() {
            self.selected_option = index;
            true
        } else {
            false
        }
    }

    /// The highlighted choice as an outbound selection signal.
    pub fn selection(&self) -> Option<Selection> {
        if self.screen != Screen::Question {
            return None;
        }
        self.question
            .as_ref()
            .and_then(|question| question.choices.get(self.selected_option))
            .map(Selection::new)
    }

    pub fn scroll_results_down(&mut self) {
        if self.result_scroll + 1 < self.answered.len() {
            self.result_scroll += 1;
        }
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
