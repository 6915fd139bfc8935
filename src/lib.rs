//! # trivia-quiz
//!
//! A terminal trivia quiz driven by batches from a remote question source.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use trivia_quiz::{HttpQuestionSource, Quiz, QuizError, SourceConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     let source = HttpQuestionSource::new(SourceConfig::default())?;
//!     Quiz::new(source, StdRng::from_os_rng()).run().await
//! }
//! ```

mod app;
pub mod config;
mod controller;
mod data;
mod error;
mod events;
mod models;
mod session;
mod shuffle;
pub mod terminal;
mod text;
mod ui;

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use rand::Rng;
use tokio::sync::mpsc;

pub use app::{AnsweredQuestion, App, Feedback, PresentedQuestion, Screen};
pub use config::{Difficulty, SourceConfig};
pub use controller::Controller;
pub use data::{FileQuestionSource, HttpQuestionSource, LoadError, QuestionSource, parse_batch};
pub use error::{ContractViolation, QuizError};
pub use events::{QuizEvent, Selection};
pub use models::{ControllerState, QuestionRecord, Summary};
pub use session::Session;
pub use shuffle::shuffle;
pub use text::normalize;

use terminal::TerminalGuard;

const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// A quiz that can be run in the terminal.
pub struct Quiz<S, R> {
    controller: Controller<S, R>,
    events: mpsc::UnboundedReceiver<QuizEvent>,
    app: App,
}

enum Action {
    None,
    Quit,
    Select(Selection),
    Restart,
}

impl<S: QuestionSource, R: Rng> Quiz<S, R> {
    /// Create a quiz over `source`, shuffling choices with `rng`.
    pub fn new(source: S, rng: R) -> Self {
        let (tx, events) = mpsc::unbounded_channel();
        Self {
            controller: Controller::new(source, rng, tx),
            events,
            app: App::new(),
        }
    }

    /// Run the quiz in the terminal.
    ///
    /// Loads the first batch, then takes over the terminal until the user
    /// quits. Load failures are shown on screen and can be retried with `r`.
    pub async fn run(mut self) -> Result<(), QuizError> {
        let mut terminal = TerminalGuard::enter()?;
        self.load(&mut terminal).await?;

        loop {
            self.drain_events();
            terminal.draw(|frame| ui::render(frame, &self.app))?;

            if !event::poll(INPUT_POLL_INTERVAL)? {
                continue;
            }
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match handle_input(&mut self.app, key.code) {
                Action::None => {}
                Action::Quit => break,
                Action::Select(selection) => {
                    self.controller.handle_selection(selection)?;
                }
                Action::Restart => self.load(&mut terminal).await?,
            }
        }

        Ok(())
    }

    /// Get a reference to the underlying view model.
    pub fn app(&self) -> &App {
        &self.app
    }

    async fn load(&mut self, terminal: &mut TerminalGuard) -> Result<(), QuizError> {
        self.app.apply(QuizEvent::Loading);
        terminal.draw(|frame| ui::render(frame, &self.app))?;

        // Failures reach the screen as a LoadFailed event.
        let _ = self.controller.restart().await;
        Ok(())
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.app.apply(event);
        }
    }
}

fn handle_input(app: &mut App, key: KeyCode) -> Action {
    if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc) {
        return Action::Quit;
    }

    match app.screen() {
        Screen::Loading => Action::None,
        Screen::Question => handle_question_input(app, key),
        Screen::Finished(_) | Screen::Failed(_) => handle_result_input(app, key),
    }
}

fn handle_question_input(app: &mut App, key: KeyCode) -> Action {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_option();
            Action::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_option();
            Action::None
        }
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            if app.select_option(index) {
                selection_action(app)
            } else {
                Action::None
            }
        }
        KeyCode::Enter | KeyCode::Char(' ') => selection_action(app),
        _ => Action::None,
    }
}

fn selection_action(app: &App) -> Action {
    app.selection().map_or(Action::None, Action::Select)
}

fn handle_result_input(app: &mut App, key: KeyCode) -> Action {
    match key {
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_results_down();
            Action::None
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_results_up();
            Action::None
        }
        KeyCode::Char('r') | KeyCode::Char('R') if app.can_restart() => Action::Restart,
        _ => Action::None,
    }
}
