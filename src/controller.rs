//! Session controller: loads a batch, presents questions, scores selections.

use rand::Rng;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::data::{LoadError, QuestionSource};
use crate::error::ContractViolation;
use crate::events::{QuizEvent, Selection};
use crate::models::{ControllerState, Summary};
use crate::session::Session;
use crate::shuffle::shuffle;
use crate::text::normalize;

/// Drives one quiz session at a time and reports progress as [`QuizEvent`]s.
///
/// The controller is the only owner of its [`Session`]; every mutation goes
/// through the methods below. State moves
/// `Idle -> Loading -> Presenting -> Finished`, and back to `Loading` on
/// [`Controller::restart`].
pub struct Controller<S, R> {
    source: S,
    rng: R,
    session: Session,
    state: ControllerState,
    events: mpsc::UnboundedSender<QuizEvent>,
}

impl<S: QuestionSource, R: Rng> Controller<S, R> {
    pub fn new(source: S, rng: R, events: mpsc::UnboundedSender<QuizEvent>) -> Self {
        Self {
            source,
            rng,
            session: Session::new(),
            state: ControllerState::Idle,
            events,
        }
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn summary(&self) -> Summary {
        self.session.summary()
    }

    /// Fetches a fresh batch and presents its first question.
    ///
    /// On failure the controller returns to `Idle`, emits
    /// [`QuizEvent::LoadFailed`], and leaves the previous session data alone.
    /// Nothing is retried.
    ///
    /// # Errors
    ///
    /// Returns the [`LoadError`] reported by the question source.
    pub async fn start_session(&mut self) -> Result<(), LoadError> {
        self.state = ControllerState::Loading;
        self.emit(QuizEvent::Loading);
        info!("loading question batch");

        match self.source.fetch_batch().await {
            Ok(batch) => {
                info!(questions = batch.len(), "question batch loaded");
                self.session.load(batch);
                self.state = ControllerState::Presenting;
                self.present();
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "failed to load question batch");
                self.state = ControllerState::Idle;
                self.emit(QuizEvent::LoadFailed {
                    reason: err.to_string(),
                });
                Err(err)
            }
        }
    }

    /// Always fetches a new batch; the previous one is discarded.
    ///
    /// # Errors
    ///
    /// See [`Controller::start_session`].
    pub async fn restart(&mut self) -> Result<(), LoadError> {
        self.start_session().await
    }

    /// Emits the current question with freshly shuffled choices, or
    /// [`QuizEvent::Finished`] once the batch is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::NotPresenting`] unless a batch is loaded.
    pub fn present_current(&mut self) -> Result<(), ContractViolation> {
        match self.state {
            ControllerState::Presenting | ControllerState::Finished => {
                self.present();
                Ok(())
            }
            state => Err(ContractViolation::NotPresenting { state }),
        }
    }

    /// Scores `choice_text` against the current question, advances, and
    /// presents whatever comes next. Returns whether the answer was correct.
    ///
    /// # Errors
    ///
    /// Returns a [`ContractViolation`] unless a question is being presented.
    pub fn submit_selection(&mut self, choice_text: &str) -> Result<bool, ContractViolation> {
        if self.state != ControllerState::Presenting {
            return Err(ContractViolation::NotPresenting { state: self.state });
        }

        let correct_answer = self
            .session
            .current()
            .map(|question| normalize(&question.correct_choice))
            .ok_or(ContractViolation::NoCurrentQuestion)?;
        let was_correct = normalize(choice_text) == correct_answer;

        self.session.record_answer(was_correct)?;
        debug!(
            question = self.session.current_index(),
            was_correct, "answer scored"
        );

        self.emit(QuizEvent::AnswerScored {
            was_correct,
            correct_answer,
        });
        self.present();
        Ok(was_correct)
    }

    /// Inbound `selectionMade` signal from the display surface.
    ///
    /// # Errors
    ///
    /// See [`Controller::submit_selection`].
    pub fn handle_selection(&mut self, selection: Selection) -> Result<bool, ContractViolation> {
        self.submit_selection(&selection.choice_text)
    }

    fn present(&mut self) {
        let Some(question) = self.session.current() else {
            let summary = self.session.summary();
            info!(
                correct = summary.correct_count,
                total = summary.total,
                "quiz finished"
            );
            self.state = ControllerState::Finished;
            self.emit(QuizEvent::Finished(summary));
            return;
        };

        let choices = shuffle(&question.choices(), &mut self.rng)
            .iter()
            .map(|choice| normalize(choice))
            .collect();

        let event = QuizEvent::QuestionReady {
            number: self.session.current_index() + 1,
            total: self.session.questions().len(),
            prompt: normalize(&question.prompt),
            choices,
            category: question.category.as_deref().map(normalize),
            difficulty: question.difficulty.clone(),
        };
        self.state = ControllerState::Presenting;
        self.emit(event);
    }

    fn emit(&self, event: QuizEvent) {
        if self.events.send(event).is_err() {
            warn!("display surface is gone; event dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::data::parse_batch;
    use crate::models::QuestionRecord;

    struct RawSource(&'static str);

    #[async_trait]
    impl QuestionSource for RawSource {
        async fn fetch_batch(&self) -> Result<Vec<QuestionRecord>, LoadError> {
            parse_batch(self.0)
        }
    }

    const ESCAPED: &str = r#"{"results": [{
        "category": "Entertainment: Books",
        "difficulty": "hard",
        "question": "Who wrote &quot;Le Petit Prince&quot;?",
        "correct_answer": "Antoine de Saint-Exup&eacute;ry",
        "incorrect_answers": ["Jules Verne", "Victor Hugo", "&Eacute;mile Zola"]
    }]}"#;

    fn controller(
        body: &'static str,
        seed: u64,
    ) -> (
        Controller<RawSource, StdRng>,
        mpsc::UnboundedReceiver<QuizEvent>,
    ) {
        let (tx, rx) = mpsc::unbounded_channel();
        let controller = Controller::new(RawSource(body), StdRng::seed_from_u64(seed), tx);
        (controller, rx)
    }

    fn drain(rx: &mut mpsc::UnboundedReceiver<QuizEvent>) -> Vec<QuizEvent> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    fn ready_choices(event: &QuizEvent) -> Vec<String> {
        match event {
            QuizEvent::QuestionReady { choices, .. } => choices.clone(),
            other => panic!("expected QuestionReady, got {other:?}"),
        }
    }

    #[test]
    fn new_controller_is_idle() {
        let (mut controller, mut rx) = controller(ESCAPED, 1);

        assert_eq!(controller.state(), ControllerState::Idle);
        assert_eq!(
            controller.present_current(),
            Err(ContractViolation::NotPresenting {
                state: ControllerState::Idle
            })
        );
        assert_eq!(
            controller.submit_selection("anything"),
            Err(ContractViolation::NotPresenting {
                state: ControllerState::Idle
            })
        );
        assert!(drain(&mut rx).is_empty());
    }

    #[tokio::test]
    async fn presented_text_is_normalized() {
        let (mut controller, mut rx) = controller(ESCAPED, 1);
        controller.start_session().await.unwrap();

        let events = drain(&mut rx);
        assert_eq!(events[0], QuizEvent::Loading);
        match &events[1] {
            QuizEvent::QuestionReady {
                number,
                total,
                prompt,
                choices,
                category,
                difficulty,
            } => {
                assert_eq!((*number, *total), (1, 1));
                assert_eq!(prompt, "Who wrote \"Le Petit Prince\"?");
                assert!(choices.contains(&"Antoine de Saint-Exupéry".to_string()));
                assert!(choices.contains(&"Émile Zola".to_string()));
                assert_eq!(category.as_deref(), Some("Entertainment: Books"));
                assert_eq!(difficulty.as_deref(), Some("hard"));
            }
            other => panic!("expected QuestionReady, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn escaped_and_plain_selection_both_score_correct() {
        let (mut controller, mut rx) = controller(ESCAPED, 1);
        controller.start_session().await.unwrap();
        drain(&mut rx);

        assert_eq!(
            controller.submit_selection("Antoine de Saint-Exup&eacute;ry"),
            Ok(true)
        );

        controller.start_session().await.unwrap();
        drain(&mut rx);
        assert_eq!(
            controller.submit_selection("Antoine de Saint-Exupéry"),
            Ok(true)
        );
    }

    #[tokio::test]
    async fn same_seed_gives_same_choice_order() {
        let (mut first, mut first_rx) = controller(ESCAPED, 99);
        let (mut second, mut second_rx) = controller(ESCAPED, 99);

        first.start_session().await.unwrap();
        second.start_session().await.unwrap();

        assert_eq!(drain(&mut first_rx), drain(&mut second_rx));
    }

    #[tokio::test]
    async fn representing_reshuffles_the_same_choices() {
        let (mut controller, mut rx) = controller(ESCAPED, 5);
        controller.start_session().await.unwrap();
        let first = ready_choices(&drain(&mut rx)[1]);

        let mut orders = vec![first.clone()];
        for _ in 0..20 {
            controller.present_current().unwrap();
            orders.push(ready_choices(&drain(&mut rx)[0]));
        }

        let mut expected = first.clone();
        expected.sort();
        for order in &orders {
            let mut sorted = order.clone();
            sorted.sort();
            assert_eq!(sorted, expected);
        }
        assert!(
            orders.iter().any(|order| *order != first),
            "twenty re-presentations should not all share one order"
        );
        assert_eq!(controller.session().current_index(), 0);
    }

    #[tokio::test]
    async fn submitting_after_finish_is_rejected() {
        let (mut controller, mut rx) = controller(ESCAPED, 1);
        controller.start_session().await.unwrap();
        controller.submit_selection("Jules Verne").unwrap();
        assert_eq!(controller.state(), ControllerState::Finished);
        drain(&mut rx);

        let err = controller.submit_selection("Jules Verne").unwrap_err();

        assert_eq!(
            err,
            ContractViolation::NotPresenting {
                state: ControllerState::Finished
            }
        );
        assert_eq!(controller.summary(), Summary { correct_count: 0, total: 1 });
        assert!(drain(&mut rx).is_empty());
    }

    #[tokio::test]
    async fn failed_restart_keeps_previous_session_data_but_goes_idle() {
        let (mut controller, mut rx) = controller(ESCAPED, 1);
        controller.start_session().await.unwrap();
        controller.submit_selection("Antoine de Saint-Exupéry").unwrap();

        controller.source = RawSource("not json");
        assert!(controller.restart().await.is_err());

        assert_eq!(controller.state(), ControllerState::Idle);
        assert_eq!(controller.session().correct_count(), 1);
        assert!(matches!(
            drain(&mut rx).last(),
            Some(QuizEvent::LoadFailed { .. })
        ));
    }

    #[tokio::test]
    async fn dropped_surface_does_not_break_scoring() {
        let (mut controller, rx) = controller(ESCAPED, 1);
        drop(rx);

        controller.start_session().await.unwrap();

        assert_eq!(controller.handle_selection(Selection::new("Victor Hugo")), Ok(false));
        assert_eq!(controller.state(), ControllerState::Finished);
    }
}
