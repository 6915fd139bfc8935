//! Error types shared across the crate.

use std::io;

use thiserror::Error;

use crate::data::LoadError;
use crate::models::ControllerState;

/// A caller broke the session's sequencing contract.
///
/// These indicate a defect in the caller, not a condition the respondent can
/// recover from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ContractViolation {
    #[error("no current question: the session is already complete")]
    NoCurrentQuestion,
    #[error("operation requires a presenting session, but the controller is {state}")]
    NotPresenting { state: ControllerState },
}

/// Error type for quiz operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("failed to load questions: {0}")]
    Load(#[from] LoadError),
    #[error(transparent)]
    Contract(#[from] ContractViolation),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
