use thiserror::Error;

use crate::game::quiz::phase::PhaseKind;

#[derive(Debug, Error, PartialEq)]
pub enum QuizError {
    /// The question source is unusable as a whole.
    #[error("{0}")]
    FatalInput(String),
    #[error("No valid questions available.")]
    EmptyQuiz,
    #[error("Cannot {operation} during the {phase:?} phase")]
    InvalidTransition {
        operation: &'static str,
        phase: PhaseKind,
    },
}
