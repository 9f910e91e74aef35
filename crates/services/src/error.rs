//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{BankError, QuestionId, QuestionKind};
use storage::StorageError;

/// Errors emitted while turning a row source into a question bank.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Bank(#[from] BankError),
}

/// Errors emitted by `QuizSession::dispatch`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("question {0} is not in the loaded bank")]
    UnknownQuestion(QuestionId),
    #[error("question {id} is a {kind}-choice question")]
    KindMismatch { id: QuestionId, kind: QuestionKind },
}
