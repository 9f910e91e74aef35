#![forbid(unsafe_code)]

pub mod error;
pub mod quiz;

pub use error::{LoadError, QuizError};
pub use quiz::{
    AnswerStore, Grader, GradingResult, OptionCard, QuestionCard, QuestionOutcome, QuizEvent,
    QuizOutcome, QuizScreen, QuizSession, SessionState, ShuffleCache, load_bank,
};
