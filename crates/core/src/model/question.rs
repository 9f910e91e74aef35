use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::model::facet::{Category, Year};
use crate::model::ids::QuestionId;

/// Smallest number of options a question may present.
pub const MIN_OPTIONS: usize = 2;
/// Number of sparse option/answer columns in a bank row.
pub const MAX_OPTIONS: usize = 5;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("unknown question type `{0}` (expected `single` or `multiple`)")]
    UnknownKind(String),

    #[error("expected at least {MIN_OPTIONS} options, found {0}")]
    TooFewOptions(usize),

    #[error("no correct answer given")]
    NoCorrectAnswer,

    #[error("answer `{0}` is not one of the options")]
    AnswerNotAnOption(String),
}

//
// ─── KIND ──────────────────────────────────────────────────────────────────────
//

/// How a question collects its response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    /// Exactly one option is picked (radio style).
    Single,
    /// Any subset of options is picked (checkbox style).
    Multiple,
}

impl QuestionKind {
    /// Parses the `type` column value (`single` / `multiple`, case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::UnknownKind` for any other value.
    pub fn parse(raw: &str) -> Result<Self, QuestionError> {
        let value = raw.trim();
        if value.eq_ignore_ascii_case("single") {
            Ok(Self::Single)
        } else if value.eq_ignore_ascii_case("multiple") {
            Ok(Self::Multiple)
        } else {
            Err(QuestionError::UnknownKind(value.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionKind::Single => "single",
            QuestionKind::Multiple => "multiple",
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// An immutable bank entry.
///
/// `options` keeps the source column order; display order comes from the
/// session's shuffle cache. `correct_answers` is never empty and every entry
/// is one of `options`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    text: String,
    year: Year,
    category: Category,
    kind: QuestionKind,
    options: Vec<String>,
    correct_answers: Vec<String>,
}

impl Question {
    /// Builds a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::MissingField` for blank text,
    /// `QuestionError::TooFewOptions` when fewer than [`MIN_OPTIONS`] options exist,
    /// `QuestionError::NoCorrectAnswer` when `correct_answers` is empty, and
    /// `QuestionError::AnswerNotAnOption` when an answer is not among the options.
    pub fn new(
        id: QuestionId,
        text: impl Into<String>,
        year: Year,
        category: Category,
        kind: QuestionKind,
        options: Vec<String>,
        correct_answers: Vec<String>,
    ) -> Result<Self, QuestionError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QuestionError::MissingField("question"));
        }
        if options.len() < MIN_OPTIONS {
            return Err(QuestionError::TooFewOptions(options.len()));
        }
        if correct_answers.is_empty() {
            return Err(QuestionError::NoCorrectAnswer);
        }
        if let Some(stray) = correct_answers.iter().find(|a| !options.contains(a)) {
            return Err(QuestionError::AnswerNotAnOption(stray.clone()));
        }

        Ok(Self {
            id,
            text,
            year,
            category,
            kind,
            options,
            correct_answers,
        })
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn year(&self) -> &Year {
        &self.year
    }

    #[must_use]
    pub fn category(&self) -> &Category {
        &self.category
    }

    #[must_use]
    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_answers(&self) -> &[String] {
        &self.correct_answers
    }

    /// The authoritative answer of a single-choice question (the first answer column).
    #[must_use]
    pub fn primary_answer(&self) -> &str {
        // `new` guarantees at least one answer.
        self.correct_answers.first().map_or("", String::as_str)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
