//! Correctness rules for a single response, and the aggregate score.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::model::{Question, QuestionKind, Response};

/// Returns true when `response` answers `question` correctly.
///
/// - Single choice: the pick must equal the first correct answer; further
///   answer columns are ignored.
/// - Multiple choice: the picked set must equal the correct set exactly.
/// - No response is always wrong.
#[must_use]
pub fn is_correct(question: &Question, response: Option<&Response>) -> bool {
    let Some(response) = response else {
        return false;
    };

    match question.kind() {
        QuestionKind::Single => match response {
            Response::Single(value) => value == question.primary_answer(),
            Response::Multiple(_) => false,
        },
        QuestionKind::Multiple => {
            let expected: BTreeSet<&str> =
                question.correct_answers().iter().map(String::as_str).collect();
            let picked = response.to_set();
            let picked: BTreeSet<&str> = picked.iter().map(String::as_str).collect();
            picked == expected
        }
    }
}

/// Running score of the latest grading pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

impl Score {
    #[must_use]
    pub fn new(correct: usize, total: usize) -> Self {
        Self { correct, total }
    }

    /// Share of correct answers, rounded to the nearest whole percent.
    #[must_use]
    pub fn percentage(&self) -> usize {
        if self.total == 0 {
            return 0;
        }
        (self.correct * 100 + self.total / 2) / self.total
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.correct, self.total)
    }
}
