use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A user's current answer to one question.
///
/// Absence of a `Response` means "unanswered".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Response {
    /// Radio-style pick.
    Single(String),
    /// Checkbox-style selection.
    Multiple(BTreeSet<String>),
}

impl Response {
    /// Builds a multiple-choice response from any collection of picks.
    #[must_use]
    pub fn multiple<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Multiple(values.into_iter().map(Into::into).collect())
    }

    /// Returns true when `option` is part of this response.
    #[must_use]
    pub fn contains(&self, option: &str) -> bool {
        match self {
            Response::Single(value) => value == option,
            Response::Multiple(values) => values.contains(option),
        }
    }

    /// The response viewed as a set of picks.
    #[must_use]
    pub fn to_set(&self) -> BTreeSet<String> {
        match self {
            Response::Single(value) => BTreeSet::from([value.clone()]),
            Response::Multiple(values) => values.clone(),
        }
    }
}
