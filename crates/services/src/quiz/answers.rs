use std::collections::HashMap;

use quiz_core::model::{QuestionId, Response};

/// The user's current response per question.
///
/// Every write replaces the previous response. Values are not checked
/// against the question's options here; a value that is not displayed simply
/// renders unselected and grades as wrong.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerStore {
    responses: HashMap<QuestionId, Response>,
}

impl AnswerStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_single(&mut self, id: QuestionId, value: impl Into<String>) {
        self.responses.insert(id, Response::Single(value.into()));
    }

    pub fn record_multiple<I, S>(&mut self, id: QuestionId, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.responses.insert(id, Response::multiple(values));
    }

    /// Applies one checkbox event to the stored selection.
    ///
    /// An unchecked-everything selection is kept as an empty set, which
    /// still grades as wrong.
    pub fn toggle_option(&mut self, id: QuestionId, option: &str, checked: bool) {
        let mut picks = self
            .responses
            .remove(&id)
            .map(|response| response.to_set())
            .unwrap_or_default();
        if checked {
            picks.insert(option.to_string());
        } else {
            picks.remove(option);
        }
        self.record_multiple(id, picks);
    }

    #[must_use]
    pub fn get(&self, id: QuestionId) -> Option<&Response> {
        self.responses.get(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.responses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    pub fn clear(&mut self) {
        self.responses.clear();
    }
}
