//! Year/category narrowing of a question bank.

use std::fmt;

use crate::model::{Category, Question, QuestionBank, Year};

/// A user's choice on one facet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Selector<T> {
    /// Nothing chosen yet.
    #[default]
    Unselected,
    /// Every value of the facet.
    All,
    /// One concrete facet value.
    Value(T),
}

impl<T: PartialEq> Selector<T> {
    /// True when this selector does not rule `value` out.
    ///
    /// `Unselected` admits nothing: a facet must be chosen before any
    /// question shows.
    #[must_use]
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Selector::Unselected => false,
            Selector::All => true,
            Selector::Value(expected) => expected == value,
        }
    }

    #[must_use]
    pub fn is_unselected(&self) -> bool {
        matches!(self, Selector::Unselected)
    }
}

impl<T: fmt::Display> fmt::Display for Selector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Unselected => f.write_str("unselected"),
            Selector::All => f.write_str("all"),
            Selector::Value(value) => write!(f, "{value}"),
        }
    }
}

/// Choices offered for one facet: `Unselected`, each value in source order, then `All`.
#[must_use]
pub fn selector_choices<T: Clone>(values: &[T]) -> Vec<Selector<T>> {
    let mut choices = Vec::with_capacity(values.len() + 2);
    choices.push(Selector::Unselected);
    choices.extend(values.iter().cloned().map(Selector::Value));
    choices.push(Selector::All);
    choices
}

/// The current year/category selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FacetFilter {
    pub year: Selector<Year>,
    pub category: Selector<Category>,
}

impl FacetFilter {
    #[must_use]
    pub fn new(year: Selector<Year>, category: Selector<Category>) -> Self {
        Self { year, category }
    }

    /// Both facets set to `All`.
    #[must_use]
    pub fn everything() -> Self {
        Self::new(Selector::All, Selector::All)
    }

    /// Returns the questions passing the selection, in bank order.
    ///
    /// Empty while either facet is unselected. `All` leaves its facet
    /// unconstrained and a concrete value must match exactly.
    #[must_use]
    pub fn apply<'a>(&self, bank: &'a QuestionBank) -> Vec<&'a Question> {
        if self.year.is_unselected() || self.category.is_unselected() {
            return Vec::new();
        }

        bank.questions()
            .iter()
            .filter(|q| self.year.admits(q.year()) && self.category.admits(q.category()))
            .collect()
    }
}
