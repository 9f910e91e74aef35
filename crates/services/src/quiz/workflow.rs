use std::fmt;

use quiz_core::filter::{FacetFilter, Selector, selector_choices};
use quiz_core::model::{Category, QuestionBank, QuestionId, QuestionKind, Year};

use super::grader::{Grader, GradingResult};
use super::state::SessionState;
use super::view::{QuestionCard, QuizScreen};
use crate::error::QuizError;

/// A single user interaction, as delivered by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizEvent {
    SelectYear(Selector<Year>),
    SelectCategory(Selector<Category>),
    /// Radio-style pick on a single-choice question.
    PickSingle { question: QuestionId, value: String },
    /// Checkbox change on a multiple-choice question.
    ToggleOption {
        question: QuestionId,
        option: String,
        checked: bool,
    },
    Grade,
    Reset,
}

/// What a dispatched event changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizOutcome {
    FilterChanged { visible: usize },
    Answered,
    Graded(GradingResult),
    Reset,
}

/// Event-driven quiz loop over one loaded bank.
///
/// Each UI event goes through [`QuizSession::dispatch`] and is followed by a
/// [`QuizSession::render`]. Shuffles for the visible questions are fixed when
/// the selection changes, so rendering never mutates and repeated renders
/// are identical.
pub struct QuizSession {
    bank: QuestionBank,
    filter: FacetFilter,
    state: SessionState,
    grader: Grader,
}

impl QuizSession {
    #[must_use]
    pub fn new(bank: QuestionBank, state: SessionState) -> Self {
        let mut session = Self {
            bank,
            filter: FacetFilter::default(),
            state,
            grader: Grader::new(),
        };
        session.prepare_visible();
        session
    }

    /// Starts the session on `filter` instead of the empty default selection.
    #[must_use]
    pub fn with_selection(mut self, filter: FacetFilter) -> Self {
        self.filter = filter;
        self.prepare_visible();
        self
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    #[must_use]
    pub fn selection(&self) -> &FacetFilter {
        &self.filter
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Year choices: `Unselected`, each year in bank order, then `All`.
    #[must_use]
    pub fn year_choices(&self) -> Vec<Selector<Year>> {
        selector_choices(&self.bank.distinct_years())
    }

    /// Category choices: `Unselected`, each category in bank order, then `All`.
    #[must_use]
    pub fn category_choices(&self) -> Vec<Selector<Category>> {
        selector_choices(&self.bank.distinct_categories())
    }

    /// Swaps in a new bank. The selection and all session state start over,
    /// since ids of the old bank mean nothing in the new one.
    pub fn load_bank(&mut self, bank: QuestionBank) {
        tracing::info!(questions = bank.len(), "question bank replaced");
        self.bank = bank;
        self.filter = FacetFilter::default();
        self.state.reset();
    }

    /// Applies one UI event.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::UnknownQuestion` when an answer event names a
    /// question outside the bank, and `QuizError::KindMismatch` for a radio
    /// pick on a multiple-choice question or a checkbox on a single-choice one.
    pub fn dispatch(&mut self, event: QuizEvent) -> Result<QuizOutcome, QuizError> {
        tracing::debug!(?event, "quiz event");
        match event {
            QuizEvent::SelectYear(year) => {
                self.filter.year = year;
                Ok(self.selection_changed())
            }
            QuizEvent::SelectCategory(category) => {
                self.filter.category = category;
                Ok(self.selection_changed())
            }
            QuizEvent::PickSingle { question, value } => {
                self.expect_kind(question, QuestionKind::Single)?;
                self.state.answers_mut().record_single(question, value);
                Ok(QuizOutcome::Answered)
            }
            QuizEvent::ToggleOption {
                question,
                option,
                checked,
            } => {
                self.expect_kind(question, QuestionKind::Multiple)?;
                self.state
                    .answers_mut()
                    .toggle_option(question, &option, checked);
                Ok(QuizOutcome::Answered)
            }
            QuizEvent::Grade => {
                let visible = self.filter.apply(&self.bank);
                let result = self.grader.grade(&visible, &mut self.state);
                Ok(QuizOutcome::Graded(result))
            }
            QuizEvent::Reset => {
                self.state.reset();
                self.prepare_visible();
                Ok(QuizOutcome::Reset)
            }
        }
    }

    /// Display-ready snapshot of the visible questions.
    #[must_use]
    pub fn render(&self) -> QuizScreen {
        let questions = self
            .filter
            .apply(&self.bank)
            .into_iter()
            .enumerate()
            .map(|(index, question)| {
                let id = question.id();
                let ordering = self
                    .state
                    .shuffles()
                    .get(id)
                    .unwrap_or(question.options());
                QuestionCard::build(
                    index + 1,
                    question,
                    ordering,
                    self.state.answers().get(id),
                    self.state.is_highlighted(id),
                )
            })
            .collect();

        QuizScreen {
            questions,
            score: self.state.score(),
        }
    }

    fn selection_changed(&mut self) -> QuizOutcome {
        self.state.clear_score();
        let visible = self.prepare_visible();
        tracing::debug!(selection = ?self.filter, visible, "selection changed");
        QuizOutcome::FilterChanged { visible }
    }

    /// Fixes shuffles for every visible question; returns how many are visible.
    fn prepare_visible(&mut self) -> usize {
        let visible = self.filter.apply(&self.bank);
        let shuffles = self.state.shuffles_mut();
        for question in &visible {
            shuffles.ordering_for(question.id(), question.options());
        }
        visible.len()
    }

    fn expect_kind(&self, id: QuestionId, expected: QuestionKind) -> Result<(), QuizError> {
        let question = self.bank.get(id).ok_or(QuizError::UnknownQuestion(id))?;
        if question.kind() == expected {
            Ok(())
        } else {
            Err(QuizError::KindMismatch {
                id,
                kind: question.kind(),
            })
        }
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("bank_len", &self.bank.len())
            .field("filter", &self.filter)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
