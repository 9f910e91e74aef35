use std::fmt;

use quiz_core::filter::Selector;
use quiz_core::grading::Score;
use quiz_core::model::{QuestionId, QuestionKind};
use services::{QuestionCard, QuizEvent, QuizSession, load_bank};
use storage::{CsvRowSource, RowSource};

use crate::views::ViewError;

pub const EMPTY_SELECTION_MESSAGE: &str = "No questions match the selected filters.";

/// What the page asks of the quiz. Facet choices travel as indices into the
/// current choice list so the `<select>` value never has to encode a facet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    SelectYear(usize),
    SelectCategory(usize),
    Pick {
        question: QuestionId,
        option: String,
    },
    Toggle {
        question: QuestionId,
        option: String,
        checked: bool,
    },
    Grade,
    Reset,
    /// Replaces the bank with an uploaded CSV file.
    LoadBank {
        label: String,
        data: Vec<u8>,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceVm {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub input_id: String,
    pub label: String,
    pub selected: bool,
    /// Sent when the input changes.
    pub intent: QuizIntent,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub id: QuestionId,
    pub heading: String,
    pub text: String,
    pub input_type: &'static str,
    pub group_name: String,
    pub highlighted: bool,
    pub options: Vec<OptionVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizPageVm {
    pub origin: String,
    pub years: Vec<ChoiceVm>,
    pub categories: Vec<ChoiceVm>,
    pub questions: Vec<QuestionVm>,
    pub empty_message: Option<&'static str>,
    pub score_label: Option<String>,
}

impl QuizPageVm {
    #[must_use]
    pub fn can_grade(&self) -> bool {
        !self.questions.is_empty()
    }
}

#[must_use]
pub fn selector_label<T: fmt::Display>(selector: &Selector<T>) -> String {
    match selector {
        Selector::Unselected => "Not selected".to_string(),
        Selector::All => "All".to_string(),
        Selector::Value(value) => value.to_string(),
    }
}

#[must_use]
pub fn score_label(score: Score) -> String {
    format!(
        "Score: {}/{} ({}%)",
        score.correct,
        score.total,
        score.percentage()
    )
}

#[must_use]
pub fn map_choices<T>(choices: &[Selector<T>], current: &Selector<T>) -> Vec<ChoiceVm>
where
    T: fmt::Display + PartialEq,
{
    choices
        .iter()
        .enumerate()
        .map(|(index, choice)| ChoiceVm {
            value: index.to_string(),
            label: selector_label(choice),
            selected: choice == current,
        })
        .collect()
}

#[must_use]
pub fn map_question(card: &QuestionCard) -> QuestionVm {
    let id = card.id;
    let options = card
        .options
        .iter()
        .enumerate()
        .map(|(index, option)| {
            let intent = match card.kind {
                QuestionKind::Single => QuizIntent::Pick {
                    question: id,
                    option: option.label.clone(),
                },
                QuestionKind::Multiple => QuizIntent::Toggle {
                    question: id,
                    option: option.label.clone(),
                    checked: !option.selected,
                },
            };
            OptionVm {
                input_id: format!("q{id}-opt{index}"),
                label: option.label.clone(),
                selected: option.selected,
                intent,
            }
        })
        .collect();

    QuestionVm {
        id,
        heading: format!("Question {}", card.number),
        text: card.text.clone(),
        input_type: match card.kind {
            QuestionKind::Single => "radio",
            QuestionKind::Multiple => "checkbox",
        },
        group_name: format!("question-{id}"),
        highlighted: card.highlighted,
        options,
    }
}

/// Owns the quiz session behind the page and turns intents into events.
pub struct QuizVm {
    session: QuizSession,
    origin: String,
}

impl QuizVm {
    #[must_use]
    pub fn new(session: QuizSession, origin: impl Into<String>) -> Self {
        Self {
            session,
            origin: origin.into(),
        }
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn page(&self) -> QuizPageVm {
        let screen = self.session.render();
        let selection = self.session.selection();

        QuizPageVm {
            origin: self.origin.clone(),
            years: map_choices(&self.session.year_choices(), &selection.year),
            categories: map_choices(&self.session.category_choices(), &selection.category),
            questions: screen.questions.iter().map(map_question).collect(),
            empty_message: screen.is_empty().then_some(EMPTY_SELECTION_MESSAGE),
            score_label: screen.score.map(score_label),
        }
    }

    /// # Errors
    ///
    /// Returns `ViewError::UnknownChoice` for a facet index outside the
    /// current choices, `ViewError::Rejected` when the session refuses
    /// an answer and `ViewError::BankRejected` when an uploaded file does
    /// not load.
    pub fn apply(&mut self, intent: QuizIntent) -> Result<(), ViewError> {
        let event = match intent {
            QuizIntent::SelectYear(index) => {
                let choice = self
                    .session
                    .year_choices()
                    .get(index)
                    .cloned()
                    .ok_or(ViewError::UnknownChoice)?;
                QuizEvent::SelectYear(choice)
            }
            QuizIntent::SelectCategory(index) => {
                let choice = self
                    .session
                    .category_choices()
                    .get(index)
                    .cloned()
                    .ok_or(ViewError::UnknownChoice)?;
                QuizEvent::SelectCategory(choice)
            }
            QuizIntent::Pick { question, option } => QuizEvent::PickSingle {
                question,
                value: option,
            },
            QuizIntent::Toggle {
                question,
                option,
                checked,
            } => QuizEvent::ToggleOption {
                question,
                option,
                checked,
            },
            QuizIntent::Grade => QuizEvent::Grade,
            QuizIntent::Reset => QuizEvent::Reset,
            QuizIntent::LoadBank { label, data } => return self.replace_bank(label, data),
        };

        self.session.dispatch(event).map_err(|err| {
            tracing::warn!(error = %err, "quiz event rejected");
            ViewError::Rejected
        })?;
        Ok(())
    }

    /// On failure the current bank and session stay as they were.
    fn replace_bank(&mut self, label: String, data: Vec<u8>) -> Result<(), ViewError> {
        let source = CsvRowSource::from_bytes(label, data);
        let bank = load_bank(&source).map_err(|err| {
            tracing::warn!(origin = %source.origin(), error = %err, "uploaded bank rejected");
            ViewError::BankRejected(err.to_string())
        })?;
        self.origin = source.origin();
        self.session.load_bank(bank);
        Ok(())
    }
}
