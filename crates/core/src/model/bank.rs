use std::collections::{HashMap, HashSet};
use thiserror::Error;

use crate::model::facet::{Category, Year};
use crate::model::ids::QuestionId;
use crate::model::question::{MAX_OPTIONS, Question, QuestionError, QuestionKind};

pub const COLUMN_YEAR: &str = "year";
pub const COLUMN_CATEGORY: &str = "category";
pub const COLUMN_QUESTION: &str = "question";
pub const COLUMN_TYPE: &str = "type";

/// Header name of the sparse option column at 1-based `position`.
#[must_use]
pub fn option_column(position: usize) -> String {
    format!("option{position}")
}

/// Header name of the sparse answer column at 1-based `position`.
#[must_use]
pub fn answer_column(position: usize) -> String {
    format!("answer{position}")
}

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BankError {
    /// `row` is the 1-based data row (the header is not counted).
    #[error("malformed row {row}: {source}")]
    MalformedRow {
        row: usize,
        #[source]
        source: QuestionError,
    },
}

//
// ─── RAW ROW ───────────────────────────────────────────────────────────────────
//

/// One untyped record of the tabular bank, keyed by header name.
///
/// Only present cells are stored: blank cells and missing columns both read
/// back as `None`, never as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    cells: HashMap<String, String>,
}

impl RawRow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert; see [`RawRow::insert`].
    #[must_use]
    pub fn with(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(column, value);
        self
    }

    /// Stores a trimmed cell value. Blank values are dropped.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return;
        }
        self.cells.insert(column.into(), trimmed.to_string());
    }

    #[must_use]
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    fn require(&self, column: &'static str) -> Result<&str, QuestionError> {
        self.get(column).ok_or(QuestionError::MissingField(column))
    }

    fn sparse(&self, column: fn(usize) -> String) -> Vec<String> {
        (1..=MAX_OPTIONS)
            .filter_map(|position| self.get(&column(position)))
            .map(str::to_string)
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for RawRow
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut row = RawRow::new();
        for (column, value) in iter {
            row.insert(column, value);
        }
        row
    }
}

//
// ─── BANK ──────────────────────────────────────────────────────────────────────
//

/// The typed question bank, in source row order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Parses raw rows into questions.
    ///
    /// Each question gets its 1-based row number as `QuestionId`. The load is
    /// all-or-nothing: the first malformed row aborts it.
    ///
    /// # Errors
    ///
    /// Returns `BankError::MalformedRow` naming the offending row.
    pub fn load(rows: impl IntoIterator<Item = RawRow>) -> Result<Self, BankError> {
        let mut questions = Vec::new();
        for (index, row) in rows.into_iter().enumerate() {
            let number = index + 1;
            let question = parse_row(QuestionId::new(number as u64), &row)
                .map_err(|source| BankError::MalformedRow {
                    row: number,
                    source,
                })?;
            questions.push(question);
        }

        tracing::debug!(questions = questions.len(), "question bank loaded");
        Ok(Self { questions })
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Distinct years in first-encountered order.
    #[must_use]
    pub fn distinct_years(&self) -> Vec<Year> {
        distinct(self.questions.iter().map(Question::year))
    }

    /// Distinct categories in first-encountered order.
    #[must_use]
    pub fn distinct_categories(&self) -> Vec<Category> {
        distinct(self.questions.iter().map(Question::category))
    }
}

fn distinct<'a, T>(values: impl Iterator<Item = &'a T>) -> Vec<T>
where
    T: Clone + Eq + std::hash::Hash + 'a,
{
    let mut seen = HashSet::new();
    values
        .filter(|value| seen.insert(*value))
        .cloned()
        .collect()
}

fn parse_row(id: QuestionId, row: &RawRow) -> Result<Question, QuestionError> {
    let text = row.require(COLUMN_QUESTION)?;
    let kind = QuestionKind::parse(row.require(COLUMN_TYPE)?)?;
    let year = Year::new(row.require(COLUMN_YEAR)?)
        .map_err(|_| QuestionError::MissingField(COLUMN_YEAR))?;
    let category = Category::new(row.require(COLUMN_CATEGORY)?)
        .map_err(|_| QuestionError::MissingField(COLUMN_CATEGORY))?;
    let options = row.sparse(option_column);
    let answers = row.sparse(answer_column);

    if kind == QuestionKind::Single && answers.len() > 1 {
        tracing::warn!(
            question = %id,
            answers = answers.len(),
            "single-choice row lists several answers; only the first is used"
        );
    }

    Question::new(id, text, year, category, kind, options, answers)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn row(year: &str, category: &str, question: &str) -> RawRow {
        RawRow::new()
            .with(COLUMN_YEAR, year)
            .with(COLUMN_CATEGORY, category)
            .with(COLUMN_QUESTION, question)
            .with(COLUMN_TYPE, "single")
            .with("option1", "yes")
            .with("option2", "no")
            .with("answer1", "yes")
    }

    #[test]
    fn raw_row_drops_blank_cells() {
        let raw = RawRow::new().with("option1", "  ").with("option2", " B ");
        assert_eq!(raw.get("option1"), None);
        assert_eq!(raw.get("option2"), Some("B"));
        assert_eq!(raw.get("option3"), None);
    }

    #[test]
    fn load_collapses_sparse_columns() {
        let raw = RawRow::new()
            .with(COLUMN_YEAR, "2023")
            .with(COLUMN_CATEGORY, "Math")
            .with(COLUMN_QUESTION, "Pick primes")
            .with(COLUMN_TYPE, "multiple")
            .with("option1", "2")
            .with("option3", "3")
            .with("option5", "4")
            .with("answer2", "2")
            .with("answer4", "3");

        let bank = QuestionBank::load(vec![raw]).unwrap();
        let q = &bank.questions()[0];
        assert_eq!(q.id(), QuestionId::new(1));
        assert_eq!(q.kind(), QuestionKind::Multiple);
        assert_eq!(q.options(), ["2", "3", "4"]);
        assert_eq!(q.correct_answers(), ["2", "3"]);
    }

    #[test]
    fn load_reports_row_number_of_malformed_row() {
        let bad = RawRow::new()
            .with(COLUMN_YEAR, "2023")
            .with(COLUMN_CATEGORY, "Math")
            .with(COLUMN_TYPE, "single");
        let err = QuestionBank::load(vec![row("2023", "Math", "ok"), bad]).unwrap_err();
        assert_eq!(
            err,
            BankError::MalformedRow {
                row: 2,
                source: QuestionError::MissingField("question"),
            }
        );
    }

    #[test]
    fn load_rejects_unknown_type() {
        let bad = row("2023", "Math", "q").with(COLUMN_TYPE, "essay");
        let err = QuestionBank::load(vec![bad]).unwrap_err();
        assert!(matches!(
            err,
            BankError::MalformedRow {
                row: 1,
                source: QuestionError::UnknownKind(_)
            }
        ));
    }

    #[test]
    fn load_rejects_answer_without_option() {
        let bad = row("2023", "Math", "q").with("answer2", "maybe");
        let err = QuestionBank::load(vec![bad]).unwrap_err();
        assert!(matches!(
            err,
            BankError::MalformedRow {
                source: QuestionError::AnswerNotAnOption(ref value),
                ..
            } if value == "maybe"
        ));
    }

    #[test]
    fn duplicate_texts_get_distinct_ids() {
        let bank = QuestionBank::load(vec![row("2023", "A", "same"), row("2024", "B", "same")])
            .unwrap();
        let ids: Vec<_> = bank.questions().iter().map(Question::id).collect();
        assert_eq!(ids, vec![QuestionId::new(1), QuestionId::new(2)]);
        assert_eq!(bank.get(QuestionId::new(2)).unwrap().year().as_str(), "2024");
    }

    #[test]
    fn distinct_facets_keep_first_seen_order() {
        let bank = QuestionBank::load(vec![
            row("2024", "Physics", "a"),
            row("2023", "Math", "b"),
            row("2024", "Math", "c"),
            row("2022", "Physics", "d"),
        ])
        .unwrap();

        let years: Vec<_> = bank.distinct_years().iter().map(|y| y.to_string()).collect();
        let categories: Vec<_> = bank
            .distinct_categories()
            .iter()
            .map(|c| c.to_string())
            .collect();
        assert_eq!(years, ["2024", "2023", "2022"]);
        assert_eq!(categories, ["Physics", "Math"]);
    }

    #[test]
    fn empty_input_is_an_empty_bank() {
        let bank = QuestionBank::load(Vec::new()).unwrap();
        assert!(bank.is_empty());
        assert!(bank.distinct_years().is_empty());
    }
}
