use quiz_core::grading::Score;
use quiz_core::model::{Question, QuestionId, QuestionKind, Response};

/// Presentation-agnostic snapshot of the quiz for the UI layer.
///
/// No pre-formatted labels: the UI decides wording and numbering style.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuizScreen {
    pub questions: Vec<QuestionCard>,
    pub score: Option<Score>,
}

impl QuizScreen {
    /// True when the current selection matches no question.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// One displayed question in its stable shuffled order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionCard {
    pub id: QuestionId,
    /// 1-based position within the current filtered list.
    pub number: usize,
    pub text: String,
    pub kind: QuestionKind,
    pub options: Vec<OptionCard>,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionCard {
    pub label: String,
    pub selected: bool,
}

impl QuestionCard {
    pub(crate) fn build(
        number: usize,
        question: &Question,
        ordering: &[String],
        response: Option<&Response>,
        highlighted: bool,
    ) -> Self {
        // A stored value that is not displayed matches nothing and shows as blank.
        let options = ordering
            .iter()
            .map(|label| OptionCard {
                label: label.clone(),
                selected: response.is_some_and(|r| r.contains(label)),
            })
            .collect();

        Self {
            id: question.id(),
            number,
            text: question.text().to_string(),
            kind: question.kind(),
            options,
            highlighted,
        }
    }
}
