use quiz_core::grading::{Score, is_correct};
use quiz_core::model::{Question, QuestionId};

use super::answers::AnswerStore;
use super::state::SessionState;

/// Correctness of one graded question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionOutcome {
    pub id: QuestionId,
    pub correct: bool,
}

/// Outcome of one grading pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradingResult {
    outcomes: Vec<QuestionOutcome>,
    score: Score,
}

impl GradingResult {
    #[must_use]
    pub fn outcomes(&self) -> &[QuestionOutcome] {
        &self.outcomes
    }

    #[must_use]
    pub fn score(&self) -> Score {
        self.score
    }
}

/// Scores responses against the bank's correct answers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Grader;

impl Grader {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Grades `questions` against `answers` without touching session state.
    #[must_use]
    pub fn evaluate(&self, questions: &[&Question], answers: &AnswerStore) -> GradingResult {
        let outcomes: Vec<QuestionOutcome> = questions
            .iter()
            .map(|question| QuestionOutcome {
                id: question.id(),
                correct: is_correct(question, answers.get(question.id())),
            })
            .collect();
        let correct = outcomes.iter().filter(|outcome| outcome.correct).count();
        let score = Score::new(correct, outcomes.len());

        GradingResult { outcomes, score }
    }

    /// Grades `questions` and records the pass in `state`.
    ///
    /// Wrong or unanswered questions become highlighted; correct ones lose
    /// their highlight. The score replaces the previous one.
    pub fn grade(&self, questions: &[&Question], state: &mut SessionState) -> GradingResult {
        let result = self.evaluate(questions, state.answers());
        state.apply_grading(&result);

        tracing::info!(
            correct = result.score.correct,
            total = result.score.total,
            highlighted = state.highlighted().len(),
            "graded quiz"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{Category, QuestionKind, Year};

    fn question(id: u64, kind: QuestionKind, options: &[&str], answers: &[&str]) -> Question {
        Question::new(
            QuestionId::new(id),
            format!("q{id}"),
            Year::new("2023").unwrap(),
            Category::new("c").unwrap(),
            kind,
            options.iter().map(|o| (*o).to_string()).collect(),
            answers.iter().map(|a| (*a).to_string()).collect(),
        )
        .unwrap()
    }

    #[test]
    fn single_scenario_scores_full_marks() {
        let q = question(1, QuestionKind::Single, &["3", "4", "5"], &["4"]);
        let mut state = SessionState::seeded(1);
        state.answers_mut().record_single(q.id(), "4");

        let result = Grader::new().grade(&[&q], &mut state);

        assert_eq!(result.score(), Score::new(1, 1));
        assert!(state.highlighted().is_empty());
        assert_eq!(state.score(), Some(Score::new(1, 1)));
    }

    #[test]
    fn multiple_subset_is_wrong_and_highlighted() {
        let q = question(1, QuestionKind::Multiple, &["A", "B", "C"], &["A", "C"]);
        let mut state = SessionState::seeded(1);
        state.answers_mut().toggle_option(q.id(), "A", true);

        let result = Grader::new().grade(&[&q], &mut state);

        assert_eq!(result.score(), Score::new(0, 1));
        assert_eq!(
            result.outcomes(),
            [QuestionOutcome {
                id: q.id(),
                correct: false
            }]
        );
        assert!(state.is_highlighted(q.id()));
    }

    #[test]
    fn unanswered_counts_as_wrong() {
        let a = question(1, QuestionKind::Single, &["x", "y"], &["x"]);
        let b = question(2, QuestionKind::Single, &["x", "y"], &["y"]);
        let mut answers = AnswerStore::new();
        answers.record_single(a.id(), "x");

        let result = Grader::new().evaluate(&[&a, &b], &answers);
        assert_eq!(result.score(), Score::new(1, 2));
        let wrong: Vec<_> = result
            .outcomes()
            .iter()
            .filter(|outcome| !outcome.correct)
            .map(|outcome| outcome.id)
            .collect();
        assert_eq!(wrong, vec![b.id()]);
    }

    #[test]
    fn highlights_follow_the_latest_pass() {
        let q = question(1, QuestionKind::Single, &["x", "y"], &["x"]);
        let grader = Grader::new();
        let mut state = SessionState::seeded(1);

        state.answers_mut().record_single(q.id(), "y");
        grader.grade(&[&q], &mut state);
        assert!(state.is_highlighted(q.id()));

        // Still wrong: stays highlighted.
        grader.grade(&[&q], &mut state);
        assert!(state.is_highlighted(q.id()));

        state.answers_mut().record_single(q.id(), "x");
        grader.grade(&[&q], &mut state);
        assert!(!state.is_highlighted(q.id()));

        state.answers_mut().record_single(q.id(), "y");
        grader.grade(&[&q], &mut state);
        assert!(state.is_highlighted(q.id()));
    }

    #[test]
    fn questions_outside_the_pass_keep_their_highlight() {
        let a = question(1, QuestionKind::Single, &["x", "y"], &["x"]);
        let b = question(2, QuestionKind::Single, &["x", "y"], &["x"]);
        let grader = Grader::new();
        let mut state = SessionState::seeded(1);

        grader.grade(&[&a, &b], &mut state);
        assert_eq!(state.highlighted().len(), 2);

        state.answers_mut().record_single(b.id(), "x");
        grader.grade(&[&b], &mut state);
        assert!(state.is_highlighted(a.id()));
        assert!(!state.is_highlighted(b.id()));
        assert_eq!(state.score(), Some(Score::new(1, 1)));
    }

    #[test]
    fn empty_pass_scores_zero_of_zero() {
        let mut state = SessionState::seeded(1);
        let result = Grader::new().grade(&[], &mut state);
        assert_eq!(result.score(), Score::new(0, 0));
    }
}
