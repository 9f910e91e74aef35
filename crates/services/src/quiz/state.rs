use std::collections::BTreeSet;

use quiz_core::grading::Score;
use quiz_core::model::QuestionId;

use super::answers::AnswerStore;
use super::grader::GradingResult;
use super::shuffle::ShuffleCache;

/// Everything one quiz session remembers between interactions.
///
/// Created empty when the session starts; only [`SessionState::reset`]
/// (or dropping the session) clears it.
#[derive(Debug, Default)]
pub struct SessionState {
    shuffles: ShuffleCache,
    answers: AnswerStore,
    highlighted: BTreeSet<QuestionId>,
    score: Option<Score>,
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self::with_shuffles(ShuffleCache::new())
    }

    /// State whose shuffles are reproducible from `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_shuffles(ShuffleCache::seeded(seed))
    }

    fn with_shuffles(shuffles: ShuffleCache) -> Self {
        Self {
            shuffles,
            answers: AnswerStore::new(),
            highlighted: BTreeSet::new(),
            score: None,
        }
    }

    #[must_use]
    pub fn shuffles(&self) -> &ShuffleCache {
        &self.shuffles
    }

    pub fn shuffles_mut(&mut self) -> &mut ShuffleCache {
        &mut self.shuffles
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerStore {
        &self.answers
    }

    pub fn answers_mut(&mut self) -> &mut AnswerStore {
        &mut self.answers
    }

    #[must_use]
    pub fn highlighted(&self) -> &BTreeSet<QuestionId> {
        &self.highlighted
    }

    #[must_use]
    pub fn is_highlighted(&self, id: QuestionId) -> bool {
        self.highlighted.contains(&id)
    }

    /// Score of the latest grading pass, if any.
    #[must_use]
    pub fn score(&self) -> Option<Score> {
        self.score
    }

    /// Records a grading pass: updates highlights and replaces the score.
    pub fn apply_grading(&mut self, result: &GradingResult) {
        for outcome in result.outcomes() {
            if outcome.correct {
                self.highlighted.remove(&outcome.id);
            } else {
                self.highlighted.insert(outcome.id);
            }
        }
        self.score = Some(result.score());
    }

    /// Drops the score; it describes a selection that is no longer shown.
    pub fn clear_score(&mut self) {
        self.score = None;
    }

    /// Forgets shuffles, answers, highlights and score.
    pub fn reset(&mut self) {
        self.shuffles.clear();
        self.answers.clear();
        self.highlighted.clear();
        self.score = None;
    }
}
