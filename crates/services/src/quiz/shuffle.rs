use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::collections::HashMap;
use std::fmt;

use quiz_core::model::QuestionId;

/// Session-scoped option orderings.
///
/// The first request for a question fixes a uniformly random permutation of
/// its options; every later request returns that same permutation until the
/// cache is cleared.
pub struct ShuffleCache {
    orderings: HashMap<QuestionId, Vec<String>>,
    rng: StdRng,
}

impl ShuffleCache {
    /// Cache seeded from the operating system.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Cache with a reproducible shuffle sequence.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            orderings: HashMap::new(),
            rng,
        }
    }

    /// Returns the ordering for `id`, shuffling `options` on first use.
    pub fn ordering_for(&mut self, id: QuestionId, options: &[String]) -> &[String] {
        let rng = &mut self.rng;
        self.orderings.entry(id).or_insert_with(|| {
            let mut ordering = options.to_vec();
            ordering.shuffle(rng);
            ordering
        })
    }

    #[must_use]
    pub fn get(&self, id: QuestionId) -> Option<&[String]> {
        self.orderings.get(&id).map(Vec::as_slice)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.orderings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orderings.is_empty()
    }

    /// Drops every ordering; the random sequence continues where it was.
    pub fn clear(&mut self) {
        self.orderings.clear();
    }
}

impl Default for ShuffleCache {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ShuffleCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShuffleCache")
            .field("orderings_len", &self.orderings.len())
            .finish_non_exhaustive()
    }
}
