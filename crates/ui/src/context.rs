use std::sync::Arc;

use quiz_core::FacetFilter;
use quiz_core::model::QuestionBank;
use services::{QuizSession, SessionState};

pub trait UiApp: Send + Sync {
    fn question_bank(&self) -> Arc<QuestionBank>;
    /// Where the bank was read from, shown under the page title.
    fn bank_origin(&self) -> String;
    /// Fixed seed for option shuffles; `None` draws from the OS.
    fn shuffle_seed(&self) -> Option<u64>;
    fn initial_selection(&self) -> FacetFilter;
}

#[derive(Clone)]
pub struct AppContext {
    bank: Arc<QuestionBank>,
    bank_origin: String,
    shuffle_seed: Option<u64>,
    initial_selection: FacetFilter,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            bank: app.question_bank(),
            bank_origin: app.bank_origin(),
            shuffle_seed: app.shuffle_seed(),
            initial_selection: app.initial_selection(),
        }
    }

    #[must_use]
    pub fn bank_origin(&self) -> &str {
        &self.bank_origin
    }

    /// Fresh session over the shared bank, starting on the configured selection.
    #[must_use]
    pub fn new_session(&self) -> QuizSession {
        let state = match self.shuffle_seed {
            Some(seed) => SessionState::seeded(seed),
            None => SessionState::new(),
        };
        QuizSession::new(self.bank.as_ref().clone(), state)
            .with_selection(self.initial_selection.clone())
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
