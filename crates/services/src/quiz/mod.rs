mod answers;
mod grader;
mod loader;
mod shuffle;
mod state;
mod view;
mod workflow;

// Public API of the quiz subsystem.
pub use answers::AnswerStore;
pub use grader::{Grader, GradingResult, QuestionOutcome};
pub use loader::load_bank;
pub use shuffle::ShuffleCache;
pub use state::SessionState;
pub use view::{OptionCard, QuestionCard, QuizScreen};
pub use workflow::{QuizEvent, QuizOutcome, QuizSession};
