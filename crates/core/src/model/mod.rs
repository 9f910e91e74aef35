mod bank;
mod facet;
mod ids;
mod question;
mod response;

pub use bank::{
    BankError, COLUMN_CATEGORY, COLUMN_QUESTION, COLUMN_TYPE, COLUMN_YEAR, QuestionBank, RawRow,
    answer_column, option_column,
};
pub use facet::{Category, FacetError, Year};
pub use ids::QuestionId;
pub use question::{MAX_OPTIONS, MIN_OPTIONS, Question, QuestionError, QuestionKind};
pub use response::Response;
