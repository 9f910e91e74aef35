#![forbid(unsafe_code)]

pub mod csv_source;
pub mod repository;

pub use csv_source::CsvRowSource;
pub use repository::{InMemoryRowSource, RowSource, StorageError};
