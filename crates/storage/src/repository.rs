use quiz_core::model::RawRow;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Errors surfaced by row sources.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid CSV in {origin}: {source}")]
    Csv {
        origin: String,
        #[source]
        source: ::csv::Error,
    },

    #[error("{origin} has no header row")]
    MissingHeader { origin: String },

    #[error("{origin} is missing required column `{column}`")]
    MissingColumn { origin: String, column: &'static str },
}

/// Source of untyped bank rows.
///
/// Implementations return every data row in source order; the header row is
/// consumed and used to key the cells.
pub trait RowSource: Send + Sync {
    /// Human-readable origin used in logs and errors.
    fn origin(&self) -> String;

    /// Read all rows.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the source cannot be read or is not tabular.
    fn read_rows(&self) -> Result<Vec<RawRow>, StorageError>;
}

/// Simple in-memory row source for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRowSource {
    rows: Arc<Vec<RawRow>>,
}

impl InMemoryRowSource {
    #[must_use]
    pub fn new(rows: Vec<RawRow>) -> Self {
        Self {
            rows: Arc::new(rows),
        }
    }
}

impl RowSource for InMemoryRowSource {
    fn origin(&self) -> String {
        "memory".to_string()
    }

    fn read_rows(&self) -> Result<Vec<RawRow>, StorageError> {
        Ok(self.rows.as_ref().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_source_returns_rows_in_order() {
        let source = InMemoryRowSource::new(vec![
            RawRow::new().with("question", "first"),
            RawRow::new().with("question", "second"),
        ]);

        let rows = source.read_rows().unwrap();
        let texts: Vec<_> = rows.iter().filter_map(|r| r.get("question")).collect();
        assert_eq!(texts, ["first", "second"]);
        assert_eq!(source.origin(), "memory");
    }
}
