use quiz_core::model::QuestionBank;
use storage::RowSource;

use crate::error::LoadError;

/// Reads every row from `source` and parses it into a bank.
///
/// # Errors
///
/// Returns `LoadError::Storage` when the source cannot be read and
/// `LoadError::Bank` when a row is malformed.
pub fn load_bank(source: &dyn RowSource) -> Result<QuestionBank, LoadError> {
    let origin = source.origin();
    let rows = source.read_rows()?;
    let bank = QuestionBank::load(rows).inspect_err(|err| {
        tracing::error!(%origin, error = %err, "question bank rejected");
    })?;
    tracing::info!(
        %origin,
        questions = bank.len(),
        years = bank.distinct_years().len(),
        categories = bank.distinct_categories().len(),
        "question bank ready"
    );
    Ok(bank)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::RawRow;
    use storage::{CsvRowSource, InMemoryRowSource};

    #[test]
    fn loads_from_in_memory_rows() {
        let source = InMemoryRowSource::new(vec![
            RawRow::new()
                .with("year", "2023")
                .with("category", "Math")
                .with("question", "1+1=?")
                .with("type", "single")
                .with("option1", "2")
                .with("option2", "3")
                .with("answer1", "2"),
        ]);
        let bank = load_bank(&source).unwrap();
        assert_eq!(bank.len(), 1);
    }

    #[test]
    fn malformed_rows_surface_as_bank_errors() {
        let source = CsvRowSource::from_bytes(
            "bad.csv",
            "year,category,question,type,option1\n2023,Math,q,single,only\n",
        );
        let err = load_bank(&source).unwrap_err();
        assert!(matches!(err, LoadError::Bank(_)));
    }

    #[test]
    fn unreadable_sources_surface_as_storage_errors() {
        let source = CsvRowSource::from_path("/missing/bank.csv");
        let err = load_bank(&source).unwrap_err();
        assert!(matches!(err, LoadError::Storage(_)));
    }
}
