//! CSV-backed row source.
//!
//! Cells are keyed by their (trimmed) header name. Blank cells and columns the
//! file does not have both read back as absent.

use std::io::Read;
use std::path::PathBuf;

use quiz_core::model::{COLUMN_QUESTION, COLUMN_TYPE, RawRow};

use crate::repository::{RowSource, StorageError};

const REQUIRED_COLUMNS: [&str; 2] = [COLUMN_QUESTION, COLUMN_TYPE];

#[derive(Clone)]
enum Origin {
    Path(PathBuf),
    Bytes { label: String, data: Vec<u8> },
}

/// Reads bank rows from a UTF-8 CSV file (or an in-memory upload).
#[derive(Clone)]
pub struct CsvRowSource {
    origin: Origin,
}

impl CsvRowSource {
    #[must_use]
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            origin: Origin::Path(path.into()),
        }
    }

    /// Wraps already-uploaded file contents; `label` names it in errors.
    #[must_use]
    pub fn from_bytes(label: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            origin: Origin::Bytes {
                label: label.into(),
                data: data.into(),
            },
        }
    }
}

impl std::fmt::Debug for CsvRowSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CsvRowSource")
            .field("origin", &self.origin())
            .finish()
    }
}

impl RowSource for CsvRowSource {
    fn origin(&self) -> String {
        match &self.origin {
            Origin::Path(path) => path.display().to_string(),
            Origin::Bytes { label, .. } => label.clone(),
        }
    }

    fn read_rows(&self) -> Result<Vec<RawRow>, StorageError> {
        match &self.origin {
            Origin::Path(path) => {
                let file = std::fs::File::open(path).map_err(|source| StorageError::Io {
                    path: path.clone(),
                    source,
                })?;
                parse_rows(file, &self.origin())
            }
            Origin::Bytes { label, data } => parse_rows(data.as_slice(), label),
        }
    }
}

fn header_name(raw: &str) -> String {
    // Spreadsheet exports often prefix the first header with a UTF-8 BOM.
    raw.trim_start_matches('\u{feff}').trim().to_string()
}

fn parse_rows(reader: impl Read, origin: &str) -> Result<Vec<RawRow>, StorageError> {
    let csv_error = |source| StorageError::Csv {
        origin: origin.to_string(),
        source,
    };

    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(header_name)
        .collect();

    if headers.iter().all(String::is_empty) {
        return Err(StorageError::MissingHeader {
            origin: origin.to_string(),
        });
    }
    if let Some(column) = REQUIRED_COLUMNS
        .into_iter()
        .find(|required| !headers.iter().any(|h| h == required))
    {
        return Err(StorageError::MissingColumn {
            origin: origin.to_string(),
            column,
        });
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .filter(|(header, _)| !header.is_empty())
            .map(|(header, value)| (header.clone(), value))
            .collect();
        rows.push(row);
    }

    tracing::info!(origin, rows = rows.len(), "read question rows");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_cells_are_absent() {
        let data = "year,category,question,type,option1,option2,option3,answer1\n\
                    2023,Math,2+2=?,single,3,,4,4\n";
        let rows = CsvRowSource::from_bytes("upload.csv", data).read_rows().unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("option1"), Some("3"));
        assert_eq!(rows[0].get("option2"), None);
        assert_eq!(rows[0].get("option3"), Some("4"));
        assert_eq!(rows[0].get("answer2"), None);
    }

    #[test]
    fn short_records_are_accepted() {
        let data = "question,type,option1,option2\nq,single,a\n";
        let rows = CsvRowSource::from_bytes("short.csv", data).read_rows().unwrap();
        assert_eq!(rows[0].get("option1"), Some("a"));
        assert_eq!(rows[0].get("option2"), None);
    }

    #[test]
    fn bom_prefixed_header_is_recognised() {
        let data = "\u{feff}year,question,type\n2023,q,single\n";
        let rows = CsvRowSource::from_bytes("bom.csv", data).read_rows().unwrap();
        assert_eq!(rows[0].get("year"), Some("2023"));
    }

    #[test]
    fn missing_required_column_is_reported() {
        let data = "year,category,type\n2023,Math,single\n";
        let err = CsvRowSource::from_bytes("bad.csv", data)
            .read_rows()
            .unwrap_err();
        assert!(matches!(
            err,
            StorageError::MissingColumn {
                column: "question",
                ..
            }
        ));
    }

    #[test]
    fn empty_input_has_no_header() {
        let err = CsvRowSource::from_bytes("empty.csv", "").read_rows().unwrap_err();
        assert!(matches!(err, StorageError::MissingHeader { .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = CsvRowSource::from_path("/definitely/not/here.csv")
            .read_rows()
            .unwrap_err();
        assert!(matches!(err, StorageError::Io { .. }));
    }
}
