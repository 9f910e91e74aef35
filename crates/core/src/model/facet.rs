use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FacetError {
    #[error("{0} cannot be empty")]
    Empty(&'static str),
}

/// Exam year a question belongs to (trimmed, non-empty).
///
/// Kept as text: banks use labels like `2023` as well as `R5` or `2023-spring`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Year(String);

impl Year {
    /// Create a validated year label.
    ///
    /// # Errors
    ///
    /// Returns `FacetError::Empty` if the value is empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, FacetError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(FacetError::Empty("year"));
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Year {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Subject category of a question (trimmed, non-empty).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Category(String);

impl Category {
    /// Create a validated category label.
    ///
    /// # Errors
    ///
    /// Returns `FacetError::Empty` if the value is empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, FacetError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(FacetError::Empty("category"));
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
