#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewError {
    UnknownChoice,
    Rejected,
    /// The chosen file could not be turned into a question bank.
    BankRejected(String),
}

impl ViewError {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            ViewError::UnknownChoice => "That choice is no longer available.".to_string(),
            ViewError::Rejected => {
                "That answer could not be recorded. Please try again.".to_string()
            }
            ViewError::BankRejected(reason) => format!("Could not load that file: {reason}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bank_rejection_names_the_reason() {
        let err = ViewError::BankRejected("missing column `year`".into());
        assert_eq!(
            err.message(),
            "Could not load that file: missing column `year`"
        );
    }
}
