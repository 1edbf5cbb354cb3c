//! Crate error type.

use thiserror::Error;

use crate::validation::ValidationError;

pub type Result<T> = std::result::Result<T, TimetableError>;

#[derive(Debug, Error)]
pub enum TimetableError {
    /// A section failed boundary validation; nothing in the batch was generated.
    #[error("section {section} ('{label}') is invalid: {}", join_messages(.errors))]
    Validation {
        /// Position of the section in the batch.
        section: usize,
        /// Occupant label of the section.
        label: String,
        errors: Vec<ValidationError>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_validation_display() {
        let err = TimetableError::Validation {
            section: 1,
            label: "CSE-A".into(),
            errors: vec![
                ValidationError::new(ValidationErrorKind::EmptyWorkingDays, "no working days"),
                ValidationError::new(ValidationErrorKind::EmptyPeriodTimings, "no periods"),
            ],
        };
        assert_eq!(
            err.to_string(),
            "section 1 ('CSE-A') is invalid: no working days; no periods"
        );
    }

    #[test]
    fn test_json_from() {
        let parse: std::result::Result<Vec<u8>, _> = serde_json::from_str("not json");
        let err: TimetableError = parse.unwrap_err().into();
        assert!(matches!(err, TimetableError::Json(_)));
    }
}
