//! Input validation for timetable generation.
//!
//! Checks structural integrity of section configurations before any
//! grid is built. Detects:
//! - Empty working weeks and empty period lists
//! - Negative weekly hours
//! - Duplicate subject codes and duplicate working days
//! - Subjects with a blank code
//! - Placed subjects (labs and theory) with a blank faculty name
//!
//! The engine itself assumes validated input and never fails; malformed
//! sections are rejected here so a batch is all-or-nothing.

use crate::models::SectionConfig;
use crate::scheduler::SchedulerConfig;
use std::collections::HashSet;
use thiserror::Error;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The section has no working days.
    EmptyWorkingDays,
    /// The section has no periods.
    EmptyPeriodTimings,
    /// A subject declares negative weekly hours.
    NegativeWeeklyHours,
    /// Two subjects share the same code.
    DuplicateSubjectCode,
    /// A weekday appears twice in the working week.
    DuplicateWorkingDay,
    /// A subject has a blank code.
    EmptySubjectCode,
    /// A subject has a blank faculty name.
    MissingFaculty,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates one section configuration against the default engine
/// settings.
///
/// Checks:
/// 1. At least one working day, no weekday repeated
/// 2. At least one period
/// 3. Every subject has a non-blank code
/// 4. Every lab or theory subject has a non-blank faculty name
/// 5. No subject code repeated
/// 6. No negative weekly hours
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_section(config: &SectionConfig) -> ValidationResult {
    validate_section_with(config, &SchedulerConfig::default())
}

/// Validates one section configuration.
///
/// Faculty names are only required on subjects the engine places in the
/// grid: labs, and non-lab subjects outside `settings.reserved_keywords`.
pub fn validate_section_with(
    config: &SectionConfig,
    settings: &SchedulerConfig,
) -> ValidationResult {
    let mut errors = Vec::new();

    if config.working_days.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyWorkingDays,
            "Section has no working days",
        ));
    }

    let mut days = HashSet::new();
    for day in &config.working_days {
        if !days.insert(*day) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateWorkingDay,
                format!("Duplicate working day: {day}"),
            ));
        }
    }

    if config.period_timings.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyPeriodTimings,
            "Section has no period timings",
        ));
    }

    let mut codes = HashSet::new();
    for subject in &config.subjects {
        if subject.code.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptySubjectCode,
                format!("Subject taught by '{}' has no code", subject.faculty_name),
            ));
        } else if !codes.insert(subject.code.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateSubjectCode,
                format!("Duplicate subject code: {}", subject.code),
            ));
        }

        let placed = subject.is_lab || settings.is_theory(subject);
        if placed && subject.faculty_name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingFaculty,
                format!("Subject '{}' has no faculty", subject.code),
            ));
        }

        if subject.weekly_hours < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeWeeklyHours,
                format!(
                    "Subject '{}' has negative weekly hours: {}",
                    subject.code, subject.weekly_hours
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates every section of a batch.
///
/// Returns the position and errors of each invalid section, in batch order.
pub fn validate_batch(configs: &[SectionConfig]) -> Result<(), Vec<(usize, Vec<ValidationError>)>> {
    let failures: Vec<_> = configs
        .iter()
        .enumerate()
        .filter_map(|(i, cfg)| validate_section(cfg).err().map(|errs| (i, errs)))
        .collect();

    if failures.is_empty() {
        Ok(())
    } else {
        Err(failures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PeriodTiming, Subject, Weekday};

    fn sample_section() -> SectionConfig {
        SectionConfig::new("c1")
            .with_course("CSE", "A")
            .with_subject(Subject::new("OS", "Dr. Rao", 4))
            .with_subject(Subject::new("DBMS", "Ms. Iyer", 4))
            .with_subject(Subject::lab("OSL", "Dr. Rao", 3))
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_section(&sample_section()).is_ok());
    }

    #[test]
    fn test_empty_working_days() {
        let cfg = sample_section().with_working_days(vec![]);
        let errors = validate_section(&cfg).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyWorkingDays));
    }

    #[test]
    fn test_empty_period_timings() {
        let cfg = sample_section().with_period_timings(vec![]);
        let errors = validate_section(&cfg).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyPeriodTimings));
    }

    #[test]
    fn test_negative_weekly_hours() {
        let cfg = sample_section().with_subject(Subject::new("BAD", "F", -1));
        let errors = validate_section(&cfg).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::NegativeWeeklyHours);
        assert!(errors[0].message.contains("BAD"));
    }

    #[test]
    fn test_zero_weekly_hours_is_valid() {
        let cfg = sample_section().with_subject(Subject::new("ZERO", "F", 0));
        assert!(validate_section(&cfg).is_ok());
    }

    #[test]
    fn test_duplicate_subject_code() {
        let cfg = sample_section().with_subject(Subject::new("OS", "Someone", 2));
        let errors = validate_section(&cfg).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateSubjectCode));
    }

    #[test]
    fn test_duplicate_working_day() {
        let cfg = sample_section().with_working_days(vec![Weekday::Monday, Weekday::Monday]);
        let errors = validate_section(&cfg).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateWorkingDay));
    }

    #[test]
    fn test_blank_code_and_faculty() {
        let cfg = sample_section().with_subject(Subject::new("  ", "", 2));
        let errors = validate_section(&cfg).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptySubjectCode));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MissingFaculty));
    }

    #[test]
    fn test_reserved_subject_may_omit_faculty() {
        let cfg = SectionConfig::new("c2")
            .with_subject(Subject::new("OS", "Dr. Rao", 4))
            .with_subject(Subject::new("LIBRARY", "", 1))
            .with_subject(Subject::new("Mentor", " ", 1));
        assert!(validate_section(&cfg).is_ok());
    }

    #[test]
    fn test_lab_requires_faculty() {
        let cfg = sample_section().with_subject(Subject::lab("DBL", "", 3));
        let errors = validate_section(&cfg).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::MissingFaculty);
    }

    #[test]
    fn test_custom_keywords_decide_faculty_check() {
        let cfg = SectionConfig::new("c3").with_subject(Subject::new("YOGA", "", 1));
        assert!(validate_section(&cfg).is_err());

        let settings = SchedulerConfig::new().with_reserved_keywords(vec!["yoga".into()]);
        assert!(validate_section_with(&cfg, &settings).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let cfg = SectionConfig::new("bad")
            .with_working_days(vec![])
            .with_period_timings(vec![])
            .with_subject(Subject::new("X", "F", -2));
        let errors = validate_section(&cfg).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_validate_batch_reports_positions() {
        let good = sample_section();
        let bad = sample_section().with_period_timings(vec![]);
        let also_good = sample_section()
            .with_period_timings(vec![PeriodTiming::new("09:00", "10:00")]);

        assert!(validate_batch(&[good.clone(), also_good.clone()]).is_ok());

        let failures = validate_batch(&[good, bad, also_good]).unwrap_err();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, 1);
    }
}
