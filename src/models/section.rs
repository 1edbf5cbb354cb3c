//! Section configuration model.
//!
//! A section (one class of one course/semester) is the unit the engine
//! produces a timetable for. Its administrative identity is carried
//! through untouched; only the working week, the period timings and the
//! subject list drive generation.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{default_period_timings, PeriodTiming, Subject, Weekday};
use crate::error::Result;

/// Administrative metadata for a section.
///
/// Opaque to the engine except for [`SectionInfo::occupant_label`], which
/// names the section in the faculty occupancy map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionInfo {
    pub id: String,
    pub department: String,
    pub course: String,
    pub year: String,
    pub semester: String,
    pub section: String,
    pub academic_year: String,
    pub room_number: String,
    pub class_teacher: String,
    pub strength: String,
    /// "With effect from" date, as entered.
    pub wef: String,
}

impl SectionInfo {
    /// Label recorded against faculty bookings: `"{course}-{section}"`.
    pub fn occupant_label(&self) -> String {
        format!("{}-{}", self.course, self.section)
    }
}

/// Everything needed to generate one section's timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionConfig {
    /// Administrative identity.
    #[serde(flatten)]
    pub info: SectionInfo,
    /// Ordered working days; position = grid row.
    pub working_days: Vec<Weekday>,
    /// Ordered periods; position = grid column.
    pub period_timings: Vec<PeriodTiming>,
    /// Subjects to place.
    #[serde(default)]
    pub subjects: Vec<Subject>,
}

impl SectionConfig {
    /// Creates a section with the full six-day week, the default period
    /// timings and no subjects.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            info: SectionInfo {
                id: id.into(),
                academic_year: "2023-24".to_string(),
                ..SectionInfo::default()
            },
            working_days: Weekday::ALL.to_vec(),
            period_timings: default_period_timings(),
            subjects: Vec::new(),
        }
    }

    /// Sets course and section names (used for the occupant label).
    pub fn with_course(mut self, course: impl Into<String>, section: impl Into<String>) -> Self {
        self.info.course = course.into();
        self.info.section = section.into();
        self
    }

    /// Sets the department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.info.department = department.into();
        self
    }

    /// Replaces the working days.
    pub fn with_working_days(mut self, days: Vec<Weekday>) -> Self {
        self.working_days = days;
        self
    }

    /// Replaces the period timings.
    pub fn with_period_timings(mut self, timings: Vec<PeriodTiming>) -> Self {
        self.period_timings = timings;
        self
    }

    /// Adds a subject.
    pub fn with_subject(mut self, subject: Subject) -> Self {
        self.subjects.push(subject);
        self
    }

    /// Number of grid rows.
    pub fn day_count(&self) -> usize {
        self.working_days.len()
    }

    /// Number of grid columns.
    pub fn period_count(&self) -> usize {
        self.period_timings.len()
    }

    /// Label recorded against this section's faculty bookings.
    pub fn occupant_label(&self) -> String {
        self.info.occupant_label()
    }
}

/// Parses a JSON array of section configurations.
pub fn parse_batch(json: &str) -> Result<Vec<SectionConfig>> {
    Ok(serde_json::from_str(json)?)
}

/// Reads a JSON array of section configurations from a file.
pub fn read_batch(path: impl AsRef<Path>) -> Result<Vec<SectionConfig>> {
    let text = std::fs::read_to_string(path)?;
    parse_batch(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_defaults() {
        let cfg = SectionConfig::new("c1");
        assert_eq!(cfg.info.id, "c1");
        assert_eq!(cfg.info.academic_year, "2023-24");
        assert_eq!(cfg.day_count(), 6);
        assert_eq!(cfg.period_count(), 8);
        assert!(cfg.subjects.is_empty());
    }

    #[test]
    fn test_builder_and_label() {
        let cfg = SectionConfig::new("c1")
            .with_course("CSE", "A")
            .with_department("Computer Science")
            .with_working_days(vec![Weekday::Monday, Weekday::Wednesday])
            .with_subject(Subject::new("OS", "Dr. Rao", 4));

        assert_eq!(cfg.occupant_label(), "CSE-A");
        assert_eq!(cfg.info.department, "Computer Science");
        assert_eq!(cfg.day_count(), 2);
        assert_eq!(cfg.subjects[0].weekly_hours, 4);
    }

    #[test]
    fn test_form_json_round_trip() {
        let json = r#"{
            "id": "1",
            "department": "ECE",
            "course": "B.Tech",
            "year": "II",
            "semester": "I",
            "section": "B",
            "academicYear": "2024-25",
            "roomNumber": "204",
            "classTeacher": "Mr. Das",
            "strength": "60",
            "wef": "2024-07-01",
            "workingDays": ["Monday", "Tuesday"],
            "periodTimings": [
                {"startTime": "09:00", "endTime": "10:00"},
                {"startTime": "10:00", "endTime": "11:00", "isLunch": true}
            ],
            "subjects": [
                {"id": "s", "code": "EC1", "name": "Signals", "facultyName": "F1",
                 "weeklyHours": 3, "isLab": false}
            ]
        }"#;
        let cfg: SectionConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.info.room_number, "204");
        assert_eq!(cfg.occupant_label(), "B.Tech-B");
        assert_eq!(cfg.working_days, vec![Weekday::Monday, Weekday::Tuesday]);
        assert!(cfg.period_timings[1].is_lunch);

        let back: SectionConfig =
            serde_json::from_str(&serde_json::to_string(&cfg).unwrap()).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn test_parse_batch() {
        let batch = parse_batch(
            r#"[{"course": "CSE", "section": "A",
                 "workingDays": ["Monday"],
                 "periodTimings": [{"startTime": "09:00", "endTime": "10:00"}]}]"#,
        )
        .unwrap();
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].occupant_label(), "CSE-A");
        assert!(batch[0].subjects.is_empty());

        assert!(matches!(
            parse_batch("{}"),
            Err(crate::TimetableError::Json(_))
        ));
    }

    #[test]
    fn test_read_batch_missing_file() {
        assert!(matches!(
            read_batch("/nonexistent/batch.json"),
            Err(crate::TimetableError::Io(_))
        ));
    }
}
