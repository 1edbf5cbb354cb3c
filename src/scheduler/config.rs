//! Engine settings.
//!
//! Every constant the generation stages rely on lives here, with defaults
//! matching the institution's fixed timetable rules: three-period labs,
//! a 15:00 special slot holding Sports and Mentor/Library, and a `LUNCH`
//! placeholder on break periods.

use serde::{Deserialize, Serialize};

use crate::models::{PeriodTiming, ScheduledPeriod, Subject};

/// A fixed extracurricular activity placed in the special slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialActivity {
    /// Placeholder code written to the grid (upper case).
    pub code: String,
    /// Faculty role shown in the grid.
    pub faculty_role: String,
}

impl SpecialActivity {
    pub fn new(code: impl Into<String>, faculty_role: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            faculty_role: faculty_role.into(),
        }
    }

    /// Grid cell for this activity.
    pub fn placeholder(&self) -> ScheduledPeriod {
        ScheduledPeriod::new(&self.code, &self.faculty_role)
    }

    /// Whether a subject's code names this activity (case-insensitive, exact).
    pub fn matches(&self, subject: &Subject) -> bool {
        subject.code.to_uppercase() == self.code
    }
}

/// Settings for the timetable engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulerConfig {
    /// Contiguous periods per lab session.
    pub lab_block_len: usize,
    /// Start times that identify the special slot. Compared textually;
    /// both the 24-hour and the legacy 12-hour spelling are accepted.
    pub special_slot_times: Vec<String>,
    /// Activities for the special slot; the `i`-th goes to day index `i`.
    pub special_activities: Vec<SpecialActivity>,
    /// Upper-case keywords that keep a subject out of theory filling.
    pub reserved_keywords: Vec<String>,
    /// Placeholder code for break periods.
    pub lunch_code: String,
    /// Placeholder faculty for break periods.
    pub lunch_faculty: String,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            lab_block_len: 3,
            special_slot_times: vec!["15:00".to_string(), "03:00".to_string()],
            special_activities: vec![
                SpecialActivity::new("SPORTS", "Physical Director"),
                SpecialActivity::new("MEN/LIB", "Mentor/Librarian"),
            ],
            reserved_keywords: ["SPORTS", "MEN/LIB", "MENTOR", "LIBRARY"]
                .iter()
                .map(|k| k.to_string())
                .collect(),
            lunch_code: "LUNCH".to_string(),
            lunch_faculty: "-".to_string(),
        }
    }
}

impl SchedulerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the lab block length.
    pub fn with_lab_block_len(mut self, len: usize) -> Self {
        self.lab_block_len = len;
        self
    }

    /// Replaces the special slot start times.
    pub fn with_special_slot_times(mut self, times: Vec<String>) -> Self {
        self.special_slot_times = times;
        self
    }

    /// Replaces the special activities. Codes are upper-cased.
    pub fn with_special_activities(mut self, activities: Vec<SpecialActivity>) -> Self {
        self.special_activities = activities
            .into_iter()
            .map(|a| SpecialActivity {
                code: a.code.to_uppercase(),
                ..a
            })
            .collect();
        self
    }

    /// Replaces the reserved keywords. Keywords are upper-cased.
    pub fn with_reserved_keywords(mut self, keywords: Vec<String>) -> Self {
        self.reserved_keywords = keywords.into_iter().map(|k| k.to_uppercase()).collect();
        self
    }

    /// Grid cell for break periods.
    pub fn lunch_placeholder(&self) -> ScheduledPeriod {
        ScheduledPeriod::new(&self.lunch_code, &self.lunch_faculty)
    }

    /// Index of the first period whose start time is a special slot time.
    pub fn special_slot_index(&self, timings: &[PeriodTiming]) -> Option<usize> {
        timings
            .iter()
            .position(|t| self.special_slot_times.iter().any(|s| *s == t.start_time))
    }

    /// Whether a non-lab subject takes part in theory filling.
    pub fn is_theory(&self, subject: &Subject) -> bool {
        !subject.is_lab && !subject.code_contains_any(&self.reserved_keywords)
    }
}
