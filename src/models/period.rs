//! Period timing model.
//!
//! A section's day is an ordered list of periods. Order is significant:
//! period index `i` is adjacent to `i + 1`, which is what makes a run of
//! periods contiguous for lab blocks.
//!
//! Times are kept as the text the user entered (`"09:00"`, `"03:00"`).
//! The engine only compares them textually and never parses them.

use serde::{Deserialize, Serialize};

/// One period of the teaching day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodTiming {
    /// Start time as entered (e.g. `"09:00"`).
    pub start_time: String,
    /// End time as entered.
    pub end_time: String,
    /// Whether this period is a break locked on every working day.
    #[serde(default)]
    pub is_lunch: bool,
}

impl PeriodTiming {
    /// Creates a teaching period.
    pub fn new(start_time: impl Into<String>, end_time: impl Into<String>) -> Self {
        Self {
            start_time: start_time.into(),
            end_time: end_time.into(),
            is_lunch: false,
        }
    }

    /// Creates a lunch break period.
    pub fn lunch(start_time: impl Into<String>, end_time: impl Into<String>) -> Self {
        Self::new(start_time, end_time).with_lunch(true)
    }

    /// Sets the lunch flag.
    pub fn with_lunch(mut self, is_lunch: bool) -> Self {
        self.is_lunch = is_lunch;
        self
    }

    /// Column header label: `"09:00 - 10:00"`, suffixed with `" (Lunch)"` for breaks.
    pub fn label(&self) -> String {
        if self.is_lunch {
            format!("{} - {} (Lunch)", self.start_time, self.end_time)
        } else {
            format!("{} - {}", self.start_time, self.end_time)
        }
    }
}

/// The default eight-period day offered by the input form.
///
/// Lunch is period index 5 (13:15-14:00); period index 7 starts at 15:00
/// and is therefore picked up as the special slot.
pub fn default_period_timings() -> Vec<PeriodTiming> {
    vec![
        PeriodTiming::new("09:00", "10:00"),
        PeriodTiming::new("10:00", "11:00"),
        PeriodTiming::new("11:00", "11:15"),
        PeriodTiming::new("11:15", "12:15"),
        PeriodTiming::new("12:15", "13:15"),
        PeriodTiming::lunch("13:15", "14:00"),
        PeriodTiming::new("14:00", "15:00"),
        PeriodTiming::new("15:00", "16:00"),
    ]
}
