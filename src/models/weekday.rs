//! Working-week model.
//!
//! A section works on an ordered subset of a fixed six-day week. The
//! position of a weekday inside a section's `working_days` is its day
//! index in the generated grid; the weekday itself is what the faculty
//! occupancy map is keyed by, so two sections with different working
//! weeks still contend for the same real day.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A day of the academic week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// The full working week, Monday through Saturday.
    pub const ALL: [Weekday; 6] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Full English name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_order() {
        assert_eq!(Weekday::ALL.len(), 6);
        assert_eq!(Weekday::ALL[0], Weekday::Monday);
        assert_eq!(Weekday::ALL[5], Weekday::Saturday);
        assert!(Weekday::Monday < Weekday::Saturday);
    }

    #[test]
    fn test_names() {
        assert_eq!(Weekday::Wednesday.to_string(), "Wednesday");
    }

    #[test]
    fn test_serde_uses_full_name() {
        let json = serde_json::to_string(&Weekday::Friday).unwrap();
        assert_eq!(json, "\"Friday\"");
        let day: Weekday = serde_json::from_str("\"Saturday\"").unwrap();
        assert_eq!(day, Weekday::Saturday);
    }
}
