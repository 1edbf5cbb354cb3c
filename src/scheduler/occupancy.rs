//! Batch-scoped faculty occupancy.
//!
//! Records, for every faculty member, which (weekday, period) slots are
//! already committed by any section processed so far in the batch.
//! Entries are never removed; a new batch starts from a fresh map.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::Weekday;

/// Faculty → weekday → period index → occupant label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FacultyOccupancy {
    slots: HashMap<String, HashMap<Weekday, HashMap<usize, String>>>,
}

impl FacultyOccupancy {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the faculty has no booking at this slot.
    pub fn is_available(&self, faculty: &str, day: Weekday, period: usize) -> bool {
        self.occupant(faculty, day, period).is_none()
    }

    /// Records a booking, overwriting any existing one.
    ///
    /// Returns the previous occupant, if the slot was already taken.
    pub fn mark_busy(
        &mut self,
        faculty: &str,
        day: Weekday,
        period: usize,
        occupant: impl Into<String>,
    ) -> Option<String> {
        self.slots
            .entry(faculty.to_string())
            .or_default()
            .entry(day)
            .or_default()
            .insert(period, occupant.into())
    }

    /// Occupant label at a slot.
    pub fn occupant(&self, faculty: &str, day: Weekday, period: usize) -> Option<&str> {
        self.slots
            .get(faculty)?
            .get(&day)?
            .get(&period)
            .map(String::as_str)
    }

    /// Number of slots booked for a faculty member.
    pub fn busy_count(&self, faculty: &str) -> usize {
        self.slots
            .get(faculty)
            .map_or(0, |days| days.values().map(HashMap::len).sum())
    }

    /// Faculty names with at least one booking, sorted.
    pub fn faculties(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.slots.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Whether nothing has been booked.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
