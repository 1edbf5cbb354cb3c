//! Theory filling with escalating selection tiers.
//!
//! # Algorithm
//!
//! Cells are visited day-major, period-minor. A round-robin cursor starts
//! at 0, is never reset between days, and advances once per visited cell
//! whether or not the cell was already filled. For each empty cell the
//! tiers are tried in order and the first one that selects a subject wins:
//!
//! 1. [`FreshAndFree`]: not yet used today, faculty available.
//! 2. [`RelaxedFresh`]: faculty available, repeats allowed.
//! 3. [`Forced`]: the subject at the cursor, regardless of availability.
//!
//! Every committed subject books its faculty. A forced pick whose faculty
//! was already booked is recorded as a [`Conflict`].
//!
//! With no theory subjects nothing is assigned and empty cells remain.

use log::{trace, warn};
use std::collections::HashSet;
use std::fmt::Debug;

use super::FacultyOccupancy;
use crate::models::{Conflict, Grid, ScheduledPeriod, Subject, Weekday};

/// Read-only view of one cell offered to the selection tiers.
#[derive(Debug, Clone, Copy)]
pub struct CellContext<'a> {
    /// Theory subjects in round-robin order.
    pub subjects: &'a [&'a Subject],
    /// Round-robin cursor (not reduced modulo the subject count).
    pub cursor: usize,
    /// Weekday of the cell.
    pub day: Weekday,
    /// Period index of the cell.
    pub period: usize,
    /// Batch occupancy so far.
    pub occupancy: &'a FacultyOccupancy,
    /// Codes already placed today by a fresh pick.
    pub used_today: &'a HashSet<String>,
}

impl CellContext<'_> {
    /// Subject indices starting at the cursor, wrapping once around.
    pub fn rotation(&self) -> impl Iterator<Item = usize> {
        let n = self.subjects.len();
        let cursor = self.cursor;
        (0..n).map(move |k| (cursor + k) % n)
    }

    /// Whether the subject's faculty is free at this cell.
    pub fn faculty_free(&self, index: usize) -> bool {
        self.occupancy
            .is_available(&self.subjects[index].faculty_name, self.day, self.period)
    }
}

/// A candidate-selection strategy for one grid cell.
///
/// Implementations are pure: they only inspect the context and return the
/// index of the chosen subject.
pub trait SelectionTier: Send + Sync + Debug {
    /// Tier name used in logs.
    fn name(&self) -> &'static str;

    /// Picks a subject index, or `None` to defer to the next tier.
    fn select(&self, cell: &CellContext<'_>) -> Option<usize>;

    /// Whether a pick from this tier counts as the subject's use for the day.
    fn records_daily_use(&self) -> bool {
        false
    }
}

/// Tier 1: first subject from the cursor not used today whose faculty is free.
#[derive(Debug, Clone, Copy)]
pub struct FreshAndFree;

impl SelectionTier for FreshAndFree {
    fn name(&self) -> &'static str {
        "fresh"
    }

    fn select(&self, cell: &CellContext<'_>) -> Option<usize> {
        cell.rotation().find(|&i| {
            !cell.used_today.contains(&cell.subjects[i].code) && cell.faculty_free(i)
        })
    }

    fn records_daily_use(&self) -> bool {
        true
    }
}

/// Tier 2: first subject from the cursor whose faculty is free.
#[derive(Debug, Clone, Copy)]
pub struct RelaxedFresh;

impl SelectionTier for RelaxedFresh {
    fn name(&self) -> &'static str {
        "relaxed"
    }

    fn select(&self, cell: &CellContext<'_>) -> Option<usize> {
        cell.rotation().find(|&i| cell.faculty_free(i))
    }
}

/// Tier 3: the subject at the cursor, faculty conflicts ignored.
#[derive(Debug, Clone, Copy)]
pub struct Forced;

impl SelectionTier for Forced {
    fn name(&self) -> &'static str {
        "forced"
    }

    fn select(&self, cell: &CellContext<'_>) -> Option<usize> {
        match cell.subjects.len() {
            0 => None,
            n => Some(cell.cursor % n),
        }
    }
}

/// The standard escalation: fresh, relaxed, forced.
pub fn default_tiers() -> Vec<Box<dyn SelectionTier>> {
    vec![Box::new(FreshAndFree), Box::new(RelaxedFresh), Box::new(Forced)]
}

/// Fills every empty cell with theory subjects.
///
/// Returns the forced conflicts created.
pub(crate) fn fill_theory(
    grid: &mut Grid,
    working_days: &[Weekday],
    subjects: &[&Subject],
    tiers: &[Box<dyn SelectionTier>],
    occupancy: &mut FacultyOccupancy,
    occupant: &str,
) -> Vec<Conflict> {
    let mut conflicts = Vec::new();
    let mut cursor = 0usize;

    for (d, &day) in working_days.iter().enumerate() {
        let mut used_today: HashSet<String> = HashSet::new();

        for p in 0..grid.period_count() {
            if grid.is_empty(d, p) && !subjects.is_empty() {
                let pick = {
                    let cell = CellContext {
                        subjects,
                        cursor,
                        day,
                        period: p,
                        occupancy,
                        used_today: &used_today,
                    };
                    tiers
                        .iter()
                        .find_map(|tier| tier.select(&cell).map(|i| (tier, i)))
                };

                if let Some((tier, i)) = pick {
                    let subject = subjects[i];
                    grid.set(d, p, ScheduledPeriod::new(&subject.code, &subject.faculty_name));
                    let previous =
                        occupancy.mark_busy(&subject.faculty_name, day, p, occupant);
                    if tier.records_daily_use() {
                        used_today.insert(subject.code.clone());
                    }
                    trace!("{day} p{p}: {} via {}", subject.code, tier.name());

                    if let Some(previous) = previous {
                        warn!(
                            "forced {} onto '{}' at {day} period {p}, already held by {previous}",
                            subject.code, subject.faculty_name
                        );
                        conflicts.push(Conflict {
                            faculty_name: subject.faculty_name.clone(),
                            subject_code: subject.code.clone(),
                            day,
                            day_index: d,
                            period_index: p,
                            previous_occupant: Some(previous),
                        });
                    }
                }
            }
            cursor += 1;
        }
    }

    conflicts
}
