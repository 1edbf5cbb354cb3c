//! Timetable quality summary.
//!
//! Computes per-section indicators from a generated timetable, including
//! the faculty workload table shown alongside the grid.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Fill Rate | Filled cells / total cells |
//! | Lunch Cells | Cells holding the lunch placeholder |
//! | Lab Blocks | Maximal runs of one lab subject on a day |
//! | Forced Conflicts | Tier-3 bookings over an existing commitment |
//! | Faculty Load | Periods per faculty name (placeholders excluded) |

use std::collections::BTreeMap;

use super::SchedulerConfig;
use crate::models::TimetableResult;

/// Section timetable indicators.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSummary {
    /// Grid cells (days × periods).
    pub total_cells: usize,
    /// Non-empty cells.
    pub filled_cells: usize,
    /// Empty cells.
    pub empty_cells: usize,
    /// Cells holding the lunch placeholder.
    pub lunch_cells: usize,
    /// Lab blocks placed.
    pub lab_blocks: usize,
    /// Forced faculty conflicts.
    pub conflicts: usize,
    /// Fraction of cells filled (0.0..1.0).
    pub fill_rate: f64,
    /// Periods taught per faculty.
    pub periods_by_faculty: BTreeMap<String, usize>,
}

impl SectionSummary {
    /// Computes the summary for one section's result.
    ///
    /// Lunch and special placeholders count as filled cells but not as
    /// faculty load.
    pub fn calculate(result: &TimetableResult, settings: &SchedulerConfig) -> Self {
        let grid = &result.grid;
        let total_cells = grid.day_count() * grid.period_count();
        let empty_cells = grid.empty_count();
        let filled_cells = total_cells - empty_cells;

        let is_placeholder = |code: &str| {
            code == settings.lunch_code || settings.special_activities.iter().any(|a| a.code == code)
        };

        let mut lunch_cells = 0;
        let mut periods_by_faculty = BTreeMap::new();
        for (_, _, cell) in grid.filled_cells() {
            if cell.subject_code == settings.lunch_code {
                lunch_cells += 1;
            }
            if !is_placeholder(&cell.subject_code) {
                *periods_by_faculty
                    .entry(cell.faculty_name.clone())
                    .or_insert(0) += 1;
            }
        }

        let mut lab_blocks = 0;
        for row in grid.rows() {
            let mut previous: Option<&str> = None;
            for cell in row {
                let lab_code = cell
                    .as_ref()
                    .filter(|c| c.is_lab)
                    .map(|c| c.subject_code.as_str());
                if lab_code.is_some() && lab_code != previous {
                    lab_blocks += 1;
                }
                previous = lab_code;
            }
        }

        let fill_rate = if total_cells > 0 {
            filled_cells as f64 / total_cells as f64
        } else {
            0.0
        };

        Self {
            total_cells,
            filled_cells,
            empty_cells,
            lunch_cells,
            lab_blocks,
            conflicts: result.conflicts.len(),
            fill_rate,
            periods_by_faculty,
        }
    }

    /// Periods taught by a faculty member (0 if absent).
    pub fn faculty_load(&self, faculty: &str) -> usize {
        self.periods_by_faculty.get(faculty).copied().unwrap_or(0)
    }
}
