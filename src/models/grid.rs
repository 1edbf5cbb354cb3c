//! Timetable grid (solution) model.
//!
//! A grid is a day × period matrix of optional scheduled periods. It is
//! created empty per section, filled in place by the generation stages,
//! and returned together with any forced faculty conflicts recorded while
//! filling it.

use serde::{Deserialize, Serialize};

use super::{SectionConfig, Weekday};

/// The committed content of one grid cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledPeriod {
    /// Subject (or placeholder) code.
    pub subject_code: String,
    /// Faculty name (or placeholder role).
    pub faculty_name: String,
    /// Whether this cell belongs to a lab block.
    pub is_lab: bool,
}

impl ScheduledPeriod {
    /// Creates a non-lab period.
    pub fn new(subject_code: impl Into<String>, faculty_name: impl Into<String>) -> Self {
        Self {
            subject_code: subject_code.into(),
            faculty_name: faculty_name.into(),
            is_lab: false,
        }
    }

    /// Creates a lab period.
    pub fn lab(subject_code: impl Into<String>, faculty_name: impl Into<String>) -> Self {
        Self {
            is_lab: true,
            ..Self::new(subject_code, faculty_name)
        }
    }

    /// Cell text used by exporters: `"CODE\n(Faculty)"`.
    pub fn cell_text(&self) -> String {
        format!("{}\n({})", self.subject_code, self.faculty_name)
    }
}

/// A day × period timetable, indexed `[day][period]`.
///
/// Serializes as a plain nested array of nullable cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    cells: Vec<Vec<Option<ScheduledPeriod>>>,
}

impl Grid {
    /// Creates an empty grid.
    pub fn new(days: usize, periods: usize) -> Self {
        Self {
            cells: vec![vec![None; periods]; days],
        }
    }

    /// Number of rows (working days).
    pub fn day_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of columns (periods).
    pub fn period_count(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    /// Cell content, `None` if empty or out of range.
    pub fn get(&self, day: usize, period: usize) -> Option<&ScheduledPeriod> {
        self.cells.get(day)?.get(period)?.as_ref()
    }

    /// Whether a cell is empty. Out-of-range cells are not empty.
    pub fn is_empty(&self, day: usize, period: usize) -> bool {
        matches!(self.cells.get(day).and_then(|row| row.get(period)), Some(None))
    }

    /// Writes a cell, overwriting any content.
    ///
    /// # Panics
    /// Panics if `day` or `period` is out of range.
    pub fn set(&mut self, day: usize, period: usize, value: ScheduledPeriod) {
        self.cells[day][period] = Some(value);
    }

    /// Writes a cell only if it is empty. Returns whether it was written.
    pub fn fill(&mut self, day: usize, period: usize, value: ScheduledPeriod) -> bool {
        match self.cells.get_mut(day).and_then(|row| row.get_mut(period)) {
            Some(cell @ None) => {
                *cell = Some(value);
                true
            }
            _ => false,
        }
    }

    /// One day's row.
    pub fn row(&self, day: usize) -> Option<&[Option<ScheduledPeriod>]> {
        self.cells.get(day).map(Vec::as_slice)
    }

    /// Iterates over rows in day order.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<ScheduledPeriod>]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Iterates over filled cells as `(day, period, content)`.
    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize, &ScheduledPeriod)> {
        self.cells.iter().enumerate().flat_map(|(d, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(p, cell)| cell.as_ref().map(|c| (d, p, c)))
        })
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_none()).count()
    }
}

/// A theory booking forced onto a faculty member who was already committed
/// at that slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conflict {
    /// Faculty double-booked by the forced assignment.
    pub faculty_name: String,
    /// Subject that was forced into the cell.
    pub subject_code: String,
    /// Real weekday of the slot.
    pub day: Weekday,
    /// Grid row.
    pub day_index: usize,
    /// Grid column.
    pub period_index: usize,
    /// Occupant label that held the slot before the override.
    pub previous_occupant: Option<String>,
}

/// A section's generated grid and its forced conflicts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionOutcome {
    pub grid: Grid,
    pub conflicts: Vec<Conflict>,
}

/// A section configuration paired with its generated timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableResult {
    pub config: SectionConfig,
    pub grid: Grid,
    #[serde(default)]
    pub conflicts: Vec<Conflict>,
}

impl TimetableResult {
    /// Pairs a config with its outcome.
    pub fn new(config: SectionConfig, outcome: SectionOutcome) -> Self {
        Self {
            config,
            grid: outcome.grid,
            conflicts: outcome.conflicts,
        }
    }

    /// Whether no forced conflict was needed.
    pub fn is_conflict_free(&self) -> bool {
        self.conflicts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_dimensions() {
        let g = Grid::new(6, 8);
        assert_eq!(g.day_count(), 6);
        assert_eq!(g.period_count(), 8);
        assert_eq!(g.empty_count(), 48);
        assert_eq!(Grid::new(0, 8).period_count(), 0);
    }

    #[test]
    fn test_fill_does_not_overwrite() {
        let mut g = Grid::new(2, 3);
        assert!(g.fill(0, 1, ScheduledPeriod::new("LUNCH", "-")));
        assert!(!g.fill(0, 1, ScheduledPeriod::new("MATH", "F")));
        assert_eq!(g.get(0, 1).unwrap().subject_code, "LUNCH");
        assert!(!g.is_empty(0, 1));
        assert!(g.is_empty(1, 1));
    }

    #[test]
    fn test_out_of_range() {
        let mut g = Grid::new(1, 1);
        assert!(g.get(3, 0).is_none());
        assert!(!g.is_empty(0, 5));
        assert!(!g.fill(2, 0, ScheduledPeriod::new("X", "Y")));
    }

    #[test]
    fn test_filled_cells() {
        let mut g = Grid::new(2, 2);
        g.set(0, 0, ScheduledPeriod::lab("L1", "F"));
        g.set(1, 1, ScheduledPeriod::new("T1", "G"));
        let cells: Vec<(usize, usize, &str)> = g
            .filled_cells()
            .map(|(d, p, c)| (d, p, c.subject_code.as_str()))
            .collect();
        assert_eq!(cells, vec![(0, 0, "L1"), (1, 1, "T1")]);
        assert_eq!(g.empty_count(), 2);
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(
            ScheduledPeriod::new("OS", "Dr. Rao").cell_text(),
            "OS\n(Dr. Rao)"
        );
    }

    #[test]
    fn test_grid_serializes_as_nested_array() {
        let mut g = Grid::new(1, 2);
        g.set(0, 0, ScheduledPeriod::new("OS", "F"));
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(
            json,
            r#"[[{"subjectCode":"OS","facultyName":"F","isLab":false},null]]"#
        );
    }
}
