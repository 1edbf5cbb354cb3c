//! Lab block allocation.
//!
//! # Algorithm
//!
//! Greedy first-fit, one lab subject at a time in list order:
//!
//! 1. Sessions needed = `ceil(weekly_hours / block_len)`.
//! 2. Walk working days in order, skipping any day that already holds a
//!    lab block (for any subject).
//! 3. On a free day, take the leftmost window of `block_len` consecutive
//!    periods that are empty in the grid and free for the lab's faculty.
//! 4. Commit the window, book the faculty on every period of it, mark the
//!    day as used and move to the next day.
//!
//! Sessions that do not fit are dropped. At most one lab block lands on
//! any day of a section.
//!
//! # Complexity
//! O(l * d * p * b) where l=lab subjects, d=days, p=periods, b=block length.

use log::debug;

use super::{FacultyOccupancy, SchedulerConfig};
use crate::models::{Grid, ScheduledPeriod, SectionConfig, Subject, Weekday};

/// Places lab blocks. Returns the number of blocks placed.
pub(crate) fn allocate_labs(
    grid: &mut Grid,
    config: &SectionConfig,
    occupancy: &mut FacultyOccupancy,
    settings: &SchedulerConfig,
    occupant: &str,
) -> usize {
    let block_len = settings.lab_block_len;
    let mut day_has_lab = vec![false; config.day_count()];
    let mut placed_total = 0;

    for lab in config.subjects.iter().filter(|s| s.is_lab) {
        let required = lab.lab_sessions(block_len);
        let mut placed = 0;

        for (d, &day) in config.working_days.iter().enumerate() {
            if placed >= required {
                break;
            }
            if day_has_lab[d] {
                continue;
            }
            let Some(start) = find_window(grid, occupancy, lab, d, day, block_len) else {
                continue;
            };

            for p in start..start + block_len {
                grid.set(d, p, ScheduledPeriod::lab(&lab.code, &lab.faculty_name));
                occupancy.mark_busy(&lab.faculty_name, day, p, occupant);
            }
            day_has_lab[d] = true;
            placed += 1;
            debug!(
                "lab {} on {day}: periods {start}..{}",
                lab.code,
                start + block_len
            );
        }

        if placed < required {
            debug!(
                "lab {}: placed {placed} of {required} sessions, remainder dropped",
                lab.code
            );
        }
        placed_total += placed;
    }

    placed_total
}

/// Leftmost start index of a window that is empty and free for the lab's faculty.
fn find_window(
    grid: &Grid,
    occupancy: &FacultyOccupancy,
    lab: &Subject,
    d: usize,
    day: Weekday,
    block_len: usize,
) -> Option<usize> {
    if block_len == 0 {
        return None;
    }
    let last_start = grid.period_count().checked_sub(block_len)?;
    (0..=last_start).find(|&start| {
        (start..start + block_len).all(|p| {
            grid.is_empty(d, p) && occupancy.is_available(&lab.faculty_name, day, p)
        })
    })
}
