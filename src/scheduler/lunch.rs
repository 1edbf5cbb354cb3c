//! Lunch locking.
//!
//! Break periods are filled with the lunch placeholder on every working
//! day before anything else runs. The placeholder has no real faculty, so
//! the occupancy map is not touched.

use log::debug;

use super::SchedulerConfig;
use crate::models::{Grid, PeriodTiming};

/// Fills every lunch-flagged period on every day. Returns the number of
/// cells written.
pub(crate) fn lock_lunch(grid: &mut Grid, timings: &[PeriodTiming], settings: &SchedulerConfig) -> usize {
    let mut written = 0;
    for (p, _) in timings.iter().enumerate().filter(|(_, t)| t.is_lunch) {
        for d in 0..grid.day_count() {
            if grid.fill(d, p, settings.lunch_placeholder()) {
                written += 1;
            }
        }
        debug!("locked period {p} as {}", settings.lunch_code);
    }
    written
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lunch_column_locked_every_day() {
        let timings = vec![
            PeriodTiming::new("09:00", "10:00"),
            PeriodTiming::lunch("10:00", "10:30"),
            PeriodTiming::new("10:30", "11:30"),
        ];
        let mut grid = Grid::new(4, 3);
        let written = lock_lunch(&mut grid, &timings, &SchedulerConfig::default());

        assert_eq!(written, 4);
        for d in 0..4 {
            let cell = grid.get(d, 1).unwrap();
            assert_eq!(cell.subject_code, "LUNCH");
            assert_eq!(cell.faculty_name, "-");
            assert!(!cell.is_lab);
            assert!(grid.is_empty(d, 0));
            assert!(grid.is_empty(d, 2));
        }
    }

    #[test]
    fn test_multiple_breaks() {
        let timings = vec![
            PeriodTiming::lunch("09:00", "09:15"),
            PeriodTiming::new("09:15", "10:15"),
            PeriodTiming::lunch("12:00", "13:00"),
        ];
        let mut grid = Grid::new(2, 3);
        assert_eq!(lock_lunch(&mut grid, &timings, &SchedulerConfig::default()), 4);
        assert_eq!(grid.empty_count(), 2);
    }

    #[test]
    fn test_no_breaks() {
        let timings = vec![PeriodTiming::new("09:00", "10:00")];
        let mut grid = Grid::new(6, 1);
        assert_eq!(lock_lunch(&mut grid, &timings, &SchedulerConfig::default()), 0);
        assert_eq!(grid.empty_count(), 6);
    }
}
