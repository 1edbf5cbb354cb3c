//! Special-slot allocation.
//!
//! The special slot is the first period starting at one of the configured
//! afternoon times. Each special activity takes that period on its own
//! day: the first activity on day index 0, the second on day index 1, and
//! so on while working days remain. When the section lists a subject
//! whose code names the activity, that subject's faculty is booked at the
//! slot so later stages and later sections see it as committed.

use log::debug;

use super::{FacultyOccupancy, SchedulerConfig};
use crate::models::{Grid, SectionConfig};

/// Places special activities. Returns the special period index, if any.
pub(crate) fn allocate_specials(
    grid: &mut Grid,
    config: &SectionConfig,
    occupancy: &mut FacultyOccupancy,
    settings: &SchedulerConfig,
    occupant: &str,
) -> Option<usize> {
    let period = settings.special_slot_index(&config.period_timings)?;
    debug!("special slot at period {period}");

    for (d, activity) in settings.special_activities.iter().enumerate() {
        let Some(&day) = config.working_days.get(d) else {
            break;
        };
        if !grid.fill(d, period, activity.placeholder()) {
            debug!("special slot on {day} already taken, {} skipped", activity.code);
            continue;
        }
        if let Some(subject) = config.subjects.iter().find(|s| activity.matches(s)) {
            occupancy.mark_busy(&subject.faculty_name, day, period, occupant);
            debug!(
                "{} on {day}: booked '{}'",
                activity.code, subject.faculty_name
            );
        }
    }

    Some(period)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PeriodTiming, Subject, Weekday};
    use crate::scheduler::SpecialActivity;

    fn section(days: Vec<Weekday>) -> SectionConfig {
        SectionConfig::new("c1")
            .with_course("CSE", "A")
            .with_working_days(days)
            .with_period_timings(vec![
                PeriodTiming::new("14:00", "15:00"),
                PeriodTiming::new("15:00", "16:00"),
            ])
    }

    fn run(config: &SectionConfig, occupancy: &mut FacultyOccupancy) -> (Grid, Option<usize>) {
        let mut grid = Grid::new(config.day_count(), config.period_count());
        let idx = allocate_specials(
            &mut grid,
            config,
            occupancy,
            &SchedulerConfig::default(),
            &config.occupant_label(),
        );
        (grid, idx)
    }

    #[test]
    fn test_specials_on_first_two_days() {
        let cfg = section(Weekday::ALL.to_vec());
        let mut occ = FacultyOccupancy::new();
        let (grid, idx) = run(&cfg, &mut occ);

        assert_eq!(idx, Some(1));
        let sports = grid.get(0, 1).unwrap();
        assert_eq!(sports.subject_code, "SPORTS");
        assert_eq!(sports.faculty_name, "Physical Director");
        let menlib = grid.get(1, 1).unwrap();
        assert_eq!(menlib.subject_code, "MEN/LIB");
        assert_eq!(menlib.faculty_name, "Mentor/Librarian");
        for d in 2..6 {
            assert!(grid.is_empty(d, 1));
        }
        // No matching subjects, so no bookings.
        assert!(occ.is_empty());
    }

    #[test]
    fn test_single_working_day() {
        let cfg = section(vec![Weekday::Wednesday]);
        let mut occ = FacultyOccupancy::new();
        let (grid, _) = run(&cfg, &mut occ);
        assert_eq!(grid.get(0, 1).unwrap().subject_code, "SPORTS");
        assert_eq!(grid.empty_count(), 1);
    }

    #[test]
    fn test_no_special_period() {
        let cfg = section(Weekday::ALL.to_vec())
            .with_period_timings(vec![PeriodTiming::new("09:00", "10:00")]);
        let mut occ = FacultyOccupancy::new();
        let (grid, idx) = run(&cfg, &mut occ);
        assert_eq!(idx, None);
        assert_eq!(grid.empty_count(), 6);
    }

    #[test]
    fn test_legacy_time_spelling() {
        let cfg = section(Weekday::ALL.to_vec()).with_period_timings(vec![
            PeriodTiming::new("02:00", "03:00"),
            PeriodTiming::new("03:00", "04:00"),
        ]);
        let mut occ = FacultyOccupancy::new();
        let (_, idx) = run(&cfg, &mut occ);
        assert_eq!(idx, Some(1));
    }

    #[test]
    fn test_matching_subject_books_faculty() {
        let cfg = section(vec![Weekday::Tuesday, Weekday::Thursday])
            .with_subject(Subject::new("sports", "Coach Singh", 1))
            .with_subject(Subject::new("MENTOR", "Ms. Pai", 1));
        let mut occ = FacultyOccupancy::new();
        run(&cfg, &mut occ);

        assert_eq!(
            occ.occupant("Coach Singh", Weekday::Tuesday, 1),
            Some("CSE-A")
        );
        // "MENTOR" is not an exact match for "MEN/LIB".
        assert_eq!(occ.busy_count("Ms. Pai"), 0);
    }

    #[test]
    fn test_lunch_at_special_period_is_kept() {
        let cfg = section(Weekday::ALL.to_vec()).with_period_timings(vec![
            PeriodTiming::lunch("15:00", "16:00"),
        ]);
        let mut grid = Grid::new(6, 1);
        let settings = SchedulerConfig::default();
        crate::scheduler::lunch::lock_lunch(&mut grid, &cfg.period_timings, &settings);
        let mut occ = FacultyOccupancy::new();
        allocate_specials(&mut grid, &cfg, &mut occ, &settings, "CSE-A");
        assert_eq!(grid.get(0, 0).unwrap().subject_code, "LUNCH");
        assert_eq!(grid.get(1, 0).unwrap().subject_code, "LUNCH");
    }

    #[test]
    fn test_configured_activity_books_faculty() {
        let settings = SchedulerConfig::new()
            .with_special_activities(vec![SpecialActivity::new("Yoga", "Instructor")]);
        let cfg = section(vec![Weekday::Monday]).with_subject(Subject::new("yoga", "Ms. Rao", 1));
        let mut grid = Grid::new(1, 2);
        let mut occ = FacultyOccupancy::new();
        allocate_specials(&mut grid, &cfg, &mut occ, &settings, "CSE-A");

        assert_eq!(grid.get(0, 1).unwrap().subject_code, "YOGA");
        assert_eq!(occ.occupant("Ms. Rao", Weekday::Monday, 1), Some("CSE-A"));
    }
}
