//! Batch timetable generation.
//!
//! # Algorithm
//!
//! For each section, in input order, against one shared occupancy map:
//!
//! 1. Lock lunch periods on every day.
//! 2. Place special activities at the special slot.
//! 3. Place lab blocks (greedy first-fit, one per day).
//! 4. Fill the rest with theory subjects through the selection tiers.
//!
//! Earlier sections win faculty contention: their bookings are visible to
//! every later section's availability checks.
//!
//! # Complexity
//! O(s * d * p * t) where s=sections, d=days, p=periods, t=theory subjects.

use log::{debug, info};

use super::lab::allocate_labs;
use super::lunch::lock_lunch;
use super::special::allocate_specials;
use super::theory::{default_tiers, fill_theory, SelectionTier};
use super::{FacultyOccupancy, SchedulerConfig};
use crate::error::{Result, TimetableError};
use crate::models::{Grid, SectionConfig, SectionOutcome, Subject, TimetableResult};
use crate::validation::validate_section_with;

/// Timetable generator.
///
/// Runs the four generation stages for each section of a batch, sharing
/// one faculty occupancy map across the batch.
///
/// # Example
///
/// ```
/// use u_timetable::models::{SectionConfig, Subject};
/// use u_timetable::scheduler::Scheduler;
///
/// let section = SectionConfig::new("1")
///     .with_course("CSE", "A")
///     .with_subject(Subject::new("OS", "Dr. Rao", 4))
///     .with_subject(Subject::new("DBMS", "Ms. Iyer", 4))
///     .with_subject(Subject::lab("OSL", "Dr. Rao", 3));
///
/// let results = Scheduler::new().generate_batch(&[section]).unwrap();
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].grid.day_count(), 6);
/// assert_eq!(results[0].grid.empty_count(), 0);
/// ```
#[derive(Debug)]
pub struct Scheduler {
    settings: SchedulerConfig,
    tiers: Vec<Box<dyn SelectionTier>>,
}

impl Scheduler {
    /// Creates a scheduler with default settings and tiers.
    pub fn new() -> Self {
        Self {
            settings: SchedulerConfig::default(),
            tiers: default_tiers(),
        }
    }

    /// Replaces the engine settings.
    pub fn with_config(mut self, settings: SchedulerConfig) -> Self {
        self.settings = settings;
        self
    }

    /// Engine settings.
    pub fn config(&self) -> &SchedulerConfig {
        &self.settings
    }

    /// Generates timetables for a batch of sections.
    ///
    /// Every section is validated first; if any is malformed nothing is
    /// generated. Results are returned in input order with a fresh
    /// occupancy map for the call.
    pub fn generate_batch(&self, configs: &[SectionConfig]) -> Result<Vec<TimetableResult>> {
        self.run_batch(configs).map(|(results, _)| results)
    }

    /// Like [`Scheduler::generate_batch`], also returning the final
    /// occupancy map.
    pub fn run_batch(
        &self,
        configs: &[SectionConfig],
    ) -> Result<(Vec<TimetableResult>, FacultyOccupancy)> {
        for (section, config) in configs.iter().enumerate() {
            validate_section_with(config, &self.settings).map_err(|errors| {
                TimetableError::Validation {
                    section,
                    label: config.occupant_label(),
                    errors,
                }
            })?;
        }

        info!("generating {} section(s)", configs.len());
        let mut occupancy = FacultyOccupancy::new();
        let results = configs
            .iter()
            .map(|config| {
                let outcome = self.generate_single(config, &mut occupancy);
                TimetableResult::new(config.clone(), outcome)
            })
            .collect();

        debug!("faculty booked: {}", occupancy.faculties().join(", "));
        Ok((results, occupancy))
    }

    /// Generates one section's grid against a shared occupancy map.
    ///
    /// Assumes validated input. Never fails: infeasible loads end in
    /// forced assignments reported in the outcome's conflicts.
    pub fn generate_single(
        &self,
        config: &SectionConfig,
        occupancy: &mut FacultyOccupancy,
    ) -> SectionOutcome {
        let occupant = config.occupant_label();
        let mut grid = Grid::new(config.day_count(), config.period_count());

        let lunch_cells = lock_lunch(&mut grid, &config.period_timings, &self.settings);
        let special = allocate_specials(&mut grid, config, occupancy, &self.settings, &occupant);
        let labs = allocate_labs(&mut grid, config, occupancy, &self.settings, &occupant);

        let theory: Vec<&Subject> = config
            .subjects
            .iter()
            .filter(|s| self.settings.is_theory(s))
            .collect();
        let conflicts = fill_theory(
            &mut grid,
            &config.working_days,
            &theory,
            &self.tiers,
            occupancy,
            &occupant,
        );

        debug!(
            "{occupant}: {lunch_cells} lunch cells, special slot {special:?}, {labs} lab blocks, {} theory subjects",
            theory.len()
        );
        info!(
            "{occupant}: {} empty cells, {} forced conflicts",
            grid.empty_count(),
            conflicts.len()
        );

        SectionOutcome { grid, conflicts }
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}
