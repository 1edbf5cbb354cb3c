//! Timetable generation engine.
//!
//! Builds each section's grid in four forward stages that share one
//! batch-scoped faculty occupancy map:
//!
//! 1. **Lunch**: break periods locked on every day.
//! 2. **Special slot**: Sports and Mentor/Library on the first two days.
//! 3. **Labs**: contiguous blocks, first-fit, at most one per day.
//! 4. **Theory**: round-robin fill with fresh → relaxed → forced tiers.
//!
//! The engine is greedy and never backtracks. It is not optimal, but it
//! always produces a full grid when a section has theory subjects,
//! reporting any forced faculty double-booking instead of leaving a gap.
//!
//! # Summary
//!
//! `SectionSummary` computes fill rate, lab blocks, conflicts and faculty
//! workload for a generated section.

mod config;
mod engine;
mod lab;
mod lunch;
mod occupancy;
mod special;
mod summary;
mod theory;

pub use config::{SchedulerConfig, SpecialActivity};
pub use engine::Scheduler;
pub use occupancy::FacultyOccupancy;
pub use summary::SectionSummary;
pub use theory::{default_tiers, CellContext, Forced, FreshAndFree, RelaxedFresh, SelectionTier};
