//! Academic timetable generation for the U-Engine ecosystem.
//!
//! Assigns subjects and faculty to the (day × period) slots of one or
//! more class sections, keeping a faculty member from being booked twice
//! at the same slot, within a section and across every section of the
//! same batch.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `SectionConfig`, `Subject`, `PeriodTiming`,
//!   `Weekday`, `Grid`, `ScheduledPeriod`, `Conflict`, `TimetableResult`
//! - **`scheduler`**: The generation engine — `Scheduler`, `FacultyOccupancy`,
//!   selection tiers, `SectionSummary`
//! - **`validation`**: Boundary checks (empty weeks, negative hours, duplicates)
//! - **`render`**: Plain-text tables for generated sections
//!
//! # Architecture
//!
//! Generation is greedy, strictly sequential, and deterministic for a
//! given input order. Sections earlier in a batch win faculty contention.
//! Exporters (PDF, DOCX) consume `TimetableResult` and live outside this
//! crate.

pub mod error;
pub mod models;
pub mod render;
pub mod scheduler;
pub mod validation;

pub use error::{Result, TimetableError};
