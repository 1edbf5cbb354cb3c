//! Timetabling domain models.
//!
//! Provides the input types describing a section (working week, period
//! timings, subjects) and the output types describing its generated
//! timetable (grid, scheduled periods, forced conflicts).
//!
//! # Domain Mappings
//!
//! | u-timetable | Generic scheduling |
//! |-------------|--------------------|
//! | SectionConfig | Problem instance |
//! | Subject | Task with a weekly load |
//! | Faculty | Shared resource |
//! | Grid cell | Time slot assignment |
//! | Conflict | Capacity violation |

mod grid;
mod period;
mod section;
mod subject;
mod weekday;

pub use grid::{Conflict, Grid, ScheduledPeriod, SectionOutcome, TimetableResult};
pub use period::{default_period_timings, PeriodTiming};
pub use section::{parse_batch, read_batch, SectionConfig, SectionInfo};
pub use subject::Subject;
pub use weekday::Weekday;
