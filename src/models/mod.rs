//! Chart domain models.
//!
//! Core data types for Gantt-style schedule charts: jobs bound to
//! resources with start/duration, the schedule that owns them, and the
//! RGB color type used across layout and serialization.
//!
//! # Domain Mappings
//!
//! | gantt-layout | Manufacturing | Computing | Logistics |
//! |--------------|--------------|-----------|-----------|
//! | Job | Batch/Operation | Process | Transport Leg |
//! | Resource | Machine/Unit | Processor | Truck/Dock |
//! | Changeover | Cleaning/Setup | Context Switch | Loading |

mod color;
mod job;
mod schedule;

pub use color::Color;
pub use job::{Job, JobType};
pub use schedule::Schedule;
