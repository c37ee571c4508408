//! Gantt chart layout engine.
//!
//! Turns a list of (resource, job) records into everything a drawing
//! surface needs to paint a schedule chart: axis tick positions and
//! labels, per-resource bar geometry, a deterministic collision-resistant
//! color per job identity, and a lossless JSON document for the whole
//! schedule. Pixel painting itself stays behind the [`render::Canvas`]
//! trait — this crate emits primitive drawing commands and never touches
//! a plotting backend.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Job`, `JobType`, `Schedule`, `Color`
//! - **`palette`**: Golden-ratio hue sequence generator
//! - **`assignment`**: Job → color mapping with conflict detection
//! - **`layout`**: Axis ticks/bounds and bar geometry
//! - **`document`**: Schedule document (de)serialization
//! - **`render`**: Drawing-surface trait and the render pipeline
//! - **`validation`**: Input integrity checks (duplicate resources,
//!   unknown resource refs)
//!
//! # Example
//!
//! ```
//! use gantt_layout::assignment::ColorMode;
//! use gantt_layout::layout::{AxisLayout, BarLayout};
//! use gantt_layout::models::{Job, Schedule};
//!
//! let mut schedule = Schedule::new()
//!     .with_resources(vec!["Unit 1".into(), "Unit 2".into()]);
//! schedule.add_job(Job::new("Job1", "Unit 1", 40.0, 50.0));
//! schedule.add_job(Job::new("Job2", "Unit 2", 110.0, 10.0));
//!
//! let axes = AxisLayout::compute(&schedule);
//! assert_eq!(axes.yticks[0].position, 15.0);
//!
//! schedule.assign_colors(ColorMode::PerJobName);
//! let bars = BarLayout::build(&schedule, false).unwrap();
//! assert_eq!(bars.rows.len(), 2);
//! ```

pub mod assignment;
pub mod document;
pub mod layout;
pub mod models;
pub mod palette;
pub mod render;
pub mod validation;
