//! Layout engine: axis ticks, bounds, and bar geometry.
//!
//! Pure computations from schedule data to draw primitives. The vertical
//! grid is fixed: resource bands are [`BAR_HEIGHT`] units tall, stacked
//! contiguously, with each resource's tick at its band center plus a
//! half-offset.
//!
//! # Modules
//!
//! - **`axes`**: tick positions/labels and axis bounds
//! - **`bars`**: per-resource interval lists, colors, and process labels

mod axes;
mod bars;

pub use axes::{band_for, x_max, xticks, y_max, yticks, AxisLayout, AxisTick, Band};
pub use bars::{BarLabel, BarLayout, BarRow};

use thiserror::Error;

/// Distance between adjacent resource ticks on the y-axis.
pub const TICK_DISTANCE: f64 = 10.0;
/// Height of a resource's bar band.
pub const BAR_HEIGHT: f64 = 10.0;
/// Offset of the first tick above the chart origin.
pub const ORIGIN_OFFSET: f64 = 5.0;
/// Extra bands of headroom above the topmost resource.
pub const Y_MARGIN: usize = 2;

/// A failure while computing layout geometry.
///
/// These are data/programmer errors, fatal to the current layout call;
/// nothing here is retried or silently dropped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A job references a resource missing from the resource list.
    #[error("resource not found: {0}")]
    UnknownResource(String),
    /// A job name has no entry in the color dictionary; run color
    /// assignment before building bar geometry.
    #[error("no color assigned for job: {0}")]
    MissingColor(String),
}
