//! Chart rendering against an abstract drawing surface.
//!
//! The layout engine emits primitive drawing commands; everything about
//! how pixels get painted lives behind the [`Canvas`] trait. The canvas
//! is an explicit object passed through the call chain — there is no
//! process-global figure state, so multiple schedules can be rendered
//! side by side without contention.
//!
//! Render order follows the layout pipeline: title and axis labels,
//! bounds, ticks, color assignment, one bar row per resource, optional
//! process labels, legend, footnote, and finally an optional save.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use thiserror::Error;

use crate::assignment::ColorMode;
use crate::layout::{AxisLayout, AxisTick, Band, BarLayout, LayoutError};
use crate::models::{Color, Schedule};

/// A failure while rendering or persisting a chart.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Layout computation failed (bad schedule data).
    #[error(transparent)]
    Layout(#[from] LayoutError),
    /// Writing the output image failed.
    #[error("failed to write chart output: {0}")]
    Io(#[from] std::io::Error),
    /// The drawing surface rejected a command.
    #[error("drawing surface failure: {0}")]
    Surface(String),
}

/// A legend entry: swatch color and its label.
pub type LegendEntry = (Color, String);

/// An abstract drawing surface.
///
/// Implementations paint however they like (plotting backend, SVG
/// writer, test recorder); the render pass only issues these primitive
/// commands, in a fixed order. Any failure propagates synchronously —
/// nothing is retried.
pub trait Canvas {
    /// Sets the chart title.
    fn set_title(&mut self, title: &str) -> Result<(), RenderError>;
    /// Sets the x- and y-axis labels.
    fn set_axis_labels(&mut self, x_label: &str, y_label: &str) -> Result<(), RenderError>;
    /// Sets the x-axis bounds.
    fn set_xlim(&mut self, min: f64, max: f64) -> Result<(), RenderError>;
    /// Sets the y-axis bounds.
    fn set_ylim(&mut self, min: f64, max: f64) -> Result<(), RenderError>;
    /// Sets labeled y-axis ticks.
    fn set_yticks(&mut self, ticks: &[AxisTick]) -> Result<(), RenderError>;
    /// Sets explicit x-axis tick positions.
    fn set_xticks(&mut self, positions: &[f64]) -> Result<(), RenderError>;
    /// Draws a set of horizontal bars in one vertical band.
    fn draw_bars(
        &mut self,
        intervals: &[(f64, f64)],
        band: Band,
        colors: &[Color],
    ) -> Result<(), RenderError>;
    /// Draws a text label centered at a point.
    fn draw_label(&mut self, x: f64, y: f64, text: &str) -> Result<(), RenderError>;
    /// Draws a legend from (color, label) pairs.
    fn draw_legend(&mut self, entries: &[LegendEntry]) -> Result<(), RenderError>;
    /// Renders a free-text annotation box (chart footnote).
    fn annotate(&mut self, text: &str) -> Result<(), RenderError>;
    /// Persists the canvas to an image file at the given resolution.
    fn save(&mut self, path: &Path, dpi: u32) -> Result<(), RenderError>;
}

/// Options for one render pass.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Chart title.
    pub title: String,
    /// Color assignment mode.
    pub mode: ColorMode,
    /// Whether to label process bars with their job names.
    pub label_processes: bool,
    /// Save the canvas to disk after drawing.
    pub save_to_disk: bool,
    /// Output path. `None` synthesizes one from timestamp and title.
    pub output: Option<PathBuf>,
    /// Output resolution in dots per inch.
    pub dpi: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: String::new(),
            mode: ColorMode::PerJobName,
            label_processes: false,
            save_to_disk: false,
            output: None,
            dpi: 100,
        }
    }
}

impl RenderOptions {
    /// Creates options with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Sets the color assignment mode.
    pub fn with_mode(mut self, mode: ColorMode) -> Self {
        self.mode = mode;
        self
    }

    /// Enables process bar labels.
    pub fn with_process_labels(mut self) -> Self {
        self.label_processes = true;
        self
    }

    /// Saves to a synthesized path after drawing.
    pub fn save(mut self) -> Self {
        self.save_to_disk = true;
        self
    }

    /// Saves to an explicit path after drawing.
    pub fn save_to(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_to_disk = true;
        self.output = Some(path.into());
        self
    }

    /// Sets the output resolution.
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }
}

/// Renders a schedule onto a canvas.
///
/// Runs the full pipeline: axis layout, color assignment (populating
/// the schedule's color cache, hence `&mut`), bar geometry, and the
/// drawing command sequence. With `save_to_disk`, missing parent
/// directories of the target path are created before saving.
pub fn render(
    schedule: &mut Schedule,
    canvas: &mut dyn Canvas,
    options: &RenderOptions,
) -> Result<(), RenderError> {
    let axes = AxisLayout::compute(schedule);

    canvas.set_title(&options.title)?;
    canvas.set_axis_labels("seconds since start", "Resources")?;
    canvas.set_ylim(0.0, axes.y_max)?;
    canvas.set_xlim(0.0, axes.x_max)?;
    canvas.set_yticks(&axes.yticks)?;
    if let Some(xticks) = &axes.xticks {
        canvas.set_xticks(xticks)?;
    }

    schedule.assign_colors(options.mode);
    let bars = BarLayout::build(schedule, options.label_processes)?;

    for row in &bars.rows {
        canvas.draw_bars(&row.intervals, row.band, &row.colors)?;
    }
    for label in &bars.labels {
        canvas.draw_label(label.x, label.y, &label.text)?;
    }

    canvas.draw_legend(&legend_entries(schedule))?;
    canvas.annotate(&Local::now().format("%Y-%m-%d").to_string())?;

    if options.save_to_disk {
        let path = match &options.output {
            Some(path) => path.clone(),
            None => PathBuf::from(default_output_name(&options.title)),
        };
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        canvas.save(&path, options.dpi)?;
    }

    Ok(())
}

/// Legend entries in first-seen job-name order over the job list.
fn legend_entries(schedule: &Schedule) -> Vec<LegendEntry> {
    let mut entries: Vec<LegendEntry> = Vec::new();
    for job in &schedule.jobs {
        if entries.iter().any(|(_, name)| name == &job.name) {
            continue;
        }
        if let Some(color) = schedule.color_for(&job.name) {
            entries.push((color, job.name.clone()));
        }
    }
    entries
}

/// Synthesizes an output file name from the current timestamp and the
/// chart title, with spaces replaced by underscores.
fn default_output_name(title: &str) -> String {
    let stamp = Local::now().format("%d-%m-%Y--%H-%M-%S");
    format!("{stamp}--Gantt-{}.png", title.replace(' ', "_"))
}
