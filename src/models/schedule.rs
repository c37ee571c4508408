//! Schedule model.
//!
//! A schedule owns an ordered resource list (order = vertical stacking
//! order on the chart), a job list, a cached job-name → color
//! dictionary, and two optional x-axis tick overrides. Layout and
//! geometry are derived in full on every request; only the color
//! dictionary is cached across calls.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::assignment::{self, ColorConflict, ColorMode};
use crate::models::{Color, Job};

/// A chartable schedule: resources, jobs, and layout state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Resources in stacking order (bottom band first). Names must be
    /// unique; duplicates break tick lookup (see [`crate::validation`]).
    pub resources: Vec<String>,
    /// Jobs, in insertion order.
    pub jobs: Vec<Job>,
    /// Cached job-name → color dictionary, populated by
    /// [`assign_colors`](Self::assign_colors).
    pub job_colors: HashMap<String, Color>,
    /// Explicit x-axis tick step. `None` leaves tick placement to the
    /// drawing surface.
    pub xticks_step_size: Option<f64>,
    /// Explicit x-axis upper bound, overriding the derived job maximum.
    pub xticks_max_value: Option<f64>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the resource list.
    pub fn with_resources(mut self, resources: Vec<String>) -> Self {
        self.resources = resources;
        self
    }

    /// Sets the job list.
    pub fn with_jobs(mut self, jobs: Vec<Job>) -> Self {
        self.jobs = jobs;
        self
    }

    /// Sets the x-axis tick step override.
    pub fn with_xticks_step_size(mut self, step: f64) -> Self {
        self.xticks_step_size = Some(step);
        self
    }

    /// Sets the x-axis upper bound override.
    pub fn with_xticks_max_value(mut self, max: f64) -> Self {
        self.xticks_max_value = Some(max);
        self
    }

    /// Appends a resource.
    pub fn add_resource(&mut self, name: impl Into<String>) {
        self.resources.push(name.into());
    }

    /// Appends a job.
    pub fn add_job(&mut self, job: Job) {
        self.jobs.push(job);
    }

    /// Latest job end time, or `None` for an empty job list.
    pub fn latest_end_time(&self) -> Option<f64> {
        self.jobs.iter().map(Job::end_time).reduce(f64::max)
    }

    /// Runs color assignment under `mode` and merges the result into
    /// the cached dictionary.
    ///
    /// Each overwrite conflict is logged as a warning and returned;
    /// the new color wins. Re-running with a stable job set and mode
    /// produces no conflicts.
    pub fn assign_colors(&mut self, mode: ColorMode) -> Vec<ColorConflict> {
        let outcome = assignment::assign_colors(&self.jobs, mode, &self.job_colors);
        for conflict in &outcome.conflicts {
            warn!(job = %conflict.name, "color overwrite for job {}", conflict.name);
        }
        self.job_colors = outcome.colors;
        outcome.conflicts
    }

    /// Cached color for a job name, if assigned.
    pub fn color_for(&self, job_name: &str) -> Option<Color> {
        self.job_colors.get(job_name).copied()
    }

    /// Number of jobs.
    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    /// Number of resources.
    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }
}
