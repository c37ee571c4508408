//! Job-to-color assignment policy.
//!
//! Maps job names to chart colors under three selectable modes. The
//! policy is a pure function of (job list, mode, prior dictionary):
//! it returns the updated dictionary plus an explicit list of
//! overwrite conflicts, so conflict detection is testable rather than
//! buried in cache mutation. [`Schedule::assign_colors`] applies the
//! result to the schedule's cache and logs each conflict as a warning.
//!
//! Palette indices are only consumed by names that do not yet have an
//! entry, so re-running assignment on a stable job set is idempotent
//! and conflict-free in every mode.
//!
//! [`Schedule::assign_colors`]: crate::models::Schedule::assign_colors

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::models::{Color, Job};
use crate::palette::golden_ratio_palette;

/// Color assignment mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorMode {
    /// One palette color per unique job name, in first-encountered order.
    PerJobName,
    /// Like [`PerJobName`](Self::PerJobName), but every changeover job
    /// receives a fixed pale color regardless of its name.
    GrayChangeovers,
    /// All processing jobs share one fixed amber; all changeovers share
    /// the fixed pale color.
    Uniform,
}

/// Fixed color for changeover jobs: HSV(180°, 0.1, 1.0), a pale gray-blue.
pub fn changeover_color() -> Color {
    Color::from_hsv(0.5, 0.1, 1.0)
}

/// Fixed color for processing jobs in [`ColorMode::Uniform`]:
/// HSV(44°, 0.70, 0.9), amber.
pub fn uniform_process_color() -> Color {
    Color::from_hsv(44.0 / 360.0, 0.70, 0.9)
}

/// A color overwrite detected during assignment.
///
/// Non-fatal: the replacement wins, but the caller should surface the
/// change since an already-drawn legend may no longer match.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorConflict {
    /// Job name whose color changed.
    pub name: String,
    /// Color previously stored for the name.
    pub previous: Color,
    /// Color that replaced it.
    pub replacement: Color,
}

/// Result of one assignment pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorAssignment {
    /// The complete updated dictionary (prior entries preserved unless
    /// overwritten).
    pub colors: HashMap<String, Color>,
    /// Overwrite conflicts, in the order they occurred.
    pub conflicts: Vec<ColorConflict>,
}

/// Computes the job-name → color dictionary for `jobs` under `mode`,
/// starting from `prior`.
///
/// Entries in `prior` are never recomputed by the palette-drawing modes;
/// only names without an entry consume palette indices. Fixed-color
/// modes may overwrite prior entries, producing conflicts.
pub fn assign_colors(
    jobs: &[Job],
    mode: ColorMode,
    prior: &HashMap<String, Color>,
) -> ColorAssignment {
    let mut colors = prior.clone();
    let mut conflicts = Vec::new();

    // Names that consume a fresh palette index, in first-encountered
    // order. Changeovers never draw from the palette in mode 1, and
    // mode 2 uses no palette at all.
    let new_names: Vec<&str> = match mode {
        ColorMode::Uniform => Vec::new(),
        ColorMode::PerJobName | ColorMode::GrayChangeovers => {
            let mut seen = HashSet::new();
            jobs.iter()
                .filter(|job| !(mode == ColorMode::GrayChangeovers && job.is_changeover()))
                .filter(|job| !prior.contains_key(&job.name))
                .filter(|job| seen.insert(job.name.as_str()))
                .map(|job| job.name.as_str())
                .collect()
        }
    };
    let palette: HashMap<&str, Color> = new_names
        .iter()
        .copied()
        .zip(golden_ratio_palette(new_names.len()))
        .collect();

    for job in jobs {
        let desired = match mode {
            ColorMode::PerJobName => palette.get(job.name.as_str()).copied(),
            ColorMode::GrayChangeovers => {
                if job.is_changeover() {
                    Some(changeover_color())
                } else {
                    palette.get(job.name.as_str()).copied()
                }
            }
            ColorMode::Uniform => Some(if job.is_changeover() {
                changeover_color()
            } else {
                uniform_process_color()
            }),
        };
        // None means the prior entry stands untouched.
        let Some(desired) = desired else { continue };

        if let Some(previous) = colors.insert(job.name.clone(), desired) {
            if previous != desired {
                conflicts.push(ColorConflict {
                    name: job.name.clone(),
                    previous,
                    replacement: desired,
                });
            }
        }
    }

    ColorAssignment { colors, conflicts }
}
