//! Bar geometry: per-resource interval lists and process labels.
//!
//! Jobs are partitioned by resource in first-seen order; within a
//! resource, bars keep input order (deliberately not sorted by start
//! time, so overlapping draws match insertion order).

use std::collections::HashMap;

use crate::layout::axes::{band_for, Band};
use crate::layout::LayoutError;
use crate::models::{Color, Schedule};

/// Bars for one resource: parallel interval and color sequences.
#[derive(Debug, Clone, PartialEq)]
pub struct BarRow {
    /// Resource these bars belong to.
    pub resource: String,
    /// Vertical band the bars occupy.
    pub band: Band,
    /// `(start_time, duration)` per bar, in input order.
    pub intervals: Vec<(f64, f64)>,
    /// Fill color per bar, parallel to `intervals`.
    pub colors: Vec<Color>,
}

/// A text annotation centered on a process bar.
#[derive(Debug, Clone, PartialEq)]
pub struct BarLabel {
    /// Horizontal center of the bar.
    pub x: f64,
    /// Vertical center of the resource band.
    pub y: f64,
    /// The job's name.
    pub text: String,
}

/// Full bar geometry for a schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct BarLayout {
    /// One row per resource that has jobs, in first-seen order.
    pub rows: Vec<BarRow>,
    /// Labels for process bars; empty unless requested. Changeovers
    /// are never labeled.
    pub labels: Vec<BarLabel>,
}

impl BarLayout {
    /// Builds bar geometry from the schedule's jobs and cached colors.
    ///
    /// Requires color assignment to have run first; a job name without
    /// a dictionary entry is a [`LayoutError::MissingColor`]. A job
    /// referencing a resource missing from the resource list is a
    /// [`LayoutError::UnknownResource`] — fatal, never skipped.
    ///
    /// With `label_processes`, every non-changeover job also yields a
    /// [`BarLabel`] centered at `(start + duration / 2, band center)`.
    pub fn build(schedule: &Schedule, label_processes: bool) -> Result<Self, LayoutError> {
        let mut rows: Vec<BarRow> = Vec::new();
        let mut row_index: HashMap<&str, usize> = HashMap::new();
        let mut labels = Vec::new();

        for job in &schedule.jobs {
            let index = match row_index.get(job.resource.as_str()) {
                Some(&i) => i,
                None => {
                    let band = band_for(&schedule.resources, &job.resource)?;
                    rows.push(BarRow {
                        resource: job.resource.clone(),
                        band,
                        intervals: Vec::new(),
                        colors: Vec::new(),
                    });
                    row_index.insert(job.resource.as_str(), rows.len() - 1);
                    rows.len() - 1
                }
            };

            let color = schedule
                .color_for(&job.name)
                .ok_or_else(|| LayoutError::MissingColor(job.name.clone()))?;

            let row = &mut rows[index];
            row.intervals.push((job.start_time, job.duration));
            row.colors.push(color);

            if label_processes && !job.is_changeover() {
                labels.push(BarLabel {
                    x: job.start_time + job.duration / 2.0,
                    y: row.band.center(),
                    text: job.name.clone(),
                });
            }
        }

        Ok(Self { rows, labels })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assignment::ColorMode;
    use crate::models::{Job, JobType};

    fn sample_schedule() -> Schedule {
        let mut s = Schedule::new().with_resources(vec![
            "Unit 1".into(),
            "Unit 2".into(),
            "Unit 3".into(),
        ]);
        s.add_job(Job::new("Job1", "Unit 1", 40.0, 50.0));
        s.add_job(Job::new("Job2", "Unit 2", 110.0, 10.0));
        s.add_job(Job::new("Job1", "Unit 2", 150.0, 10.0));
        s.add_job(Job::new("Job3", "Unit 3", 10.0, 50.0));
        s.assign_colors(ColorMode::PerJobName);
        s
    }

    #[test]
    fn test_intervals_in_input_order() {
        let s = sample_schedule();
        let layout = BarLayout::build(&s, false).unwrap();

        let unit2 = layout.rows.iter().find(|r| r.resource == "Unit 2").unwrap();
        assert_eq!(unit2.intervals, vec![(110.0, 10.0), (150.0, 10.0)]);
        assert_eq!(unit2.band.lower, 20.0);
        assert_eq!(unit2.colors.len(), 2);
    }

    #[test]
    fn test_rows_in_first_seen_order() {
        let mut s = Schedule::new().with_resources(vec!["A".into(), "B".into()]);
        // B appears first in the job list, so its row comes first.
        s.add_job(Job::new("j1", "B", 0.0, 1.0));
        s.add_job(Job::new("j2", "A", 0.0, 1.0));
        s.add_job(Job::new("j3", "B", 2.0, 1.0));
        s.assign_colors(ColorMode::PerJobName);

        let layout = BarLayout::build(&s, false).unwrap();
        let order: Vec<&str> = layout.rows.iter().map(|r| r.resource.as_str()).collect();
        assert_eq!(order, vec!["B", "A"]);
        assert_eq!(layout.rows[0].intervals.len(), 2);
    }

    #[test]
    fn test_colors_follow_dictionary() {
        let s = sample_schedule();
        let layout = BarLayout::build(&s, false).unwrap();

        let unit2 = layout.rows.iter().find(|r| r.resource == "Unit 2").unwrap();
        assert_eq!(unit2.colors[0], s.color_for("Job2").unwrap());
        assert_eq!(unit2.colors[1], s.color_for("Job1").unwrap());
    }

    #[test]
    fn test_unknown_resource_is_fatal() {
        let mut s = sample_schedule();
        s.add_job(Job::new("Job4", "Unit 9", 0.0, 5.0));
        s.assign_colors(ColorMode::PerJobName);

        assert_eq!(
            BarLayout::build(&s, false),
            Err(LayoutError::UnknownResource("Unit 9".to_string()))
        );
    }

    #[test]
    fn test_missing_color_is_fatal() {
        let mut s = sample_schedule();
        s.job_colors.remove("Job2");

        assert_eq!(
            BarLayout::build(&s, false),
            Err(LayoutError::MissingColor("Job2".to_string()))
        );
    }

    #[test]
    fn test_process_labels() {
        let mut s = Schedule::new().with_resources(vec!["Unit 2".into()]);
        s.add_job(Job::new("Job2", "Unit 2", 110.0, 10.0).with_job_type(JobType::Process));
        s.add_job(Job::new("Clean", "Unit 2", 120.0, 5.0).with_job_type(JobType::Changeover));
        s.assign_colors(ColorMode::GrayChangeovers);

        let layout = BarLayout::build(&s, true).unwrap();
        assert_eq!(layout.labels.len(), 1);
        let label = &layout.labels[0];
        assert_eq!(label.text, "Job2");
        assert_eq!(label.x, 115.0);
        assert_eq!(label.y, 15.0);
    }

    #[test]
    fn test_no_labels_unless_requested() {
        let s = sample_schedule();
        let layout = BarLayout::build(&s, false).unwrap();
        assert!(layout.labels.is_empty());
    }
}
