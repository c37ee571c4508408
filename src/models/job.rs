//! Job model.
//!
//! A job is one scheduled interval of work bound to a single resource.
//! Job names are not unique — repeated executions of the same task share
//! a name and therefore share a chart color.

use serde::{Deserialize, Serialize};

/// Classification of a job on the chart.
///
/// Changeovers represent setup/transition time rather than productive
/// processing; they are colored and labeled differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    /// Productive processing work.
    Process,
    /// Setup/transition time between processes.
    Changeover,
}

impl JobType {
    /// Stable integer code used by the schedule document format.
    pub fn as_code(self) -> u8 {
        match self {
            JobType::Process => 0,
            JobType::Changeover => 1,
        }
    }

    /// Reconstructs a job type from its document code.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(JobType::Process),
            1 => Some(JobType::Changeover),
            _ => None,
        }
    }
}

/// A scheduled interval of work on one resource.
///
/// Immutable once constructed. `resource` must name an entry in the
/// owning schedule's resource list; a job referencing an unknown
/// resource fails at geometry time with
/// [`LayoutError::UnknownResource`](crate::layout::LayoutError::UnknownResource).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Job name (non-unique; shared names share a color).
    pub name: String,
    /// Resource this job runs on.
    pub resource: String,
    /// Start time (≥ 0, in chart time units).
    pub start_time: f64,
    /// Duration (≥ 0, in chart time units).
    pub duration: f64,
    /// Job classification. `None` is treated as processing work.
    pub job_type: Option<JobType>,
}

impl Job {
    /// Creates a new job with no explicit type.
    pub fn new(
        name: impl Into<String>,
        resource: impl Into<String>,
        start_time: f64,
        duration: f64,
    ) -> Self {
        Self {
            name: name.into(),
            resource: resource.into(),
            start_time,
            duration,
            job_type: None,
        }
    }

    /// Sets the job type.
    pub fn with_job_type(mut self, job_type: JobType) -> Self {
        self.job_type = Some(job_type);
        self
    }

    /// End time (start + duration).
    #[inline]
    pub fn end_time(&self) -> f64 {
        self.start_time + self.duration
    }

    /// Whether this job is a changeover.
    ///
    /// The job type flag is the sole signal; job names are never inspected.
    #[inline]
    pub fn is_changeover(&self) -> bool {
        self.job_type == Some(JobType::Changeover)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_builder() {
        let job = Job::new("Job1", "Unit 1", 40.0, 50.0).with_job_type(JobType::Process);
        assert_eq!(job.name, "Job1");
        assert_eq!(job.resource, "Unit 1");
        assert!((job.end_time() - 90.0).abs() < 1e-10);
        assert!(!job.is_changeover());
    }

    #[test]
    fn test_changeover_flag() {
        let co = Job::new("CO", "Unit 1", 0.0, 5.0).with_job_type(JobType::Changeover);
        assert!(co.is_changeover());

        // Untyped jobs count as processing work.
        let untyped = Job::new("CHANGEOVER", "Unit 1", 0.0, 5.0);
        assert!(!untyped.is_changeover());
    }

    #[test]
    fn test_job_type_codes() {
        assert_eq!(JobType::Process.as_code(), 0);
        assert_eq!(JobType::Changeover.as_code(), 1);
        assert_eq!(JobType::from_code(0), Some(JobType::Process));
        assert_eq!(JobType::from_code(1), Some(JobType::Changeover));
        assert_eq!(JobType::from_code(7), None);
    }
}
