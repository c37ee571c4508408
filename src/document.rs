//! Schedule document (de)serialization.
//!
//! Round-trips a full schedule — resources, jobs, layout overrides,
//! and the color dictionary — through a JSON document. Deserializing a
//! serialized schedule reconstructs an equal schedule except for the
//! `created` timestamp, which is stamped at serialization time and is
//! informational only.
//!
//! Colors persist verbatim as 3-element numeric arrays (never
//! regenerated on load), and job types persist as integer codes with
//! null preserved as null. Unknown extra fields in an input document
//! are ignored for forward compatibility; missing required fields are
//! fatal, with no partial reconstruction.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::layout::{BAR_HEIGHT, TICK_DISTANCE};
use crate::models::{Color, Job, JobType, Schedule};

/// Current document format version.
pub const FORMAT_VERSION: u32 = 1;

/// A failure while reading or writing a schedule document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// A stored job type code is not a known [`JobType`].
    #[error("unknown job type code: {0}")]
    UnknownJobType(u8),
    /// The document is malformed (bad JSON or missing required fields).
    #[error("malformed schedule document: {0}")]
    Malformed(#[from] serde_json::Error),
    /// Reading or writing the document file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Document metadata. Informational; not compared for equality.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Timestamp stamped at serialization time.
    pub created: DateTime<Utc>,
    /// Format version number.
    pub version: u32,
}

/// Chart attributes carried alongside the entity lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentAttributes {
    /// Y-axis tick distance (recorded for consumers; the layout engine
    /// uses its own constant).
    pub tick_distance: f64,
    /// Bar band height (recorded for consumers).
    pub bar_height: f64,
    /// Job-name → color dictionary, as 3-channel numeric arrays.
    pub job_colors: HashMap<String, Color>,
    /// X-axis tick step override.
    pub xticks_step_size: Option<f64>,
    /// X-axis upper bound override.
    pub xticks_max_value: Option<f64>,
}

/// One job record. `job_type` holds the integer code, or null.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecord {
    /// Start time.
    pub start_time: f64,
    /// Duration.
    pub duration: f64,
    /// Resource the job runs on.
    pub resource: String,
    /// Job name.
    pub name: String,
    /// Integer job type code ([`JobType::as_code`]), or null.
    pub job_type: Option<u8>,
}

/// A serialized schedule document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleDocument {
    /// Creation metadata.
    pub metadata: DocumentMetadata,
    /// Layout attributes and the color dictionary.
    pub attributes: DocumentAttributes,
    /// Resource names in stacking order.
    pub resources: Vec<String>,
    /// Job records in insertion order.
    pub jobs: Vec<JobRecord>,
}

impl ScheduleDocument {
    /// Captures a schedule into a document, stamping the current time.
    pub fn from_schedule(schedule: &Schedule) -> Self {
        Self {
            metadata: DocumentMetadata {
                created: Utc::now(),
                version: FORMAT_VERSION,
            },
            attributes: DocumentAttributes {
                tick_distance: TICK_DISTANCE,
                bar_height: BAR_HEIGHT,
                job_colors: schedule.job_colors.clone(),
                xticks_step_size: schedule.xticks_step_size,
                xticks_max_value: schedule.xticks_max_value,
            },
            resources: schedule.resources.clone(),
            jobs: schedule
                .jobs
                .iter()
                .map(|job| JobRecord {
                    start_time: job.start_time,
                    duration: job.duration,
                    resource: job.resource.clone(),
                    name: job.name.clone(),
                    job_type: job.job_type.map(JobType::as_code),
                })
                .collect(),
        }
    }

    /// Reconstructs the schedule this document describes.
    ///
    /// The color dictionary is restored verbatim; job types are decoded
    /// from their integer codes, with null left unset.
    pub fn into_schedule(self) -> Result<Schedule, DocumentError> {
        let mut jobs = Vec::with_capacity(self.jobs.len());
        for record in self.jobs {
            let job_type = match record.job_type {
                Some(code) => {
                    Some(JobType::from_code(code).ok_or(DocumentError::UnknownJobType(code))?)
                }
                None => None,
            };
            jobs.push(Job {
                name: record.name,
                resource: record.resource,
                start_time: record.start_time,
                duration: record.duration,
                job_type,
            });
        }

        Ok(Schedule {
            resources: self.resources,
            jobs,
            job_colors: self.attributes.job_colors,
            xticks_step_size: self.attributes.xticks_step_size,
            xticks_max_value: self.attributes.xticks_max_value,
        })
    }

    /// Serializes the document to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a document from JSON text.
    pub fn from_json(text: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Writes the document to a file as UTF-8 JSON.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), DocumentError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Reads a document from a file.
    pub fn read_from(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        Self::from_json(&fs::read_to_string(path)?)
    }
}
