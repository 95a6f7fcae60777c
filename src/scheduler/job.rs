use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{LanepackError, Result};
use crate::scheduler::estimate;

/// A unit of scheduled work, tagged with the latest acceptable completion
/// time and an estimated execution duration parsed from a raw string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "JobDraft")]
pub struct Job {
    pub id: u64,
    pub description: String,
    pub deadline: DateTime<Utc>,
    estimate: String,
    #[serde(skip_serializing)]
    estimated_duration: Duration,
}

/// Wire shape of a job; conversion re-parses the estimate so a decoded job
/// upholds the same construction invariant.
#[derive(Debug, Deserialize)]
struct JobDraft {
    id: u64,
    description: String,
    deadline: DateTime<Utc>,
    estimate: String,
}

impl TryFrom<JobDraft> for Job {
    type Error = LanepackError;

    fn try_from(draft: JobDraft) -> std::result::Result<Self, Self::Error> {
        Job::new(draft.id, draft.description, draft.deadline, &draft.estimate)
    }
}

impl Job {
    /// Build a job, normalizing its raw estimate. Fails when the estimate
    /// matches none of the accepted formats, so a job with an unparseable
    /// estimate never exists.
    pub fn new(
        id: u64,
        description: String,
        deadline: DateTime<Utc>,
        raw_estimate: &str,
    ) -> Result<Self> {
        let estimate = estimate::canonicalize(raw_estimate)?;
        let estimated_duration = estimate::to_duration(&estimate, raw_estimate)?;
        Ok(Self {
            id,
            description,
            deadline,
            estimate,
            estimated_duration,
        })
    }

    /// The canonical `H:MM:SS:fff` form of the estimate.
    pub fn estimate(&self) -> &str {
        &self.estimate
    }

    /// Elapsed time this job is expected to take.
    pub fn estimated_duration(&self) -> Duration {
        self.estimated_duration
    }
}
