use chrono::{DateTime, Duration, Utc};

use crate::error::{LanepackError, Result};
use crate::scheduler::accumulator::{Lane, LaneAccumulator};
use crate::scheduler::job::Job;

/// Jobs whose deadline falls inside the inclusive window, ordered by
/// deadline ascending. Ties keep their pool order.
pub fn select_and_sort(
    jobs: &[Job],
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<Vec<Job>> {
    if end <= start {
        return Err(LanepackError::InvalidRange { start, end });
    }

    let mut selected: Vec<Job> = jobs
        .iter()
        .filter(|job| job.deadline >= start && job.deadline <= end)
        .cloned()
        .collect();
    selected.sort_by_key(|job| job.deadline);

    tracing::debug!(selected = selected.len(), "Selected jobs inside window");
    Ok(selected)
}

/// Select jobs in the window and pack them into lanes under the ceiling.
/// Lanes come back in creation order.
pub fn build_lane_matrix(
    jobs: &[Job],
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    ceiling: Duration,
) -> Result<Vec<Lane>> {
    let selected = select_and_sort(jobs, start, end)?;

    let mut accumulator = LaneAccumulator::new(ceiling, 0);
    for job in selected {
        accumulator.accumulate(job);
    }

    let lanes: Vec<Lane> = accumulator.finish().into_values().collect();
    tracing::info!(lanes = lanes.len(), "Built lane matrix");
    Ok(lanes)
}
