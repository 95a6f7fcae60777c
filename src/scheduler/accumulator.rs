use std::collections::{BTreeMap, HashMap};

use chrono::Duration;

use crate::scheduler::job::Job;

/// Position of a lane in creation order.
pub type LaneIndex = u64;

/// An ordered batch of jobs executed together under one duration ceiling.
pub type Lane = Vec<Job>;

/// Unordered lane mapping, as produced by a single accumulation run.
pub type LaneMap = HashMap<LaneIndex, Lane>;

/// Assigns jobs to lanes under a cumulative duration ceiling.
///
/// Jobs are consumed in input order. A job whose addition pushes the current
/// lane's running total strictly over the ceiling opens a new lane and
/// becomes its first entry; the first job of a lane is always accepted,
/// whatever its size. Lanes keep strictly increasing indices from the
/// supplied start index. Sharded callers must seed each accumulator from a
/// disjoint index range.
#[derive(Debug)]
pub struct LaneAccumulator {
    ceiling: Duration,
    lane_index: LaneIndex,
    lane_total: Duration,
    lanes: LaneMap,
}

impl LaneAccumulator {
    pub fn new(ceiling: Duration, start_index: LaneIndex) -> Self {
        Self {
            ceiling,
            lane_index: start_index,
            lane_total: Duration::zero(),
            lanes: HashMap::new(),
        }
    }

    /// Place the next job, opening a new lane when the running total would
    /// exceed the ceiling.
    pub fn accumulate(&mut self, job: Job) {
        let duration = job.estimated_duration();
        // Saturate: an overflowing total is already over any ceiling.
        self.lane_total = self
            .lane_total
            .checked_add(&duration)
            .unwrap_or(Duration::MAX);

        if self.lane_total > self.ceiling {
            self.lane_total = duration;
            self.lane_index += 1;
            tracing::debug!(lane = self.lane_index, "Ceiling exceeded, opened new lane");
        }

        self.lanes.entry(self.lane_index).or_default().push(job);
    }

    /// Raw lane mapping, for callers that merge partial runs themselves.
    pub fn into_lanes(self) -> LaneMap {
        self.lanes
    }

    /// Lane mapping in ascending index order.
    pub fn finish(self) -> BTreeMap<LaneIndex, Lane> {
        finalize(self.lanes)
    }
}

/// Union two partial lane mappings; on an index collision the entry already
/// in `first` is kept. Only meaningful when the runs used disjoint index
/// ranges.
pub fn merge(mut first: LaneMap, second: LaneMap) -> LaneMap {
    for (index, lane) in second {
        first.entry(index).or_insert(lane);
    }
    first
}

/// Order a lane mapping by ascending index.
pub fn finalize(lanes: LaneMap) -> BTreeMap<LaneIndex, Lane> {
    lanes.into_iter().collect()
}
