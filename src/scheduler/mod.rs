pub mod accumulator;
pub mod estimate;
pub mod job;
pub mod selector;

pub use accumulator::{Lane, LaneAccumulator, LaneIndex, LaneMap};
pub use job::Job;
