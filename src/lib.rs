pub mod error;
pub mod scheduler;

pub use error::{LanepackError, Result};
pub use scheduler::accumulator::{finalize, merge, Lane, LaneAccumulator, LaneIndex, LaneMap};
pub use scheduler::estimate::{canonicalize, parse_estimate};
pub use scheduler::job::Job;
pub use scheduler::selector::{build_lane_matrix, select_and_sort};
