mod report;
mod sweep;
mod timing;

#[cfg(test)]
mod tests;

pub use report::{ExperimentReport, ExperimentResults};
pub use sweep::{DistortionPoint, DistortionSweep};
pub use timing::{PairTiming, time_closest_pair};
