//! Pipeline orchestration module
//!
//! Wires loader, normalizer, binarizer, line detector, fitter, renderer and
//! writer into one fail-fast run.

mod rail_finder;
mod timing;
pub mod types;


pub use rail_finder::{find_rails, RailFinderPipeline};
pub use timing::{PipelineTimings, StepTiming};
pub use types::{RailDetection, RailFinderConfig, RailFinderConfigBuilder, RunRequest};
