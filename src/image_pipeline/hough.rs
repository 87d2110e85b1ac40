//! Straight-line Hough transform module
//!
//! Votes every foreground pixel into an (angle, signed distance) accumulator
//! and extracts the strongest, well-separated peaks as rail candidates.

mod accumulator;
mod peaks;
pub mod types;

pub use accumulator::HoughAccumulator;
pub use peaks::find_peaks;
pub use types::{HoughParams, LinePeak, RAIL_COUNT};

use tracing::debug;
use crate::image_pipeline::binarize::BinaryMask;
use crate::image_pipeline::common::error::{Result, RailFinderError};

/// Runs the transform and returns the two strongest line peaks, strongest first.
pub fn detect_rails(mask: &BinaryMask, params: &HoughParams) -> Result<[LinePeak; RAIL_COUNT]> {
    let accumulator = HoughAccumulator::vote(mask, params.angle_bins)?;
    debug!(
        angle_bins = accumulator.angle_bins(),
        distance_bins = accumulator.distance_bins(),
        max_votes = accumulator.max_votes(),
        "Accumulated Hough votes"
    );

    let peaks = find_peaks(&accumulator, params, RAIL_COUNT);
    let found = peaks.len();
    peaks
        .try_into()
        .map_err(|_| RailFinderError::InsufficientDetections { found })
}
