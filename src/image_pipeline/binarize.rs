//! Binarization module
//!
//! Thresholds the equalized field and cleans the result with area-based
//! morphology so that only large, solid foreground regions survive.

mod labeling;
mod morphology;
pub mod types;

pub use labeling::{label_components, Component};
pub use morphology::{remove_small_holes, remove_small_objects, threshold};
pub use types::{BinaryMask, BinarizeParams, Connectivity};

use tracing::debug;
use crate::image_pipeline::normalize::GrayscaleField;

/// Threshold, drop small objects, then fill small enclosed holes.
pub fn binarize(field: &GrayscaleField, params: &BinarizeParams) -> BinaryMask {
    let raw = threshold(field, params.threshold);
    let objects = remove_small_objects(&raw, params.min_object_size, params.connectivity);
    let mask = remove_small_holes(&objects, params.min_hole_size, params.connectivity);
    debug!(
        thresholded = raw.count_foreground(),
        after_objects = objects.count_foreground(),
        after_holes = mask.count_foreground(),
        "Binarized field"
    );
    mask
}
