//! Contrast normalization module
//!
//! Converts an RGB raster into a luminance field and stretches its contrast
//! with histogram equalization.

mod luminance;
mod equalize;
pub mod types;

pub use luminance::to_grayscale;
pub use equalize::{equalize_histogram, HISTOGRAM_BINS};
pub use types::GrayscaleField;

use tracing::debug;
use crate::image_pipeline::raster::RasterImage;

/// Grayscale conversion followed by histogram equalization.
pub fn normalize(image: &RasterImage) -> GrayscaleField {
    let gray = to_grayscale(image);
    let equalized = equalize_histogram(&gray);
    debug!(
        width = equalized.width,
        height = equalized.height,
        "Normalized image contrast"
    );
    equalized
}
