use crate::image_pipeline::raster::RasterImage;
use crate::image_pipeline::normalize::types::GrayscaleField;

// ITU-R BT.709 luma weights.
const RED_WEIGHT: f64 = 0.2125;
const GREEN_WEIGHT: f64 = 0.7154;
const BLUE_WEIGHT: f64 = 0.0721;

/// Luminance-weighted grayscale of an RGB raster, scaled to [0, 1].
pub fn to_grayscale(image: &RasterImage) -> GrayscaleField {
    let data = image
        .pixels()
        .map(|[r, g, b]| {
            (RED_WEIGHT * r as f64 + GREEN_WEIGHT * g as f64 + BLUE_WEIGHT * b as f64) / 255.0
        })
        .collect();
    GrayscaleField::new(image.width, image.height, data)
}
