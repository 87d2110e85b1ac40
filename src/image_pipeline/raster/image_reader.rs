use tracing::debug;
use crate::image_pipeline::common::error::{Result, RailFinderError};
use crate::image_pipeline::raster::types::RasterImage;
use crate::image_pipeline::raster::reader::RasterReader;

/// Decodes any raster format supported by the `image` crate.
pub struct ImageCrateReader;

impl RasterReader for ImageCrateReader {
    fn read_raster(&self, data: &[u8]) -> Result<RasterImage> {
        debug!("Decoding input image, {} bytes", data.len());

        let decoded = image::load_from_memory(data)
            .map_err(|e| RailFinderError::InputError(e.to_string()))?;

        let rgb = decoded.to_rgb8();
        debug!("Decoded image: {}x{}", rgb.width(), rgb.height());

        Ok(RasterImage::from(rgb))
    }
}
