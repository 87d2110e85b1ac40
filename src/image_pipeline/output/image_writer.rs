use std::io::{Cursor, Write};
use image::{ImageFormat, RgbImage};
use tracing::debug;
use crate::image_pipeline::common::error::{Result, RailFinderError};
use crate::image_pipeline::raster::RasterImage;
use crate::image_pipeline::output::writer::RasterWriter;

/// Encodes through the `image` crate into any format it can write.
pub struct ImageCrateWriter;

impl RasterWriter for ImageCrateWriter {
    fn write_raster(&self, image: &RasterImage, output: &mut dyn Write, format: ImageFormat) -> Result<()> {
        debug!("Encoding {:?} image: {}x{}", format, image.width, image.height);

        let buffer = RgbImage::from_raw(image.width as u32, image.height as u32, image.data.clone())
            .ok_or_else(|| {
                RailFinderError::OutputError(format!(
                    "pixel buffer of {} bytes does not match {}x{}",
                    image.data.len(),
                    image.width,
                    image.height
                ))
            })?;

        let mut encoded = Vec::new();
        buffer
            .write_to(&mut Cursor::new(&mut encoded), format)
            .map_err(|e| RailFinderError::OutputError(e.to_string()))?;

        output
            .write_all(&encoded)
            .map_err(|e| RailFinderError::OutputError(e.to_string()))?;

        debug!("Encoding complete, {} bytes", encoded.len());
        Ok(())
    }
}
