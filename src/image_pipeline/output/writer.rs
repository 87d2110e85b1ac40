use std::io::Write;
use image::ImageFormat;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raster::RasterImage;

pub trait RasterWriter {
    fn write_raster(&self, image: &RasterImage, output: &mut dyn Write, format: ImageFormat) -> Result<()>;
}
