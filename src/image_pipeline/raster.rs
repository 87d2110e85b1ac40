//! Raster image loading module
//!
//! This module decodes input files into an 8-bit RGB pixel buffer.

mod reader;
mod image_reader;
pub mod types;

pub use reader::RasterReader;
pub use image_reader::ImageCrateReader;
pub use types::{RasterImage, Rgb};
