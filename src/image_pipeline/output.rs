//! Output writing module
//!
//! Encodes the annotated raster in the format implied by the output path.

mod writer;
mod image_writer;
mod path;

pub use writer::RasterWriter;
pub use image_writer::ImageCrateWriter;
pub use path::{default_output_path, format_for_path, OUTPUT_SUFFIX};
