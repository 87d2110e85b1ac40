//! Rendering types

use crate::image_pipeline::raster::Rgb;

/// Pure red
pub const HIGHLIGHT: Rgb = [255, 0, 0];

/// What to do with rows where the band leaves the image horizontally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutOfBoundsPolicy {
    /// Paint the in-bounds part of the band and skip rows that are fully outside
    #[default]
    Clip,
    /// Fail with `OutOfBoundsRender` before any pixel is modified
    Error,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub painted_pixels: usize,
    /// Rows where only part of the band was inside the image
    pub clipped_rows: usize,
    /// Rows where the whole band fell outside the image
    pub skipped_rows: usize,
}
