//! Centerline rendering module
//!
//! Burns the fitted centerline into the original raster as a horizontal band
//! of highlight pixels on every row.

mod burn;
pub mod types;

pub use burn::burn_centerline;
pub use types::{OutOfBoundsPolicy, RenderStats, HIGHLIGHT};
