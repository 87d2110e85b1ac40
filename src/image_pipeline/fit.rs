//! Line fitting module
//!
//! Turns polar Hough peaks into slope/intercept models in image coordinates
//! and averages the two rails into one centerline.

mod line_fit;
pub mod types;

pub use line_fit::{fit_centerline, line_from_peak, DEGENERATE_TOLERANCE};
pub use types::{CenterlineModel, LineModel};
