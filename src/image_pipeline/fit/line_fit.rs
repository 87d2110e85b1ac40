use tracing::debug;

use crate::image_pipeline::common::error::{Result, RailFinderError};
use crate::image_pipeline::fit::types::{CenterlineModel, LineModel};
use crate::image_pipeline::hough::{LinePeak, RAIL_COUNT};

/// Magnitudes below this are treated as exactly zero when inverting lines.
pub const DEGENERATE_TOLERANCE: f64 = 1e-9;

/// Solves the polar line at the left (x = 0) and right (x = width) image
/// edges and fits the slope/intercept through those two points.
pub fn line_from_peak(peak: &LinePeak, width: usize) -> Result<LineModel> {
    let (sin, cos) = peak.angle.sin_cos();
    if sin.abs() < DEGENERATE_TOLERANCE {
        return Err(RailFinderError::GeometryDegenerate(format!(
            "line at angle {:.4} rad, distance {:.1} has no y(x) form",
            peak.angle, peak.distance
        )));
    }
    if width == 0 {
        return Err(RailFinderError::GeometryDegenerate(
            "cannot fit a line across a zero-width image".to_string(),
        ));
    }

    let (x0, x1) = (0.0, width as f64);
    let y0 = (peak.distance - x0 * cos) / sin;
    let y1 = (peak.distance - x1 * cos) / sin;
    let slope = (y1 - y0) / (x1 - x0);
    Ok(LineModel {
        slope,
        intercept: y0 - slope * x0,
    })
}

/// Fits both rails and averages them into the centerline.
///
/// Fails when the averaged line is horizontal, since rows then have no
/// single column to paint.
pub fn fit_centerline(
    peaks: &[LinePeak; RAIL_COUNT],
    width: usize,
) -> Result<([LineModel; RAIL_COUNT], CenterlineModel)> {
    let rails = [line_from_peak(&peaks[0], width)?, line_from_peak(&peaks[1], width)?];
    let centerline = CenterlineModel::mean_of(&rails);

    if !centerline.slope.is_finite() || centerline.slope.abs() < DEGENERATE_TOLERANCE {
        return Err(RailFinderError::GeometryDegenerate(format!(
            "centerline slope {:e} is horizontal",
            centerline.slope
        )));
    }

    debug!(
        slope = centerline.slope,
        intercept = centerline.intercept,
        "Fitted centerline"
    );
    Ok((rails, centerline))
}
