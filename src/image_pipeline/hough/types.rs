//! Hough transform types

/// Number of line peaks extracted per image: one per rail.
pub const RAIL_COUNT: usize = 2;

/// Parameters of the Hough line detector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoughParams {
    /// Number of angle samples over [-pi/2, pi/2)
    pub angle_bins: usize,
    /// Minimum separation between peaks along the distance axis, in bins
    pub min_peak_distance: usize,
    /// Minimum separation between peaks along the angle axis, in bins
    pub min_peak_angle: usize,
    /// Peaks must exceed this fraction of the accumulator maximum
    pub peak_threshold_ratio: f64,
}

/// A detected line in polar form: `distance = x * cos(angle) + y * sin(angle)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePeak {
    /// Normal angle in radians, in [-pi/2, pi/2)
    pub angle: f64,
    /// Signed distance from the image origin in pixels
    pub distance: f64,
    /// Number of foreground pixels that voted for this line
    pub votes: u32,
}
