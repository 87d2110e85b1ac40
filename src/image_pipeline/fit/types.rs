//! Line model types

/// `y = slope * x + intercept` in pixel coordinates (y grows downwards)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineModel {
    pub slope: f64,
    pub intercept: f64,
}

impl LineModel {
    pub fn y_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Midline between the two rails, the arithmetic mean of their models
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenterlineModel {
    pub slope: f64,
    pub intercept: f64,
}

impl CenterlineModel {
    pub fn mean_of(lines: &[LineModel]) -> Self {
        let n = lines.len() as f64;
        Self {
            slope: lines.iter().map(|l| l.slope).sum::<f64>() / n,
            intercept: lines.iter().map(|l| l.intercept).sum::<f64>() / n,
        }
    }

    /// Column crossed at row `y`. Undefined for a zero slope, which the fitter rejects.
    pub fn x_at(&self, y: f64) -> f64 {
        (y - self.intercept) / self.slope
    }
}
