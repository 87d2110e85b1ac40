//! Grayscale field types

/// Floating point intensities in [0, 1], row-major, same shape as the source raster
#[derive(Debug, Clone, PartialEq)]
pub struct GrayscaleField {
    pub width: usize,
    pub height: usize,
    pub data: Vec<f64>,
}

impl GrayscaleField {
    pub fn new(width: usize, height: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), width * height);
        Self { width, height, data }
    }

    pub fn get(&self, x: usize, y: usize) -> f64 {
        self.data[y * self.width + x]
    }

    /// Smallest and largest intensity, `None` for an empty field.
    pub fn range(&self) -> Option<(f64, f64)> {
        let mut values = self.data.iter().copied();
        let first = values.next()?;
        Some(values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}
