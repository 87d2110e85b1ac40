use rail_finder::image_pipeline::{BinaryMask, RasterImage};

/// Parallel straight rails described by their common normal angle and their
/// signed offsets from the image centre: `(x - cx) cos + (y - cy) sin = offset`.
pub struct RailScene {
    pub width: usize,
    pub height: usize,
    pub normal_deg: f64,
    pub offsets: Vec<f64>,
    /// Pixels within this distance of a rail line are painted as rail
    pub half_width: f64,
}

impl RailScene {
    pub fn new(width: usize, height: usize, normal_deg: f64, offsets: &[f64]) -> Self {
        assert!(width > 0 && height > 0, "image dimensions must be positive");
        Self {
            width,
            height,
            normal_deg,
            offsets: offsets.to_vec(),
            half_width: 1.0,
        }
    }

    fn centre(&self) -> (f64, f64) {
        (self.width as f64 / 2.0, self.height as f64 / 2.0)
    }

    pub fn is_rail(&self, x: usize, y: usize) -> bool {
        let (sin, cos) = self.normal_deg.to_radians().sin_cos();
        let (cx, cy) = self.centre();
        let r = (x as f64 - cx) * cos + (y as f64 - cy) * sin;
        self.offsets.iter().any(|o| (r - o).abs() <= self.half_width)
    }

    /// White rails over a noisy mid-gray background.
    pub fn raster(&self) -> RasterImage {
        noisy_raster(self.width, self.height, |x, y| self.is_rail(x, y))
    }

    pub fn mask(&self) -> BinaryMask {
        let mut mask = BinaryMask::empty(self.width, self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                mask.set(x, y, self.is_rail(x, y));
            }
        }
        mask
    }

    pub fn rgb_image(&self) -> image::RgbImage {
        let raster = self.raster();
        image::RgbImage::from_raw(self.width as u32, self.height as u32, raster.data)
            .expect("buffer matches dimensions")
    }

    /// Column of the true midline at row `y`.
    pub fn centerline_x(&self, y: f64) -> f64 {
        let (sin, cos) = self.normal_deg.to_radians().sin_cos();
        let (cx, cy) = self.centre();
        let mean_offset = self.offsets.iter().sum::<f64>() / self.offsets.len() as f64;
        cx + (mean_offset - (y - cy) * sin) / cos
    }

    /// (slope, intercept) of the true midline as `y = slope * x + intercept`.
    pub fn centerline_model(&self) -> (f64, f64) {
        let (sin, cos) = self.normal_deg.to_radians().sin_cos();
        let (cx, cy) = self.centre();
        let mean_offset = self.offsets.iter().sum::<f64>() / self.offsets.len() as f64;
        let rho = mean_offset + cx * cos + cy * sin;
        (-cos / sin, rho / sin)
    }
}

/// Paints `rail(x, y)` pixels white over deterministic mid-gray noise.
pub fn noisy_raster(width: usize, height: usize, rail: impl Fn(usize, usize) -> bool) -> RasterImage {
    let mut state = 0x9e37_79b9_u32;
    let mut image = RasterImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            let v = if rail(x, y) { 255 } else { 20 + (state % 121) as u8 };
            image.set_pixel(x, y, [v, v, v]);
        }
    }
    image
}

/// Rails that all pass through `vanishing` (image coordinates, may lie
/// outside the frame), one per normal angle, two pixels thick.
pub fn converging_rails(
    width: usize,
    height: usize,
    vanishing: (f64, f64),
    normals_deg: &[f64],
) -> RasterImage {
    let lines: Vec<(f64, f64, f64)> = normals_deg
        .iter()
        .map(|deg| {
            let (sin, cos) = deg.to_radians().sin_cos();
            (cos, sin, vanishing.0 * cos + vanishing.1 * sin)
        })
        .collect();
    noisy_raster(width, height, |x, y| {
        lines
            .iter()
            .any(|&(cos, sin, rho)| (x as f64 * cos + y as f64 * sin - rho).abs() <= 1.0)
    })
}
