use tracing::debug;
use crate::image_pipeline::normalize::types::GrayscaleField;

pub const HISTOGRAM_BINS: usize = 256;

/// Remaps intensities through their cumulative distribution so the output
/// is spread approximately uniformly over [0, 1].
///
/// The histogram spans the field's own [min, max] range. Each pixel is mapped
/// by linear interpolation of the CDF sampled at the bin centres. A constant
/// field has no usable CDF and is returned unchanged.
pub fn equalize_histogram(field: &GrayscaleField) -> GrayscaleField {
    let Some((lo, hi)) = field.range() else {
        return field.clone();
    };
    if hi <= lo {
        debug!("Flat intensity field, skipping equalization");
        return field.clone();
    }

    let bin_width = (hi - lo) / HISTOGRAM_BINS as f64;
    let mut histogram = [0u64; HISTOGRAM_BINS];
    for &v in &field.data {
        histogram[bin_index(v, lo, bin_width)] += 1;
    }

    let mut cdf = [0f64; HISTOGRAM_BINS];
    let mut running = 0u64;
    for (c, &count) in cdf.iter_mut().zip(histogram.iter()) {
        running += count;
        *c = running as f64;
    }
    let total = running as f64;
    for c in cdf.iter_mut() {
        *c /= total;
    }

    let centers: Vec<f64> = (0..HISTOGRAM_BINS)
        .map(|i| lo + (i as f64 + 0.5) * bin_width)
        .collect();

    let data = field
        .data
        .iter()
        .map(|&v| interpolate(v, &centers, &cdf))
        .collect();
    GrayscaleField::new(field.width, field.height, data)
}

fn bin_index(value: f64, lo: f64, bin_width: f64) -> usize {
    let i = ((value - lo) / bin_width).floor() as usize;
    i.min(HISTOGRAM_BINS - 1)
}

/// Piecewise-linear lookup of `x` in (`xs`, `ys`), clamped to the end values.
fn interpolate(x: f64, xs: &[f64], ys: &[f64]) -> f64 {
    let last = xs.len() - 1;
    if x <= xs[0] {
        return ys[0];
    }
    if x >= xs[last] {
        return ys[last];
    }
    // xs is strictly increasing, so partition_point gives the right neighbour.
    let hi = xs.partition_point(|&c| c <= x);
    let lo = hi - 1;
    let t = (x - xs[lo]) / (xs[hi] - xs[lo]);
    ys[lo] + t * (ys[hi] - ys[lo])
}
