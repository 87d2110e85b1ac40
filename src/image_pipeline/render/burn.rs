use tracing::{debug, warn};

use crate::image_pipeline::common::error::{Result, RailFinderError};
use crate::image_pipeline::fit::CenterlineModel;
use crate::image_pipeline::raster::RasterImage;
use crate::image_pipeline::render::types::{OutOfBoundsPolicy, RenderStats, HIGHLIGHT};

/// Paints `[x - line_width, x + line_width]` on each row, where
/// `x = floor((y - intercept) / slope)`.
pub fn burn_centerline(
    image: &mut RasterImage,
    centerline: &CenterlineModel,
    line_width: usize,
    policy: OutOfBoundsPolicy,
) -> Result<RenderStats> {
    let width = i64::try_from(image.width).map_err(|_| {
        RailFinderError::InvalidConfig(format!("image width {} is too large", image.width))
    })?;
    let half = i64::try_from(line_width).map_err(|_| {
        RailFinderError::InvalidConfig(format!("line_width {} is too large", line_width))
    })?;
    let spans: Vec<(usize, i64, i64)> = (0..image.height)
        .map(|y| {
            let x = centerline.x_at(y as f64).floor() as i64;
            (y, x.saturating_sub(half), x.saturating_add(half))
        })
        .collect();

    if policy == OutOfBoundsPolicy::Error {
        if let Some(&(row, lo, hi)) = spans.iter().find(|(_, lo, hi)| *lo < 0 || *hi >= width) {
            let x = if lo < 0 { lo } else { hi };
            return Err(RailFinderError::OutOfBoundsRender {
                row,
                x,
                width: image.width,
            });
        }
    }

    // A band that misses every row would leave the output unmarked.
    let visible = spans.iter().any(|&(_, lo, hi)| lo.max(0) <= hi.min(width - 1));
    if !visible {
        if let Some(&(row, lo, hi)) = spans.first() {
            let x = if hi < 0 { hi } else { lo };
            return Err(RailFinderError::OutOfBoundsRender {
                row,
                x,
                width: image.width,
            });
        }
    }

    let mut stats = RenderStats::default();
    for (y, lo, hi) in spans {
        let (start, end) = (lo.max(0), hi.min(width - 1));
        if start > end {
            stats.skipped_rows += 1;
            continue;
        }
        if start != lo || end != hi {
            stats.clipped_rows += 1;
        }
        for x in start..=end {
            image.set_pixel(x as usize, y, HIGHLIGHT);
        }
        stats.painted_pixels += (end - start + 1) as usize;
    }

    if stats.clipped_rows > 0 || stats.skipped_rows > 0 {
        warn!(
            clipped = stats.clipped_rows,
            skipped = stats.skipped_rows,
            "Centerline band leaves the image on some rows"
        );
    }
    debug!(painted = stats.painted_pixels, "Burned centerline");
    Ok(stats)
}
