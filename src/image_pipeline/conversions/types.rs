//! Rail finder configuration and result types

use std::path::{Path, PathBuf};

use crate::image_pipeline::binarize::{BinarizeParams, Connectivity};
use crate::image_pipeline::common::error::{Result, RailFinderError};
use crate::image_pipeline::fit::{CenterlineModel, LineModel};
use crate::image_pipeline::hough::{HoughParams, LinePeak, RAIL_COUNT};
use crate::image_pipeline::output::default_output_path;
use crate::image_pipeline::render::{OutOfBoundsPolicy, RenderStats};

/// Parameters for every stage of the rail finder pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct RailFinderConfig {
    /// Equalized intensity above which a pixel is foreground
    pub threshold: f64,
    /// Smallest foreground component kept, in pixels
    pub min_object_size: usize,
    /// Largest enclosed hole left unfilled is one pixel below this
    pub min_hole_size: usize,
    /// Neighbourhood used for component labeling
    pub connectivity: Connectivity,
    /// Angle samples of the Hough accumulator over half a turn
    pub angle_bins: usize,
    /// Peak separation along the distance axis, in bins
    pub min_peak_distance: usize,
    /// Peak separation along the angle axis, in bins
    pub min_peak_angle: usize,
    /// Peaks must exceed this fraction of the strongest vote count
    pub peak_threshold_ratio: f64,
    /// Half-width of the painted band; the band is `2 * line_width + 1` pixels wide
    pub line_width: usize,
    /// Handling of rows where the band leaves the image
    pub out_of_bounds: OutOfBoundsPolicy,
}

impl Default for RailFinderConfig {
    fn default() -> Self {
        Self {
            threshold: 0.8,
            min_object_size: 10_000,
            min_hole_size: 1_000,
            connectivity: Connectivity::Four,
            angle_bins: 180,
            min_peak_distance: 9,
            min_peak_angle: 10,
            peak_threshold_ratio: 0.5,
            line_width: 2,
            out_of_bounds: OutOfBoundsPolicy::Clip,
        }
    }
}

impl RailFinderConfig {
    pub fn builder() -> RailFinderConfigBuilder {
        RailFinderConfigBuilder::default()
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(RailFinderError::InvalidConfig(format!(
                "threshold {} is outside [0, 1]",
                self.threshold
            )));
        }
        if self.angle_bins == 0 {
            return Err(RailFinderError::InvalidConfig(
                "angle_bins must be positive".to_string(),
            ));
        }
        if i64::try_from(self.line_width).is_err() {
            return Err(RailFinderError::InvalidConfig(format!(
                "line_width {} is too large",
                self.line_width
            )));
        }
        if !(0.0..1.0).contains(&self.peak_threshold_ratio) {
            return Err(RailFinderError::InvalidConfig(format!(
                "peak_threshold_ratio {} is outside [0, 1)",
                self.peak_threshold_ratio
            )));
        }
        Ok(())
    }

    pub fn binarize_params(&self) -> BinarizeParams {
        BinarizeParams {
            threshold: self.threshold,
            min_object_size: self.min_object_size,
            min_hole_size: self.min_hole_size,
            connectivity: self.connectivity,
        }
    }

    pub fn hough_params(&self) -> HoughParams {
        HoughParams {
            angle_bins: self.angle_bins,
            min_peak_distance: self.min_peak_distance,
            min_peak_angle: self.min_peak_angle,
            peak_threshold_ratio: self.peak_threshold_ratio,
        }
    }
}

/// Builder for RailFinderConfig
#[derive(Default)]
pub struct RailFinderConfigBuilder {
    threshold: Option<f64>,
    min_object_size: Option<usize>,
    min_hole_size: Option<usize>,
    connectivity: Option<Connectivity>,
    angle_bins: Option<usize>,
    min_peak_distance: Option<usize>,
    min_peak_angle: Option<usize>,
    peak_threshold_ratio: Option<f64>,
    line_width: Option<usize>,
    out_of_bounds: Option<OutOfBoundsPolicy>,
}

impl RailFinderConfigBuilder {
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn min_object_size(mut self, pixels: usize) -> Self {
        self.min_object_size = Some(pixels);
        self
    }

    pub fn min_hole_size(mut self, pixels: usize) -> Self {
        self.min_hole_size = Some(pixels);
        self
    }

    pub fn connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = Some(connectivity);
        self
    }

    pub fn angle_bins(mut self, bins: usize) -> Self {
        self.angle_bins = Some(bins);
        self
    }

    pub fn min_peak_distance(mut self, bins: usize) -> Self {
        self.min_peak_distance = Some(bins);
        self
    }

    pub fn min_peak_angle(mut self, bins: usize) -> Self {
        self.min_peak_angle = Some(bins);
        self
    }

    pub fn peak_threshold_ratio(mut self, ratio: f64) -> Self {
        self.peak_threshold_ratio = Some(ratio);
        self
    }

    pub fn line_width(mut self, half_width: usize) -> Self {
        self.line_width = Some(half_width);
        self
    }

    pub fn out_of_bounds(mut self, policy: OutOfBoundsPolicy) -> Self {
        self.out_of_bounds = Some(policy);
        self
    }


    pub fn build(self) -> RailFinderConfig {
        let default = RailFinderConfig::default();
        RailFinderConfig {
            threshold: self.threshold.unwrap_or(default.threshold),
            min_object_size: self.min_object_size.unwrap_or(default.min_object_size),
            min_hole_size: self.min_hole_size.unwrap_or(default.min_hole_size),
            connectivity: self.connectivity.unwrap_or(default.connectivity),
            angle_bins: self.angle_bins.unwrap_or(default.angle_bins),
            min_peak_distance: self.min_peak_distance.unwrap_or(default.min_peak_distance),
            min_peak_angle: self.min_peak_angle.unwrap_or(default.min_peak_angle),
            peak_threshold_ratio: self.peak_threshold_ratio.unwrap_or(default.peak_threshold_ratio),
            line_width: self.line_width.unwrap_or(default.line_width),
            out_of_bounds: self.out_of_bounds.unwrap_or(default.out_of_bounds),
        }
    }
}

/// One validated invocation: where to read, where to write, and how to process
#[derive(Debug, Clone)]
pub struct RunRequest {
    pub input_path: PathBuf,
    pub output_path: Option<PathBuf>,
    pub config: RailFinderConfig,
}

impl RunRequest {
    pub fn new(
        input_path: impl Into<PathBuf>,
        output_path: Option<PathBuf>,
        config: RailFinderConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            input_path: input_path.into(),
            output_path,
            config,
        })
    }

    /// The explicit output path, or `<input stem>_wLine<input ext>` next to the input.
    pub fn resolved_output_path(&self) -> PathBuf {
        resolve_output_path(&self.input_path, self.output_path.as_deref())
    }
}

pub(crate) fn resolve_output_path(input: &Path, output: Option<&Path>) -> PathBuf {
    output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output_path(input))
}

/// Everything the pipeline learned about one image
#[derive(Debug, Clone, PartialEq)]
pub struct RailDetection {
    /// Hough peaks, strongest first
    pub peaks: [LinePeak; RAIL_COUNT],
    /// One model per peak, same order
    pub rails: [LineModel; RAIL_COUNT],
    pub centerline: CenterlineModel,
    pub render: RenderStats,
    /// Set when the result was written to disk
    pub output_path: Option<PathBuf>,
}
