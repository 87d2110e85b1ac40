use tracing::{info, instrument};
use std::io::Write;
use std::path::Path;

use image::ImageFormat;

use crate::image_pipeline::{
    binarize::binarize,
    common::error::{RailFinderError, Result},
    conversions::timing::PipelineTimings,
    conversions::types::{resolve_output_path, RailDetection, RailFinderConfig, RunRequest},
    fit::fit_centerline,
    hough::detect_rails,
    normalize::normalize,
    output::{format_for_path, ImageCrateWriter, RasterWriter},
    raster::{ImageCrateReader, RasterImage, RasterReader},
    render::burn_centerline,
};

pub struct RailFinderPipeline<R: RasterReader, W: RasterWriter> {
    reader: R,
    writer: W,
    config: RailFinderConfig,
}

impl RailFinderPipeline<ImageCrateReader, ImageCrateWriter> {
    pub fn new(config: RailFinderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            reader: ImageCrateReader,
            writer: ImageCrateWriter,
            config,
        })
    }
}

/// Runs `f` inside a tracing span and records how long it took.
fn timed<T>(timings: &mut PipelineTimings, name: &'static str, f: impl FnOnce() -> T) -> T {
    let _span = tracing::info_span!("stage", stage = name).entered();
    timings.measure(name, f)
}

impl<R: RasterReader, W: RasterWriter> RailFinderPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: RailFinderConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    fn check_dimensions(width: usize, height: usize) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(RailFinderError::InputError(format!(
                "image has no pixels ({}x{})",
                width, height
            )));
        }

        Ok(())
    }

    /// Finds the centerline and burns it into `image` in place.
    pub fn process(&self, image: &mut RasterImage) -> Result<RailDetection> {
        self.process_with_timings(image, &mut PipelineTimings::new())
    }

    #[instrument(skip_all, fields(width = image.width, height = image.height))]
    pub fn process_with_timings(
        &self,
        image: &mut RasterImage,
        timings: &mut PipelineTimings,
    ) -> Result<RailDetection> {
        Self::check_dimensions(image.width, image.height)?;

        let gray = timed(timings, "normalize", || normalize(image));
        let mask = timed(timings, "binarize", || {
            binarize(&gray, &self.config.binarize_params())
        });
        let peaks = timed(timings, "detect_lines", || {
            detect_rails(&mask, &self.config.hough_params())
        })?;
        let (rails, centerline) = timed(timings, "fit_centerline", || {
            fit_centerline(&peaks, image.width)
        })?;
        let render = timed(timings, "render", || {
            burn_centerline(
                image,
                &centerline,
                self.config.line_width,
                self.config.out_of_bounds,
            )
        })?;

        info!(
            slope = centerline.slope,
            intercept = centerline.intercept,
            painted = render.painted_pixels,
            "Centerline found"
        );

        Ok(RailDetection {
            peaks,
            rails,
            centerline,
            render,
            output_path: None,
        })
    }

    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn run(&self, input_data: &[u8], output: &mut dyn Write, format: ImageFormat) -> Result<RailDetection> {
        info!("Starting rail centerline search");

        let mut image = {
            let _span = tracing::info_span!("decode").entered();
            self.reader.read_raster(input_data)?
        };

        let detection = self.process(&mut image)?;

        {
            let _span = tracing::info_span!("encode").entered();
            self.writer.write_raster(&image, output, format)?;
        }

        Ok(detection)
    }

    /// Reads `input_path`, processes it and writes the result to `output_path`
    /// (or the derived `_wLine` path). Nothing is written unless every stage succeeds.
    pub fn run_file<P: AsRef<Path>>(&self, input_path: P, output_path: Option<&Path>) -> Result<RailDetection> {
        self.run_file_with_timings(input_path, output_path)
            .map(|(detection, _)| detection)
    }

    #[instrument(skip_all)]
    pub fn run_file_with_timings<P: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Option<&Path>,
    ) -> Result<(RailDetection, PipelineTimings)> {
        let mut timings = PipelineTimings::new();
        let input_path = input_path.as_ref();
        let output_path = resolve_output_path(input_path, output_path);
        let format = format_for_path(&output_path)?;

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Processing file"
        );

        let input_data = timed(&mut timings, "read_input_file", || {
            std::fs::read(input_path).map_err(|e| {
                RailFinderError::InputError(format!("{}: {}", input_path.display(), e))
            })
        })?;

        let mut image = timed(&mut timings, "decode", || self.reader.read_raster(&input_data))
            .map_err(|e| match e {
                RailFinderError::InputError(msg) => {
                    RailFinderError::InputError(format!("{}: {}", input_path.display(), msg))
                }
                other => other,
            })?;

        let mut detection = self.process_with_timings(&mut image, &mut timings)?;

        let mut encoded = Vec::new();
        timed(&mut timings, "encode", || {
            self.writer.write_raster(&image, &mut encoded, format)
        })?;

        timed(&mut timings, "write_output_file", || {
            std::fs::write(&output_path, &encoded).map_err(|e| {
                RailFinderError::OutputError(format!("{}: {}", output_path.display(), e))
            })
        })?;

        info!(
            output = %output_path.display(),
            total_ms = timings.total_duration().as_secs_f64() * 1000.0,
            "Wrote annotated image"
        );

        detection.output_path = Some(output_path);
        Ok((detection, timings))
    }

    /// Runs the paths of `request` through this pipeline.
    pub fn run_request(&self, request: &RunRequest) -> Result<(RailDetection, PipelineTimings)> {
        self.run_file_with_timings(&request.input_path, request.output_path.as_deref())
    }

    pub fn config(&self) -> &RailFinderConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: RailFinderConfig) {
        self.config = config;
    }
}

/// Runs one CLI-style request end to end with the image-crate reader and writer.
pub fn find_rails(request: &RunRequest) -> Result<(RailDetection, PipelineTimings)> {
    RailFinderPipeline::new(request.config.clone())?.run_request(request)
}
