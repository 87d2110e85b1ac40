//! Image processing pipeline module
//!
//! This module locates the centerline between a pair of straight rails in a
//! still image, with one submodule per pipeline stage and an orchestrating
//! pipeline that runs them in order.

pub mod raster;
pub mod normalize;
pub mod binarize;
pub mod hough;
pub mod fit;
pub mod render;
pub mod output;
pub mod conversions;
pub mod common;

pub use common::{
    RailFinderError,
    Result,
};

pub use raster::{
    RasterImage,
    RasterReader,
    ImageCrateReader,
};

pub use normalize::GrayscaleField;

pub use binarize::{
    BinaryMask,
    Connectivity,
};

pub use hough::{
    HoughAccumulator,
    LinePeak,
};

pub use fit::{
    CenterlineModel,
    LineModel,
};

pub use render::{
    OutOfBoundsPolicy,
    RenderStats,
};

pub use output::{
    RasterWriter,
    ImageCrateWriter,
};

pub use conversions::{
    find_rails,
    PipelineTimings,
    RailDetection,
    RailFinderConfig,
    RailFinderConfigBuilder,
    RailFinderPipeline,
    RunRequest,
};
