//! Finds the centerline of a pair of straight railroad rails in a still image
//! and burns it into a copy of the image as a red band.

pub mod image_pipeline;
pub mod logger;
