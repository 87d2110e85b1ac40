//! Binary mask types

use image::GrayImage;

/// Neighbourhood used when grouping pixels into connected components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connectivity {
    /// Edge-adjacent neighbours only
    #[default]
    Four,
    /// Edge- and corner-adjacent neighbours
    Eight,
}

impl From<Connectivity> for imageproc::region_labelling::Connectivity {
    fn from(connectivity: Connectivity) -> Self {
        match connectivity {
            Connectivity::Four => imageproc::region_labelling::Connectivity::Four,
            Connectivity::Eight => imageproc::region_labelling::Connectivity::Eight,
        }
    }
}

/// Parameters of the binarization stage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinarizeParams {
    /// Pixels strictly above this intensity become foreground
    pub threshold: f64,
    /// Foreground components smaller than this many pixels are dropped
    pub min_object_size: usize,
    /// Enclosed background components smaller than this many pixels are filled
    pub min_hole_size: usize,
    pub connectivity: Connectivity,
}

/// Foreground mask, row-major, same shape as the grayscale field it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryMask {
    pub width: usize,
    pub height: usize,
    pub data: Vec<bool>,
}

impl BinaryMask {
    pub fn new(width: usize, height: usize, data: Vec<bool>) -> Self {
        debug_assert_eq!(data.len(), width * height);
        Self { width, height, data }
    }

    pub fn empty(width: usize, height: usize) -> Self {
        Self::new(width, height, vec![false; width * height])
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.data[y * self.width + x]
    }

    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        self.data[y * self.width + x] = value;
    }

    pub fn count_foreground(&self) -> usize {
        self.data.iter().filter(|&&v| v).count()
    }

    /// (x, y) coordinates of every foreground pixel in row-major order.
    pub fn foreground(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.data
            .iter()
            .enumerate()
            .filter(|(_, v)| **v)
            .map(move |(i, _)| (i % width, i / width))
    }

    /// 8-bit view of the mask: foreground 255, background 0.
    pub fn to_gray_image(&self) -> Option<GrayImage> {
        let pixels = self.data.iter().map(|&v| if v { 255 } else { 0 }).collect();
        GrayImage::from_raw(self.width as u32, self.height as u32, pixels)
    }
}
