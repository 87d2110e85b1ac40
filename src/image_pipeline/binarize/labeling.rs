use image::Luma;
use imageproc::region_labelling::connected_components;

use crate::image_pipeline::binarize::types::{BinaryMask, Connectivity};

/// A maximal connected set of pixels sharing one mask value
#[derive(Debug, Clone, Default)]
pub struct Component {
    /// Row-major pixel indices
    pub pixels: Vec<usize>,
    /// Whether any pixel lies on the outermost row or column
    pub touches_border: bool,
}

impl Component {
    pub fn area(&self) -> usize {
        self.pixels.len()
    }
}

/// Groups every pixel equal to `value` into connected components.
///
/// Labels come from `imageproc`, run on the 0/255 view of the mask with the
/// opposite value as background.
pub fn label_components(mask: &BinaryMask, value: bool, connectivity: Connectivity) -> Vec<Component> {
    if mask.data.is_empty() {
        return Vec::new();
    }
    let Some(gray) = mask.to_gray_image() else {
        return Vec::new();
    };

    let background = if value { Luma([0u8]) } else { Luma([255u8]) };
    let labels = connected_components(&gray, connectivity.into(), background);

    let (width, height) = (mask.width, mask.height);
    let mut components: Vec<Component> = Vec::new();
    for (idx, label) in labels.as_raw().iter().enumerate() {
        if *label == 0 {
            continue;
        }
        let slot = *label as usize - 1;
        if slot >= components.len() {
            components.resize_with(slot + 1, Component::default);
        }
        let (x, y) = (idx % width, idx / width);
        let component = &mut components[slot];
        component.pixels.push(idx);
        if x == 0 || y == 0 || x + 1 == width || y + 1 == height {
            component.touches_border = true;
        }
    }

    components.retain(|c| !c.pixels.is_empty());
    components
}
