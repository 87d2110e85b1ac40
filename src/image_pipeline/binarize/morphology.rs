use crate::image_pipeline::binarize::labeling::label_components;
use crate::image_pipeline::binarize::types::{BinaryMask, Connectivity};
use crate::image_pipeline::normalize::GrayscaleField;

/// Marks pixels strictly brighter than `cutoff` as foreground.
pub fn threshold(field: &GrayscaleField, cutoff: f64) -> BinaryMask {
    let data = field.data.iter().map(|&v| v > cutoff).collect();
    BinaryMask::new(field.width, field.height, data)
}

/// Clears every foreground component with fewer than `min_size` pixels.
///
/// Surviving components are untouched, so applying this twice is the same as
/// applying it once.
pub fn remove_small_objects(mask: &BinaryMask, min_size: usize, connectivity: Connectivity) -> BinaryMask {
    let mut out = mask.clone();
    for component in label_components(mask, true, connectivity) {
        if component.area() < min_size {
            for idx in component.pixels {
                out.data[idx] = false;
            }
        }
    }
    out
}

/// Fills background components smaller than `min_size` pixels that are fully
/// enclosed by foreground. Background touching the image border is never a hole.
pub fn remove_small_holes(mask: &BinaryMask, min_size: usize, connectivity: Connectivity) -> BinaryMask {
    let mut out = mask.clone();
    for component in label_components(mask, false, connectivity) {
        if !component.touches_border && component.area() < min_size {
            for idx in component.pixels {
                out.data[idx] = true;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask_from_rows(rows: &[&str]) -> BinaryMask {
        let width = rows[0].len();
        let data = rows
            .iter()
            .flat_map(|r| r.chars().map(|c| c == '#'))
            .collect();
        BinaryMask::new(width, rows.len(), data)
    }

    /// Deterministic speckle pattern with objects and holes of many sizes.
    fn speckled(width: usize, height: usize) -> BinaryMask {
        let mut state = 0x2545_f491_u32;
        let data = (0..width * height)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                state % 5 < 2
            })
            .collect();
        BinaryMask::new(width, height, data)
    }

    #[test]
    fn threshold_is_strict() {
        let field = GrayscaleField::new(3, 1, vec![0.79, 0.8, 0.81]);
        assert_eq!(threshold(&field, 0.8).data, vec![false, false, true]);
    }

    #[test]
    fn small_objects_are_removed_and_large_kept() {
        let mask = mask_from_rows(&[
            "#.....",
            "...###",
            "...###",
        ]);
        let out = remove_small_objects(&mask, 2, Connectivity::Four);
        assert!(!out.get(0, 0));
        assert_eq!(out.count_foreground(), 6);
    }

    #[test]
    fn enclosed_small_hole_is_filled() {
        let mask = mask_from_rows(&[
            "......",
            ".####.",
            ".#..#.",
            ".####.",
            "......",
        ]);
        let out = remove_small_holes(&mask, 3, Connectivity::Four);
        assert!(out.get(2, 2) && out.get(3, 2));
        // Outer background touches the border and stays untouched.
        assert!(!out.get(0, 0));
    }

    #[test]
    fn hole_at_size_limit_is_kept() {
        let mask = mask_from_rows(&[
            "####",
            "#..#",
            "####",
        ]);
        let out = remove_small_holes(&mask, 2, Connectivity::Four);
        assert_eq!(out, mask);
    }

    #[test]
    fn remove_small_objects_is_idempotent() {
        for connectivity in [Connectivity::Four, Connectivity::Eight] {
            let mask = speckled(64, 48);
            let once = remove_small_objects(&mask, 6, connectivity);
            let twice = remove_small_objects(&once, 6, connectivity);
            assert_eq!(once, twice);
            assert!(once.count_foreground() <= mask.count_foreground());
            if connectivity == Connectivity::Four {
                assert!(once.count_foreground() < mask.count_foreground());
            }
        }
    }

    #[test]
    fn remove_small_holes_is_idempotent() {
        for connectivity in [Connectivity::Four, Connectivity::Eight] {
            let mask = speckled(64, 48);
            let once = remove_small_holes(&mask, 6, connectivity);
            let twice = remove_small_holes(&once, 6, connectivity);
            assert_eq!(once, twice);
            assert!(once.count_foreground() >= mask.count_foreground());
            if connectivity == Connectivity::Four {
                assert!(once.count_foreground() > mask.count_foreground());
            }
        }
    }
}
