use std::f64::consts::{FRAC_PI_2, PI};

use crate::image_pipeline::binarize::BinaryMask;
use crate::image_pipeline::common::error::{Result, RailFinderError};

/// Vote grid indexed by (signed distance bin, angle bin)
#[derive(Debug, Clone)]
pub struct HoughAccumulator {
    angles: Vec<f64>,
    /// Distance bins cover the integers `-offset..=offset`
    offset: usize,
    /// Row-major: one row of `angles.len()` counters per distance bin
    votes: Vec<u32>,
}

impl HoughAccumulator {
    pub fn vote(mask: &BinaryMask, angle_bins: usize) -> Result<Self> {
        if angle_bins == 0 {
            return Err(RailFinderError::InvalidConfig(
                "angle_bins must be positive".to_string(),
            ));
        }

        let angles: Vec<f64> = (0..angle_bins)
            .map(|k| -FRAC_PI_2 + k as f64 * PI / angle_bins as f64)
            .collect();
        let trig: Vec<(f64, f64)> = angles.iter().map(|a| (a.cos(), a.sin())).collect();

        let offset = (mask.width as f64).hypot(mask.height as f64).ceil() as usize;
        let distance_bins = 2 * offset + 1;
        let mut votes = vec![0u32; distance_bins * angle_bins];

        for (x, y) in mask.foreground() {
            let (x, y) = (x as f64, y as f64);
            for (a, &(cos, sin)) in trig.iter().enumerate() {
                let rho = (x * cos + y * sin).round() as isize;
                let d = (rho + offset as isize) as usize;
                votes[d * angle_bins + a] += 1;
            }
        }

        Ok(Self { angles, offset, votes })
    }

    pub fn angle_bins(&self) -> usize {
        self.angles.len()
    }

    pub fn distance_bins(&self) -> usize {
        2 * self.offset + 1
    }

    pub fn angle(&self, angle_index: usize) -> f64 {
        self.angles[angle_index]
    }

    pub fn distance(&self, distance_index: usize) -> f64 {
        distance_index as f64 - self.offset as f64
    }

    /// Distance bin of the same line seen from the opposite normal direction.
    pub fn mirrored_distance_index(&self, distance_index: usize) -> usize {
        2 * self.offset - distance_index
    }

    pub fn votes(&self, distance_index: usize, angle_index: usize) -> u32 {
        self.votes[distance_index * self.angles.len() + angle_index]
    }

    pub fn max_votes(&self) -> u32 {
        self.votes.iter().copied().max().unwrap_or(0)
    }

    /// Every bin as (distance index, angle index, votes), row-major.
    pub fn bins(&self) -> impl Iterator<Item = (usize, usize, u32)> + '_ {
        let n = self.angles.len();
        self.votes
            .iter()
            .enumerate()
            .map(move |(i, &v)| (i / n, i % n, v))
    }
}
