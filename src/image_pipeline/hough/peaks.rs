use std::cmp::Reverse;

use crate::image_pipeline::hough::accumulator::HoughAccumulator;
use crate::image_pipeline::hough::types::{HoughParams, LinePeak};

#[derive(Debug, Clone, Copy)]
struct Bin {
    distance: usize,
    angle: usize,
    votes: u32,
}

/// Extracts up to `max_peaks` local maxima of the accumulator, strongest first.
///
/// A bin qualifies when it exceeds `peak_threshold_ratio` of the global
/// maximum and is the maximum of its separation window. Qualifying bins are
/// then accepted greedily; each accepted peak suppresses its window, wrapping
/// across the angle boundary where (angle + pi, -distance) names the same line.
pub fn find_peaks(acc: &HoughAccumulator, params: &HoughParams, max_peaks: usize) -> Vec<LinePeak> {
    let max_votes = acc.max_votes();
    if max_votes == 0 || max_peaks == 0 {
        return Vec::new();
    }
    let threshold = params.peak_threshold_ratio * max_votes as f64;

    let mut candidates: Vec<Bin> = acc
        .bins()
        .filter(|&(_, _, votes)| votes as f64 > threshold)
        .map(|(distance, angle, votes)| Bin { distance, angle, votes })
        .filter(|bin| is_window_maximum(acc, bin, params))
        .collect();
    candidates.sort_by_key(|bin| (Reverse(bin.votes), bin.distance, bin.angle));

    let mut accepted: Vec<Bin> = Vec::with_capacity(max_peaks);
    for bin in candidates {
        if accepted.len() == max_peaks {
            break;
        }
        if accepted.iter().any(|peak| suppresses(acc, peak, &bin, params)) {
            continue;
        }
        accepted.push(bin);
    }

    accepted
        .into_iter()
        .map(|bin| LinePeak {
            angle: acc.angle(bin.angle),
            distance: acc.distance(bin.distance),
            votes: bin.votes,
        })
        .collect()
}

fn is_window_maximum(acc: &HoughAccumulator, bin: &Bin, params: &HoughParams) -> bool {
    let d_lo = bin.distance.saturating_sub(params.min_peak_distance);
    let d_hi = (bin.distance + params.min_peak_distance).min(acc.distance_bins() - 1);
    let a_lo = bin.angle.saturating_sub(params.min_peak_angle);
    let a_hi = (bin.angle + params.min_peak_angle).min(acc.angle_bins() - 1);

    (d_lo..=d_hi).all(|d| (a_lo..=a_hi).all(|a| acc.votes(d, a) <= bin.votes))
}

fn suppresses(acc: &HoughAccumulator, peak: &Bin, bin: &Bin, params: &HoughParams) -> bool {
    let direct_angle = peak.angle.abs_diff(bin.angle);
    if direct_angle <= params.min_peak_angle
        && peak.distance.abs_diff(bin.distance) <= params.min_peak_distance
    {
        return true;
    }

    let wrapped_angle = acc.angle_bins() - direct_angle;
    let mirrored = acc.mirrored_distance_index(bin.distance);
    wrapped_angle <= params.min_peak_angle
        && peak.distance.abs_diff(mirrored) <= params.min_peak_distance
}
