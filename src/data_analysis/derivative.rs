// src/data_analysis/derivative.rs

use ndarray::Array1;
use serde::Serialize;

use crate::constants::FIRST_SAMPLE_DT;
use crate::data_analysis::smoothing::trailing_moving_average;
use crate::data_input::log_data::Sample;

/// A sample plus the per-sample kinematics derived from its predecessor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedSample {
    #[serde(flatten)]
    pub sample: Sample,
    pub dt: f64, // Seconds since previous sample (FIRST_SAMPLE_DT for the first).
    pub dx: f64, // x-z displacement since previous sample (0 for the first).
    pub speed: f64, // dx / dt, or 0 when dt is not positive.
    pub speed_smooth: f64, // Trailing moving average of speed, 0 until the window fills.
}

/// Elapsed time between consecutive samples.
/// The first entry is `FIRST_SAMPLE_DT` so the first sample never divides by zero.
pub fn calculate_time_deltas(timestamps: &[f64]) -> Vec<f64> {
    if timestamps.is_empty() {
        return Vec::new();
    }
    let mut deltas = Vec::with_capacity(timestamps.len());
    deltas.push(FIRST_SAMPLE_DT);
    deltas.extend(timestamps.windows(2).map(|pair| pair[1] - pair[0]));
    deltas
}

/// Euclidean displacement in the x-z plane between consecutive positions; 0 for the first.
pub fn calculate_planar_displacements(positions_xz: &[(f64, f64)]) -> Vec<f64> {
    if positions_xz.is_empty() {
        return Vec::new();
    }
    let mut displacements = Vec::with_capacity(positions_xz.len());
    displacements.push(0.0);
    displacements.extend(positions_xz.windows(2).map(|pair| {
        let (x0, z0) = pair[0];
        let (x1, z1) = pair[1];
        ((x1 - x0).powi(2) + (z1 - z0).powi(2)).sqrt()
    }));
    displacements
}

/// Instantaneous speed `dx / dt`, 0 where `dt` is not positive.
pub fn calculate_speeds(displacements: &[f64], time_deltas: &[f64]) -> Vec<f64> {
    displacements
        .iter()
        .zip(time_deltas)
        .map(|(&dx, &dt)| if dt > 0.0 { dx / dt } else { 0.0 })
        .collect()
}

/// Derives dt, dx, speed and smoothed speed for a whole, time-sorted session.
pub fn derive_samples(samples: Vec<Sample>, smoothing_window: usize) -> Vec<DerivedSample> {
    let timestamps: Vec<f64> = samples.iter().map(|s| s.timestamp).collect();
    let positions: Vec<(f64, f64)> = samples.iter().map(|s| (s.x, s.z)).collect();

    let time_deltas = calculate_time_deltas(&timestamps);
    let displacements = calculate_planar_displacements(&positions);
    let speeds = calculate_speeds(&displacements, &time_deltas);
    let smoothed = trailing_moving_average(&Array1::from(speeds.clone()), smoothing_window);

    samples
        .into_iter()
        .enumerate()
        .map(|(i, sample)| DerivedSample {
            sample,
            dt: time_deltas[i],
            dx: displacements[i],
            speed: speeds[i],
            speed_smooth: smoothed[i],
        })
        .collect()
}


// src/data_analysis/derivative.rs
