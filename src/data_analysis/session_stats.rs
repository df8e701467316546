// src/data_analysis/session_stats.rs

use ndarray::Array1;
use serde::Serialize;

use crate::data_analysis::derivative::DerivedSample;

/// Scalar summary of one session. All zero for an empty session.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionStats {
    pub sample_count: usize,
    pub duration: f64, // max(timestamp) - min(timestamp), seconds.
    pub total_distance: f64, // Sum of x-z displacements.
    pub avg_speed: f64, // Mean of unsmoothed per-sample speed.
    pub hesitation_time: f64, // Sum of dt where smoothed speed is below the hesitation speed.
    pub hesitation_pct: f64, // 100 * hesitation_time / duration, 0 when duration is 0.
    pub goals_reached: usize,
}

/// Computes session statistics from derived samples.
///
/// `avg_speed` uses the instantaneous speed and `hesitation_pct` the smoothed one:
/// the first measures overall pace, the second sustained stillness.
pub fn compute_session_stats(
    samples: &[DerivedSample],
    goals_reached: usize,
    hesitation_speed: f64,
) -> SessionStats {
    if samples.is_empty() {
        return SessionStats {
            goals_reached,
            ..SessionStats::default()
        };
    }

    let (time_min, time_max) = samples.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(min_t, max_t), d| (min_t.min(d.sample.timestamp), max_t.max(d.sample.timestamp)),
    );
    let duration = time_max - time_min;

    let speeds: Array1<f64> = samples.iter().map(|d| d.speed).collect();
    let avg_speed = speeds.mean().unwrap_or(0.0);
    let total_distance: f64 = samples.iter().map(|d| d.dx).sum();

    let hesitation_time: f64 = samples
        .iter()
        .filter(|d| d.speed_smooth < hesitation_speed)
        .map(|d| d.dt)
        .sum();
    let hesitation_pct = if duration > 0.0 {
        100.0 * hesitation_time / duration
    } else {
        0.0
    };

    SessionStats {
        sample_count: samples.len(),
        duration,
        total_distance,
        avg_speed,
        hesitation_time,
        hesitation_pct,
        goals_reached,
    }
}


// src/data_analysis/session_stats.rs
