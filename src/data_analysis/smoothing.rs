// src/data_analysis/smoothing.rs

use ndarray::{s, Array1};

/// Trailing simple moving average over `window_size` samples.
///
/// Positions before the window fills are 0, not a partial average, so start-up
/// samples never look like sustained movement. A window of 1 returns the input.
/// Each window is summed on its own; a spike cannot leave residue in later values.
pub fn trailing_moving_average(data: &Array1<f64>, window_size: usize) -> Array1<f64> {
    let mut smoothed_data = Array1::<f64>::zeros(data.len());
    if window_size == 0 || data.len() < window_size {
        return smoothed_data;
    }

    for end in window_size..=data.len() {
        let window_sum: f64 = data.slice(s![end - window_size..end]).sum();
        smoothed_data[end - 1] = window_sum / window_size as f64;
    }

    smoothed_data
}


// src/data_analysis/smoothing.rs
