// src/data_analysis/density.rs

use ndarray::Array2;
use ndarray_stats::QuantileExt;

use crate::data_analysis::derivative::DerivedSample;
use crate::plot_framework::calculate_range;

/// Occupancy histogram of sample positions over the x-z plane.
#[derive(Debug, Clone)]
pub struct DensityGrid {
    pub x_centers: Vec<f64>,
    pub z_centers: Vec<f64>,
    pub x_bin_width: f64,
    pub z_bin_width: f64,
    pub counts: Array2<f64>, // Indexed [x_bin, z_bin].
    pub max_count: f64,
}

/// Bins every sample position into a `bins` x `bins` grid spanning the padded bounding box.
/// Returns `None` for an empty session or a zero bin count.
pub fn calculate_density_grid(samples: &[DerivedSample], bins: usize) -> Option<DensityGrid> {
    if samples.is_empty() || bins == 0 {
        return None;
    }

    let (x_min, x_max, z_min, z_max) = samples.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY),
        |(x_lo, x_hi, z_lo, z_hi), d| {
            (
                x_lo.min(d.sample.x),
                x_hi.max(d.sample.x),
                z_lo.min(d.sample.z),
                z_hi.max(d.sample.z),
            )
        },
    );
    let (x_start, x_end) = calculate_range(x_min, x_max);
    let (z_start, z_end) = calculate_range(z_min, z_max);
    let x_bin_width = (x_end - x_start) / bins as f64;
    let z_bin_width = (z_end - z_start) / bins as f64;

    let mut counts = Array2::<f64>::zeros((bins, bins));
    for d in samples {
        let xi = bin_index(d.sample.x, x_start, x_bin_width, bins);
        let zi = bin_index(d.sample.z, z_start, z_bin_width, bins);
        counts[[xi, zi]] += 1.0;
    }

    let max_count = counts.max().copied().unwrap_or(0.0);
    let x_centers = (0..bins)
        .map(|i| x_start + (i as f64 + 0.5) * x_bin_width)
        .collect();
    let z_centers = (0..bins)
        .map(|i| z_start + (i as f64 + 0.5) * z_bin_width)
        .collect();

    Some(DensityGrid {
        x_centers,
        z_centers,
        x_bin_width,
        z_bin_width,
        counts,
        max_count,
    })
}

fn bin_index(value: f64, start: f64, width: f64, bins: usize) -> usize {
    let raw = ((value - start) / width).floor();
    if raw <= 0.0 {
        0
    } else {
        (raw as usize).min(bins - 1)
    }
}


// src/data_analysis/density.rs
