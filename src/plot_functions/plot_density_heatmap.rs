// src/plot_functions/plot_density_heatmap.rs

use std::error::Error;
use std::path::Path;

use crate::constants::SQUARE_PLOT_SIZE;
use crate::data_analysis::density::{calculate_density_grid, DensityGrid};
use crate::data_analysis::session::SessionAnalysis;
use crate::plot_framework::{draw_heatmap_plot, HeatmapData, HeatmapPlotConfig};

fn heatmap_config_from_grid(grid: DensityGrid) -> HeatmapPlotConfig {
    let x_range = (grid.x_centers.first().copied().unwrap_or(0.0) - grid.x_bin_width * 0.5)
        ..(grid.x_centers.last().copied().unwrap_or(0.0) + grid.x_bin_width * 0.5);
    let y_range = (grid.z_centers.first().copied().unwrap_or(0.0) - grid.z_bin_width * 0.5)
        ..(grid.z_centers.last().copied().unwrap_or(0.0) + grid.z_bin_width * 0.5);
    let values: Vec<Vec<f64>> = grid.counts.outer_iter().map(|row| row.to_vec()).collect();

    HeatmapPlotConfig {
        title: "Occupancy Density Heatmap".to_string(),
        x_range,
        y_range,
        heatmap_data: HeatmapData {
            x_bins: grid.x_centers,
            y_bins: grid.z_centers,
            x_bin_width: grid.x_bin_width,
            y_bin_width: grid.z_bin_width,
            values,
        },
        x_label: "Position X".to_string(),
        y_label: "Position Z".to_string(),
        max_value: grid.max_count,
    }
}

/// Generates the density heatmap: how many samples fell into each cell of the x-z plane.
pub fn plot_density_heatmap(
    session: &SessionAnalysis,
    root_name: &str,
    output_dir: &Path,
    bins: usize,
) -> Result<(), Box<dyn Error>> {
    let output_file = output_dir.join(format!("{root_name}_DensityHeatmap.png"));
    let plot_type_name = "Density Heatmap";

    let heatmap_config =
        calculate_density_grid(&session.samples, bins).map(heatmap_config_from_grid);

    draw_heatmap_plot(
        &output_file,
        root_name,
        plot_type_name,
        (SQUARE_PLOT_SIZE, SQUARE_PLOT_SIZE),
        heatmap_config,
    )
}

// src/plot_functions/plot_density_heatmap.rs
