// src/plot_functions/plot_safety_margin.rs

use std::error::Error;
use std::path::Path;

use crate::constants::{COLOR_DIST_BOUND, LINE_WIDTH_PLOT, PLOT_HEIGHT, PLOT_WIDTH};
use crate::data_analysis::session::SessionAnalysis;
use crate::plot_framework::{draw_plot, PlotConfig, PlotSeries};
use crate::plot_functions::{non_negative_value_range, time_axis_range};

/// Generates the Safety Margin plot: distance to the nearest boundary over time,
/// filled down to zero.
pub fn plot_safety_margin(
    session: &SessionAnalysis,
    root_name: &str,
    output_dir: &Path,
) -> Result<(), Box<dyn Error>> {
    let output_file = output_dir.join(format!("{root_name}_SafetyMargin.png"));
    let plot_type_name = "Safety Margin";

    let plot_config = time_axis_range(session).map(|(t_start, t_end)| {
        let margin: Vec<(f64, f64)> = session
            .samples
            .iter()
            .map(|d| (d.sample.timestamp, d.sample.dist_bound))
            .collect();
        let (y_min, y_max) = non_negative_value_range(margin.iter().map(|&(_, v)| v));

        PlotConfig {
            title: "Safety Margin (Distance to Boundary)".to_string(),
            x_range: t_start..t_end,
            y_range: y_min..y_max,
            x_label: "Time (s)".to_string(),
            y_label: "Distance to Boundary".to_string(),
            area_series: vec![PlotSeries {
                data: margin,
                label: "Boundary distance".to_string(),
                color: *COLOR_DIST_BOUND,
                stroke_width: LINE_WIDTH_PLOT,
            }],
            series: Vec::new(),
            markers: Vec::new(),
        }
    });

    draw_plot(
        &output_file,
        root_name,
        plot_type_name,
        (PLOT_WIDTH, PLOT_HEIGHT),
        plot_config,
    )
}

// src/plot_functions/plot_safety_margin.rs
