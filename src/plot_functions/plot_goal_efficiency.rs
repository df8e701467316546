// src/plot_functions/plot_goal_efficiency.rs

use std::error::Error;
use std::path::Path;

use crate::constants::{
    COLOR_DIST_GOAL, COLOR_HIT_MARKER, LINE_WIDTH_PLOT, MARKER_SIZE_HIT, PLOT_HEIGHT, PLOT_WIDTH,
};
use crate::data_analysis::session::SessionAnalysis;
use crate::plot_framework::{draw_plot, MarkerSeries, MarkerShape, PlotConfig, PlotSeries};
use crate::plot_functions::{non_negative_value_range, time_axis_range};

/// Generates the Goal-Seeking Efficiency plot.
///
/// Distance to the current goal over time; arrivals show up as the curve
/// dropping to zero, and each detected hit is marked at its instant.
/// Samples with an unreadable goal distance are left out of the curve.
pub fn plot_goal_efficiency(
    session: &SessionAnalysis,
    root_name: &str,
    output_dir: &Path,
) -> Result<(), Box<dyn Error>> {
    let output_file = output_dir.join(format!("{root_name}_GoalEfficiency.png"));
    let plot_type_name = "Goal Efficiency";

    let plot_config = time_axis_range(session).map(|(t_start, t_end)| {
        let distance: Vec<(f64, f64)> = session
            .samples
            .iter()
            .filter(|d| !d.sample.dist_goal_missing)
            .map(|d| (d.sample.timestamp, d.sample.dist_goal))
            .collect();
        let hit_points: Vec<(f64, f64)> = session.hits.iter().map(|h| (h.timestamp, 0.0)).collect();
        let (y_min, y_max) = non_negative_value_range(distance.iter().map(|&(_, v)| v));

        PlotConfig {
            title: "Goal-Seeking Efficiency".to_string(),
            x_range: t_start..t_end,
            y_range: y_min..y_max,
            x_label: "Time (s)".to_string(),
            y_label: "Distance to Goal".to_string(),
            area_series: Vec::new(),
            series: vec![PlotSeries {
                data: distance,
                label: "Distance to goal".to_string(),
                color: *COLOR_DIST_GOAL,
                stroke_width: LINE_WIDTH_PLOT,
            }],
            markers: vec![MarkerSeries {
                points: hit_points,
                label: format!("Goal reached ({})", session.stats.goals_reached),
                color: *COLOR_HIT_MARKER,
                size: MARKER_SIZE_HIT,
                shape: MarkerShape::Cross,
            }],
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

// src/plot_functions/plot_goal_efficiency.rs
