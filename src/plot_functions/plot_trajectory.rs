// src/plot_functions/plot_trajectory.rs

use std::error::Error;
use std::path::Path;

use crate::constants::{
    COLOR_ENTER_MARKER, COLOR_GOAL_MARKER, COLOR_HIT_MARKER, COLOR_TRAJECTORY,
    LINE_WIDTH_EMPHASIS, MARKER_SIZE_GOAL, MARKER_SIZE_HIT, MARKER_SIZE_SAMPLE, SQUARE_PLOT_SIZE,
};
use crate::data_analysis::session::SessionAnalysis;
use crate::data_input::log_data::EventKind;
use crate::plot_framework::{
    calculate_range, draw_plot, MarkerSeries, MarkerShape, PlotConfig, PlotSeries,
};

/// Widens the narrower of two ranges so both span the same distance,
/// keeping one world unit the same length on both axes of a square image.
fn equalize_spans(x: (f64, f64), z: (f64, f64)) -> ((f64, f64), (f64, f64)) {
    let x_span = x.1 - x.0;
    let z_span = z.1 - z.0;
    let span = x_span.max(z_span);
    let x_mid = (x.0 + x.1) / 2.0;
    let z_mid = (z.0 + z.1) / 2.0;
    (
        (x_mid - span / 2.0, x_mid + span / 2.0),
        (z_mid - span / 2.0, z_mid + span / 2.0),
    )
}

/// Generates the top-down trajectory map: x-z path, obstacle-approach (`ENTER`) markers,
/// declared goals and detected goal arrivals.
pub fn plot_trajectory(
    session: &SessionAnalysis,
    root_name: &str,
    output_dir: &Path,
) -> Result<(), Box<dyn Error>> {
    let output_file = output_dir.join(format!("{root_name}_Trajectory.png"));
    let plot_type_name = "Trajectory";

    let plot_config = if session.has_data() {
        let path: Vec<(f64, f64)> = session
            .samples
            .iter()
            .map(|d| (d.sample.x, d.sample.z))
            .collect();
        let enter_points: Vec<(f64, f64)> = session
            .samples
            .iter()
            .filter(|d| d.sample.event == EventKind::Enter)
            .map(|d| (d.sample.x, d.sample.z))
            .collect();
        let goal_points: Vec<(f64, f64)> = session.goals.iter().map(|g| (g.x, g.z)).collect();
        let hit_points: Vec<(f64, f64)> = session.hits.iter().map(|h| (h.x, h.z)).collect();

        let (x_min, x_max, z_min, z_max) = path.iter().chain(goal_points.iter()).fold(
            (f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY),
            |(x_lo, x_hi, z_lo, z_hi), &(x, z)| {
                (x_lo.min(x), x_hi.max(x), z_lo.min(z), z_hi.max(z))
            },
        );
        let (x_range, z_range) =
            equalize_spans(calculate_range(x_min, x_max), calculate_range(z_min, z_max));

        Some(PlotConfig {
            title: "Movement Map (Top-Down)".to_string(),
            x_range: x_range.0..x_range.1,
            y_range: z_range.0..z_range.1,
            x_label: "Position X".to_string(),
            y_label: "Position Z".to_string(),
            area_series: Vec::new(),
            series: vec![PlotSeries {
                data: path,
                label: "Travelled path".to_string(),
                color: *COLOR_TRAJECTORY,
                stroke_width: LINE_WIDTH_EMPHASIS,
            }],
            markers: vec![
                MarkerSeries {
                    points: enter_points,
                    label: "Obstacle approach (ENTER)".to_string(),
                    color: *COLOR_ENTER_MARKER,
                    size: MARKER_SIZE_SAMPLE,
                    shape: MarkerShape::Circle,
                },
                MarkerSeries {
                    points: goal_points,
                    label: "Goal".to_string(),
                    color: *COLOR_GOAL_MARKER,
                    size: MARKER_SIZE_GOAL,
                    shape: MarkerShape::Square,
                },
                MarkerSeries {
                    points: hit_points,
                    label: format!("Goal reached ({})", session.stats.goals_reached),
                    color: *COLOR_HIT_MARKER,
                    size: MARKER_SIZE_HIT,
                    shape: MarkerShape::Cross,
                },
            ],
        })
    } else {
        None
    };

    draw_plot(
        &output_file,
        root_name,
        plot_type_name,
        (SQUARE_PLOT_SIZE, SQUARE_PLOT_SIZE),
        plot_config,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equalize_spans() {
        let (x, z) = equalize_spans((0.0, 10.0), (0.0, 2.0));
        assert_eq!(x, (0.0, 10.0));
        assert_eq!(z, (-4.0, 6.0));
    }
}

// src/plot_functions/plot_trajectory.rs
