// src/plot_functions/plot_speed_profile.rs

use std::error::Error;
use std::path::Path;

use crate::constants::{
    COLOR_SPEED_RAW, COLOR_SPEED_SMOOTH, COLOR_THRESHOLD_LINE, LINE_WIDTH_EMPHASIS,
    LINE_WIDTH_PLOT, PLOT_HEIGHT, PLOT_WIDTH,
};
use crate::data_analysis::session::SessionAnalysis;
use crate::plot_framework::{draw_plot, PlotConfig, PlotSeries};
use crate::plot_functions::{non_negative_value_range, time_axis_range};

/// Generates the Speed Profile plot.
///
/// Raw per-sample speed, the trailing-window smoothed speed and a horizontal
/// line at the hesitation threshold. Smoothed speed below the line is what
/// the hesitation percentage counts.
pub fn plot_speed_profile(
    session: &SessionAnalysis,
    root_name: &str,
    output_dir: &Path,
    hesitation_speed: f64,
) -> Result<(), Box<dyn Error>> {
    let output_file = output_dir.join(format!("{root_name}_SpeedProfile.png"));
    let plot_type_name = "Speed Profile";

    let plot_config = time_axis_range(session).map(|(t_start, t_end)| {
        let raw: Vec<(f64, f64)> = session
            .samples
            .iter()
            .map(|d| (d.sample.timestamp, d.speed))
            .collect();
        let smooth: Vec<(f64, f64)> = session
            .samples
            .iter()
            .map(|d| (d.sample.timestamp, d.speed_smooth))
            .collect();
        let threshold = vec![(t_start, hesitation_speed), (t_end, hesitation_speed)];

        let (y_min, y_max) = non_negative_value_range(
            raw.iter()
                .map(|&(_, v)| v)
                .chain(std::iter::once(hesitation_speed)),
        );

        PlotConfig {
            title: format!(
                "Speed Profile (avg {:.2}, hesitation {:.1}%)",
                session.stats.avg_speed, session.stats.hesitation_pct
            ),
            x_range: t_start..t_end,
            y_range: y_min..y_max,
            x_label: "Time (s)".to_string(),
            y_label: "Speed (units/s)".to_string(),
            area_series: Vec::new(),
            series: vec![
                PlotSeries {
                    data: raw,
                    label: "Speed".to_string(),
                    color: *COLOR_SPEED_RAW,
                    stroke_width: LINE_WIDTH_PLOT,
                },
                PlotSeries {
                    data: smooth,
                    label: "Smoothed speed".to_string(),
                    color: *COLOR_SPEED_SMOOTH,
                    stroke_width: LINE_WIDTH_EMPHASIS,
                },
                PlotSeries {
                    data: threshold,
                    label: format!("Hesitation threshold ({hesitation_speed})"),
                    color: *COLOR_THRESHOLD_LINE,
                    stroke_width: LINE_WIDTH_PLOT,
                },
            ],
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

// src/plot_functions/plot_speed_profile.rs
