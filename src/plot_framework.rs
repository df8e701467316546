// src/plot_framework.rs

use plotters::backend::{BitMapBackend, DrawingBackend};
use plotters::chart::{ChartBuilder, ChartContext, SeriesLabelPosition};
use plotters::coord::types::RangedCoordf64;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{Circle, Cross, EmptyElement, PathElement, Rectangle, Text};
use plotters::series::{AreaSeries, LineSeries};
use plotters::style::colors::{BLACK, RED, WHITE};
use plotters::style::{Color, IntoFont, RGBColor};

use log::info;
use std::error::Error;
use std::ops::Range;
use std::path::Path;

use crate::constants::{
    AREA_FILL_OPACITY, FONT_SIZE_AXIS_LABEL, FONT_SIZE_CHART_TITLE, FONT_SIZE_LEGEND,
    FONT_SIZE_MAIN_TITLE, FONT_SIZE_MESSAGE, LINE_WIDTH_LEGEND,
};

type Chart2d<'a, 'b> =
    ChartContext<'a, BitMapBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;
type RootAreas<'a> = (
    DrawingArea<BitMapBackend<'a>, Shift>,
    DrawingArea<BitMapBackend<'a>, Shift>,
);

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

/// Axis tick label: "k" notation from 1000 up, one decimal for small fractional values.
pub fn format_axis_value(value: f64) -> String {
    if value.abs() >= 1000.0 {
        format!("{:.1}k", value / 1000.0)
    } else if value.abs() < 10.0 && value.fract() != 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{:.0}", value)
    }
}

/// Draw a "Data Unavailable" message on a plot area.
pub fn draw_unavailable_message(
    area: &DrawingArea<BitMapBackend, Shift>,
    plot_type: &str,
    reason: &str,
) -> Result<(), Box<dyn Error>> {
    // Constants for text rendering
    const CHAR_WIDTH_RATIO: f32 = 0.6; // Approximate character width relative to font size
    const LINE_HEIGHT_SPACING: i32 = 4; // Additional spacing between lines

    let (x_range, y_range) = area.get_pixel_range();
    let (width, height) = (
        (x_range.end - x_range.start) as u32,
        (y_range.end - y_range.start) as u32,
    );
    let message = format!("{plot_type} Data Unavailable:\n{reason}");

    let estimated_char_width = (FONT_SIZE_MESSAGE as f32 * CHAR_WIDTH_RATIO) as i32;
    let estimated_line_height = FONT_SIZE_MESSAGE + LINE_HEIGHT_SPACING;

    let lines: Vec<&str> = message.split('\n').collect();
    let max_line_length = lines.iter().map(|line| line.len()).max().unwrap_or(0);
    let estimated_text_width = max_line_length.saturating_mul(estimated_char_width as usize) as i32;
    let estimated_text_height = lines.len().saturating_mul(estimated_line_height as usize) as i32;

    let center_x = width as i32 / 2 - estimated_text_width / 2;
    let center_y = height as i32 / 2 - estimated_text_height / 2;

    let text_style = ("sans-serif", FONT_SIZE_MESSAGE).into_font().color(&RED);
    for (line_idx, line) in lines.iter().enumerate() {
        area.draw(&Text::new(
            line.to_string(),
            (center_x, center_y + line_idx as i32 * estimated_line_height),
            text_style.clone(),
        ))?;
    }
    Ok(())
}

#[derive(Clone)]
pub struct PlotSeries {
    pub data: Vec<(f64, f64)>,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerShape {
    Circle,
    Square,
    Cross,
}

/// Point markers drawn on top of the line series (events, goals, hits).
#[derive(Clone)]
pub struct MarkerSeries {
    pub points: Vec<(f64, f64)>,
    pub label: String,
    pub color: RGBColor,
    pub size: u32,
    pub shape: MarkerShape,
}

#[derive(Clone)]
pub struct PlotConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub x_label: String,
    pub y_label: String,
    /// Curves filled down to the bottom of the y range, drawn first.
    pub area_series: Vec<PlotSeries>,
    pub series: Vec<PlotSeries>,
    pub markers: Vec<MarkerSeries>,
}

impl PlotConfig {
    fn has_data(&self) -> bool {
        self.series.iter().any(|s| !s.data.is_empty())
            || self.area_series.iter().any(|s| !s.data.is_empty())
            || self.markers.iter().any(|m| !m.points.is_empty())
    }
}

#[derive(Clone)]
pub struct HeatmapData {
    pub x_bins: Vec<f64>,
    pub y_bins: Vec<f64>,
    pub x_bin_width: f64,
    pub y_bin_width: f64,
    pub values: Vec<Vec<f64>>, // Indexed [x_bin][y_bin].
}

#[derive(Clone)]
pub struct HeatmapPlotConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub heatmap_data: HeatmapData,
    pub x_label: String,
    pub y_label: String,
    pub max_value: f64, // Value mapped to the top of the colour scale.
}

/// Maps a non-negative count onto the viridis colour map on a log scale,
/// so sparse cells stay visible next to places the player lingered.
fn map_count_to_color(value: f64, max_value: f64) -> RGBColor {
    if !value.is_finite() || !max_value.is_finite() || max_value <= 0.0 {
        return RGBColor(0, 0, 0);
    }
    let t = ((1.0 + value.max(0.0)).ln() / (1.0 + max_value).ln()).clamp(0.0, 1.0);
    let color = colorous::VIRIDIS.eval_continuous(t);
    RGBColor(color.r, color.g, color.b)
}

fn draw_markers(chart: &mut Chart2d, marker: &MarkerSeries) -> Result<(), Box<dyn Error>> {
    if marker.points.is_empty() {
        return Ok(());
    }
    let style = marker.color.filled();
    let size = marker.size;
    let half = size as i32;
    let points = marker.points.iter().copied();

    let annotation = match marker.shape {
        MarkerShape::Circle => {
            let anno = chart.draw_series(points.map(|c| Circle::new(c, size, style)))?;
            anno.legend(move |(x, y)| Circle::new((x + 10, y), size.min(6), style))
        }
        MarkerShape::Square => {
            let anno = chart.draw_series(points.map(|c| {
                EmptyElement::at(c) + Rectangle::new([(-half, -half), (half, half)], style)
            }))?;
            anno.legend(move |(x, y)| Rectangle::new([(x + 4, y - 6), (x + 16, y + 6)], style))
        }
        MarkerShape::Cross => {
            let stroke = marker.color.stroke_width(2);
            let anno = chart.draw_series(points.map(|c| Cross::new(c, size, stroke)))?;
            anno.legend(move |(x, y)| Cross::new((x + 10, y), size.min(6), stroke))
        }
    };
    if !marker.label.is_empty() {
        annotation.label(marker.label.as_str());
    }
    Ok(())
}

/// Draws a single chart using a PlotConfig struct.
fn draw_chart_with_config(
    area: &DrawingArea<BitMapBackend, Shift>,
    plot_config: &PlotConfig,
) -> Result<(), Box<dyn Error>> {
    let mut chart = ChartBuilder::on(area)
        .caption(&plot_config.title, ("sans-serif", FONT_SIZE_CHART_TITLE))
        .margin(5)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(plot_config.x_range.clone(), plot_config.y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc(&plot_config.x_label)
        .y_desc(&plot_config.y_label)
        .x_labels(20)
        .y_labels(10)
        .x_label_formatter(&|x| format_axis_value(*x))
        .y_label_formatter(&|y| format_axis_value(*y))
        .light_line_style(WHITE.mix(0.7))
        .label_style(("sans-serif", FONT_SIZE_AXIS_LABEL))
        .draw()?;

    let mut legend_series_count = 0;
    let baseline = plot_config.y_range.start;

    for s in plot_config.area_series.iter().filter(|s| !s.data.is_empty()) {
        let color = s.color;
        let series = chart.draw_series(
            AreaSeries::new(
                s.data.iter().cloned(),
                baseline,
                color.mix(AREA_FILL_OPACITY).filled(),
            )
            .border_style(color.stroke_width(s.stroke_width)),
        )?;
        if !s.label.is_empty() {
            series.label(&s.label).legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(LINE_WIDTH_LEGEND))
            });
            legend_series_count += 1;
        }
    }

    for s in plot_config.series.iter().filter(|s| !s.data.is_empty()) {
        let color = s.color;
        let series = chart.draw_series(LineSeries::new(
            s.data.iter().cloned(),
            color.stroke_width(s.stroke_width),
        ))?;
        if !s.label.is_empty() {
            series.label(&s.label).legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(LINE_WIDTH_LEGEND))
            });
            legend_series_count += 1;
        }
    }

    for marker in &plot_config.markers {
        draw_markers(&mut chart, marker)?;
        if !marker.points.is_empty() && !marker.label.is_empty() {
            legend_series_count += 1;
        }
    }

    if legend_series_count > 0 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", FONT_SIZE_LEGEND))
            .draw()?;
    }

    Ok(())
}

/// Draws the shared page frame (white background, file title) and returns the chart area.
fn prepare_root_area<'a>(
    output_path: &'a Path,
    root_name: &str,
    size: (u32, u32),
) -> Result<RootAreas<'a>, Box<dyn Error>>
where
    <BitMapBackend<'a> as DrawingBackend>::ErrorType: 'static,
{
    let root_area = BitMapBackend::new(output_path, size).into_drawing_area();
    root_area.fill(&WHITE)?;
    root_area.draw(&Text::new(
        root_name,
        (10, 10),
        ("sans-serif", FONT_SIZE_MAIN_TITLE)
            .into_font()
            .color(&BLACK),
    ))?;
    let margined_root_area = root_area.margin(50, 5, 5, 5);
    Ok((root_area, margined_root_area))
}

/// Creates a single-chart plot image.
/// `None`, an empty config or a degenerate range produce a placeholder image instead of failing.
pub fn draw_plot<'a>(
    output_path: &'a Path,
    root_name: &str,
    plot_type_name: &str,
    size: (u32, u32),
    plot_config: Option<PlotConfig>,
) -> Result<(), Box<dyn Error>>
where
    <BitMapBackend<'a> as DrawingBackend>::ErrorType: 'static,
{
    let (root_area, area) = prepare_root_area(output_path, root_name, size)?;

    let plotted = match plot_config {
        Some(config) => {
            let has_data = config.has_data();
            let valid_ranges = config.x_range.end > config.x_range.start
                && config.y_range.end > config.y_range.start;
            if has_data && valid_ranges {
                draw_chart_with_config(&area, &config)?;
                true
            } else {
                let reason = if !has_data {
                    "No data points"
                } else {
                    "Invalid ranges"
                };
                draw_unavailable_message(&area, plot_type_name, reason)?;
                false
            }
        }
        None => {
            draw_unavailable_message(&area, plot_type_name, "No valid samples in log")?;
            false
        }
    };

    root_area.present()?;
    if plotted {
        info!("  {} plot saved as '{}'.", plot_type_name, output_path.display());
    } else {
        info!(
            "  {} placeholder saved as '{}': no data available to plot.",
            plot_type_name,
            output_path.display()
        );
    }
    Ok(())
}

fn draw_heatmap_chart(
    area: &DrawingArea<BitMapBackend, Shift>,
    config: &HeatmapPlotConfig,
) -> Result<(), Box<dyn Error>> {
    let mut chart = ChartBuilder::on(area)
        .caption(&config.title, ("sans-serif", FONT_SIZE_CHART_TITLE))
        .margin(5)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(config.x_range.clone(), config.y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc(&config.x_label)
        .y_desc(&config.y_label)
        .x_labels(10)
        .y_labels(10)
        .x_label_formatter(&|x| format_axis_value(*x))
        .y_label_formatter(&|y| format_axis_value(*y))
        .light_line_style(WHITE.mix(0.7))
        .label_style(("sans-serif", FONT_SIZE_AXIS_LABEL))
        .draw()?;

    let data = &config.heatmap_data;
    let half_x = data.x_bin_width * 0.5;
    let half_y = data.y_bin_width * 0.5;

    for (x_idx, &x_val) in data.x_bins.iter().enumerate() {
        for (y_idx, &y_val) in data.y_bins.iter().enumerate() {
            if let Some(&value) = data.values.get(x_idx).and_then(|row| row.get(y_idx)) {
                // Empty cells keep the white background.
                if value <= 0.0 {
                    continue;
                }
                let color = map_count_to_color(value, config.max_value);
                chart.draw_series(std::iter::once(Rectangle::new(
                    [(x_val - half_x, y_val - half_y), (x_val + half_x, y_val + half_y)],
                    color.filled(),
                )))?;
            }
        }
    }
    Ok(())
}

/// Creates a heatmap plot image, or a placeholder when there is nothing to bin.
pub fn draw_heatmap_plot<'a>(
    output_path: &'a Path,
    root_name: &str,
    plot_type_name: &str,
    size: (u32, u32),
    heatmap_config: Option<HeatmapPlotConfig>,
) -> Result<(), Box<dyn Error>>
where
    <BitMapBackend<'a> as DrawingBackend>::ErrorType: 'static,
{
    let (root_area, area) = prepare_root_area(output_path, root_name, size)?;

    let plotted = match heatmap_config {
        Some(config) if config.max_value > 0.0 => {
            draw_heatmap_chart(&area, &config)?;
            true
        }
        Some(_) => {
            draw_unavailable_message(&area, plot_type_name, "No data points")?;
            false
        }
        None => {
            draw_unavailable_message(&area, plot_type_name, "No valid samples in log")?;
            false
        }
    };

    root_area.present()?;
    if plotted {
        info!("  {} heatmap saved as '{}'.", plot_type_name, output_path.display());
    } else {
        info!(
            "  {} placeholder saved as '{}': no data available to plot.",
            plot_type_name,
            output_path.display()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_range_pads_and_orders() {
        let (lo, hi) = calculate_range(10.0, 0.0);
        assert!((lo + 1.5).abs() < 1e-12);
        assert!((hi - 11.5).abs() < 1e-12);

        let (lo, hi) = calculate_range(2.0, 2.0);
        assert_eq!((lo, hi), (1.5, 2.5));
    }

    #[test]
    fn test_count_color_scale_endpoints() {
        let low = map_count_to_color(0.0, 10.0);
        let high = map_count_to_color(10.0, 10.0);
        let expected_low = colorous::VIRIDIS.eval_continuous(0.0);
        let expected_high = colorous::VIRIDIS.eval_continuous(1.0);
        assert_eq!((low.0, low.1, low.2), (expected_low.r, expected_low.g, expected_low.b));
        assert_eq!((high.0, high.1, high.2), (expected_high.r, expected_high.g, expected_high.b));
        let black = map_count_to_color(1.0, 0.0);
        assert_eq!((black.0, black.1, black.2), (0, 0, 0));
    }
}

// src/plot_framework.rs
