// src/constants.rs

use plotters::style::colors::full_palette::{AMBER, BLUE, GREEN, GREY, LIGHTBLUE, ORANGE, RED};
use plotters::style::RGBColor;

// --- Log wire format ---
pub const FIELD_DELIMITER: u8 = b';';
pub const TAG_TRACK: &str = "TRACK";
pub const TAG_ENTER: &str = "ENTER";
pub const TAG_MAP_GOAL: &str = "MAP_GOAL";

// Positional field indices shared by sample and goal rows.
pub const IDX_TIMESTAMP: usize = 0;
pub const IDX_EVENT: usize = 1;
pub const IDX_ID: usize = 2;
pub const IDX_TYPE_CODE: usize = 3;
pub const IDX_DIST_LOCAL: usize = 4;
pub const IDX_DIST_GOAL: usize = 5;
pub const IDX_DIST_BOUND: usize = 6;
pub const IDX_X: usize = 7;
pub const IDX_Y: usize = 8;
pub const IDX_Z: usize = 9;

/// Number of fields a sample row is padded up to before parsing.
pub const SAMPLE_FIELD_COUNT: usize = 10;
/// Rows with fewer fields than this carry no event tag and are skipped.
pub const MIN_FIELD_COUNT: usize = 2;
/// Value used to right-pad short sample rows.
pub const PAD_FIELD_VALUE: &str = "0";
/// Boundary distance reported by the engine when no hazard data is available.
pub const DIST_BOUND_SENTINEL: f64 = -1.0;

// --- Analysis defaults ---
// Proximity readings at or below this are treated as "arrived" and forced to 0.
pub const DEFAULT_ARRIVAL_CLAMP_DISTANCE: f64 = 3.0;
// Goal-zone threshold for hit detection. Kept separate from the arrival clamp.
pub const DEFAULT_HIT_ZONE_DISTANCE: f64 = 0.1;
pub const DEFAULT_SMOOTHING_WINDOW: usize = 5;
pub const DEFAULT_HESITATION_SPEED: f64 = 0.2;
pub const DEFAULT_GOAL_MATCH_RADIUS: f64 = 10.0;
pub const DEFAULT_DENSITY_BINS: usize = 50;

/// dt assigned to the first sample, which has no predecessor.
pub const FIRST_SAMPLE_DT: f64 = 1.0;

// --- Plot dimensions ---
pub const PLOT_WIDTH: u32 = 1920;
pub const PLOT_HEIGHT: u32 = 1080;
pub const SQUARE_PLOT_SIZE: u32 = 1080;

// --- Font sizes ---
pub const FONT_SIZE_MAIN_TITLE: i32 = 24;
pub const FONT_SIZE_CHART_TITLE: i32 = 20;
pub const FONT_SIZE_AXIS_LABEL: i32 = 12;
pub const FONT_SIZE_LEGEND: i32 = 12;
pub const FONT_SIZE_MESSAGE: i32 = 24;

// --- Plot Color Assignments ---
pub const COLOR_TRAJECTORY: &RGBColor = &GREEN;
pub const COLOR_ENTER_MARKER: &RGBColor = &RED;
pub const COLOR_GOAL_MARKER: &RGBColor = &AMBER;
pub const COLOR_HIT_MARKER: &RGBColor = &BLUE;
pub const COLOR_DIST_GOAL: &RGBColor = &LIGHTBLUE;
pub const COLOR_DIST_BOUND: &RGBColor = &ORANGE;
pub const COLOR_SPEED_RAW: &RGBColor = &GREY;
pub const COLOR_SPEED_SMOOTH: &RGBColor = &BLUE;
pub const COLOR_THRESHOLD_LINE: &RGBColor = &RED;

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 1;
pub const LINE_WIDTH_EMPHASIS: u32 = 2;
pub const LINE_WIDTH_LEGEND: u32 = 2;

// Marker radii in pixels
pub const MARKER_SIZE_SAMPLE: u32 = 4;
pub const MARKER_SIZE_HIT: u32 = 7;
pub const MARKER_SIZE_GOAL: u32 = 9;

// Opacity of the area fill under the safety-margin curve.
pub const AREA_FILL_OPACITY: f64 = 0.1;

// src/constants.rs
