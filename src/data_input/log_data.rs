// src/data_input/log_data.rs

use serde::Serialize;

/// Kind of a moving-sample row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EventKind {
    /// Periodic position report.
    Track,
    /// Player entered the proximity range of an obstacle.
    Enter,
}

impl EventKind {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            crate::constants::TAG_TRACK => Some(EventKind::Track),
            crate::constants::TAG_ENTER => Some(EventKind::Enter),
            _ => None,
        }
    }
}

/// One track observation parsed from a `TRACK` or `ENTER` row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sample {
    /// Seconds since session start.
    pub timestamp: f64,
    pub event: EventKind,
    pub id: String,
    pub type_code: i64,
    pub dist_local: f64,
    /// Distance to the nearest active goal, 0 once within the arrival clamp.
    /// Carries the last valid reading when the row's own value was unreadable.
    pub dist_goal: f64,
    /// Set when the row held an unreadable goal distance; such a sample is never in a goal zone.
    pub dist_goal_missing: bool,
    /// Distance to the hazard boundary, >= 0 after the parser resolves sentinels.
    pub dist_bound: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Static goal declared by a `MAP_GOAL` row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Goal {
    pub id: String,
    pub x: f64,
    pub z: f64,
}

/// Output of the log parser: goals, time-ordered samples and row accounting.
#[derive(Debug, Clone, Default)]
pub struct ParsedLog {
    pub goals: Vec<Goal>,
    pub samples: Vec<Sample>,
    /// Non-empty records seen by the reader.
    pub records_read: usize,
    /// Too few fields, header lines, unknown tags, undecodable records.
    pub rows_ignored: usize,
    /// MAP_GOAL rows with missing or invalid coordinates.
    pub goal_rows_skipped: usize,
    /// Sample rows with unparseable timestamp, x or z.
    pub sample_rows_dropped: usize,
}

impl ParsedLog {
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

// src/data_input/log_data.rs
