// src/data_analysis/session.rs

use log::info;
use std::path::Path;

use crate::config::AnalysisConfig;
use crate::data_analysis::derivative::{derive_samples, DerivedSample};
use crate::data_analysis::hit_detection::{attribute_hits, detect_hits, HitEvent};
use crate::data_analysis::session_stats::{compute_session_stats, SessionStats};
use crate::data_input::log_data::{Goal, ParsedLog};
use crate::data_input::log_parser::parse_log_file;
use crate::error::LoadError;

/// Row accounting carried over from parsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowCounts {
    pub records_read: usize,
    pub rows_ignored: usize,
    pub goal_rows_skipped: usize,
    pub sample_rows_dropped: usize,
}

/// Everything the renderer and report need for one loaded session.
#[derive(Debug, Clone)]
pub struct SessionAnalysis {
    pub goals: Vec<Goal>,
    pub samples: Vec<DerivedSample>,
    pub stats: SessionStats,
    pub hits: Vec<HitEvent>,
    pub row_counts: RowCounts,
}

impl SessionAnalysis {
    /// Runs the deriver and hit detector over a parsed log.
    /// An empty log produces the "no data" state: zero stats, no samples, no hits.
    pub fn from_parsed(parsed: ParsedLog, config: &AnalysisConfig) -> Self {
        let row_counts = RowCounts {
            records_read: parsed.records_read,
            rows_ignored: parsed.rows_ignored,
            goal_rows_skipped: parsed.goal_rows_skipped,
            sample_rows_dropped: parsed.sample_rows_dropped,
        };

        let samples = derive_samples(parsed.samples, config.smoothing_window);
        let mut hits = detect_hits(&samples, config.hit_zone_distance);
        attribute_hits(&mut hits, &parsed.goals, config.goal_match_radius);
        let stats = compute_session_stats(&samples, hits.len(), config.hesitation_speed);

        info!(
            "Derived {} samples, {} hit(s) against {} declared goal(s)",
            samples.len(),
            hits.len(),
            parsed.goals.len()
        );

        SessionAnalysis {
            goals: parsed.goals,
            samples,
            stats,
            hits,
            row_counts,
        }
    }

    /// False when no sample survived parsing; charts then show placeholders.
    pub fn has_data(&self) -> bool {
        !self.samples.is_empty()
    }

    /// Time span covered by the samples, if any.
    pub fn time_range(&self) -> Option<(f64, f64)> {
        let first = self.samples.first()?.sample.timestamp;
        let last = self.samples.last()?.sample.timestamp;
        Some((first, last))
    }
}

/// Loads, parses and analyses one log file. Fails only when the file cannot be read.
pub fn analyze_log_file(
    input_file_path: &Path,
    config: &AnalysisConfig,
) -> Result<SessionAnalysis, LoadError> {
    let parsed = parse_log_file(input_file_path, config)?;
    Ok(SessionAnalysis::from_parsed(parsed, config))
}


// src/data_analysis/session.rs
