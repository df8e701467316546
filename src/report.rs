// src/report.rs

use serde::Serialize;
use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::data_analysis::hit_detection::HitEvent;
use crate::data_analysis::session::SessionAnalysis;
use crate::data_analysis::session_stats::SessionStats;
use crate::data_input::log_data::Goal;

/// Serializable summary of one session.
#[derive(Debug, Serialize)]
pub struct SessionReport<'a> {
    pub source: String,
    pub stats: &'a SessionStats,
    pub goals: &'a [Goal],
    pub hits: &'a [HitEvent],
    pub records_read: usize,
    pub rows_ignored: usize,
    pub goal_rows_skipped: usize,
    pub sample_rows_dropped: usize,
}

impl<'a> SessionReport<'a> {
    pub fn new(source: &Path, session: &'a SessionAnalysis) -> Self {
        SessionReport {
            source: source.display().to_string(),
            stats: &session.stats,
            goals: &session.goals,
            hits: &session.hits,
            records_read: session.row_counts.records_read,
            rows_ignored: session.row_counts.rows_ignored,
            goal_rows_skipped: session.row_counts.goal_rows_skipped,
            sample_rows_dropped: session.row_counts.sample_rows_dropped,
        }
    }
}

/// Builds the console summary as lines of text.
pub fn format_summary(root_name: &str, session: &SessionAnalysis) -> Vec<String> {
    let stats = &session.stats;
    let counts = &session.row_counts;
    let mut lines = vec![format!("--- Session summary: {root_name} ---")];

    if !session.has_data() {
        lines.push("  No valid samples in log; all statistics are zero.".to_string());
    }
    lines.push(format!("  Samples:           {}", stats.sample_count));
    lines.push(format!("  Duration:          {:.2} s", stats.duration));
    lines.push(format!("  Total distance:    {:.2}", stats.total_distance));
    lines.push(format!("  Average speed:     {:.3}", stats.avg_speed));
    lines.push(format!(
        "  Hesitation:        {:.1}% ({:.2} s)",
        stats.hesitation_pct, stats.hesitation_time
    ));
    lines.push(format!(
        "  Goals reached:     {} (of {} declared)",
        stats.goals_reached,
        session.goals.len()
    ));

    for (hit_number, hit) in session.hits.iter().enumerate() {
        let goal = hit.goal_id.as_deref().unwrap_or("unattributed");
        lines.push(format!(
            "    Hit {}: t={:.2} s at ({:.2}, {:.2}) -> {}",
            hit_number + 1,
            hit.timestamp,
            hit.x,
            hit.z,
            goal
        ));
    }

    lines.push(format!(
        "  Rows: {} read, {} ignored, {} goal rows skipped, {} sample rows dropped",
        counts.records_read,
        counts.rows_ignored,
        counts.goal_rows_skipped,
        counts.sample_rows_dropped
    ));
    lines
}

pub fn print_summary(root_name: &str, session: &SessionAnalysis) {
    for line in format_summary(root_name, session) {
        println!("{line}");
    }
}

/// Writes the session summary as pretty-printed JSON.
pub fn write_stats_json(
    output_path: &Path,
    source: &Path,
    session: &SessionAnalysis,
) -> Result<(), Box<dyn Error>> {
    let writer = BufWriter::new(File::create(output_path)?);
    serde_json::to_writer_pretty(writer, &SessionReport::new(source, session))?;
    log::info!("Summary JSON written to '{}'.", output_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalysisConfig;
    use crate::data_input::log_parser::parse_log_str;

    fn analyze(text: &str) -> SessionAnalysis {
        let config = AnalysisConfig::default();
        SessionAnalysis::from_parsed(parse_log_str(text, &config), &config)
    }

    #[test]
    fn test_summary_lists_hits() {
        let session = analyze(
            "0;MAP_GOAL;g1;0;0;0;0;5;0;5\n\
             0;TRACK;p;0;0;8;1;0;0;0\n\
             1;TRACK;p;0;0;2;1;5;0;5\n",
        );
        let lines = format_summary("run1", &session);
        assert!(lines[0].contains("run1"));
        assert!(lines.iter().any(|l| l.contains("Goals reached:     1 (of 1 declared)")));
        assert!(lines.iter().any(|l| l.contains("Hit 1") && l.contains("g1")));
    }

    #[test]
    fn test_summary_for_empty_session() {
        let session = analyze("");
        let lines = format_summary("empty", &session);
        assert!(lines.iter().any(|l| l.contains("No valid samples")));
        assert!(lines.iter().any(|l| l.contains("Duration:          0.00 s")));
    }

    #[test]
    fn test_stats_json_round_trip() {
        let session = analyze(
            "0;TRACK;p;0;0;8;1;0;0;0\n\
             1;TRACK;p;0;0;0;1;3;0;4\n",
        );
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.json");
        write_stats_json(&path, Path::new("run.csv"), &session).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["source"], "run.csv");
        assert_eq!(value["stats"]["goals_reached"], 1);
        assert_eq!(value["stats"]["total_distance"], 5.0);
        assert_eq!(value["hits"][0]["sample_index"], 1);
        assert!(value["hits"][0]["goal_id"].is_null());
    }
}

// src/report.rs
