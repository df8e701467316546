// tests/session_pipeline_test.rs

use std::io::Write;
use std::path::Path;

use nav_log_render::config::AnalysisConfig;
use nav_log_render::data_analysis::session::{analyze_log_file, SessionAnalysis};
use nav_log_render::error::LoadError;
use tempfile::NamedTempFile;

fn write_log(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn analyze(contents: &str) -> SessionAnalysis {
    let file = write_log(contents);
    analyze_log_file(file.path(), &AnalysisConfig::default()).unwrap()
}

/// One TRACK row per entry, one second apart, at a fixed position.
fn track_rows_with_goal_distances(distances: &[&str]) -> String {
    distances
        .iter()
        .enumerate()
        .map(|(i, d)| format!("{i};TRACK;p;0;0;{d};1;0;0;0\n"))
        .collect()
}

#[test]
fn test_samples_are_sorted_by_timestamp_and_stable() {
    let session = analyze(
        "timestamp;event;id;type;dist_local;dist_goal;dist_bound;x;y;z\n\
         3;TRACK;late;0;0;9;1;3;0;0\n\
         1;TRACK;first;0;0;9;1;1;0;0\n\
         2;ENTER;tie_a;0;0;9;1;2;0;0\n\
         2;TRACK;tie_b;0;0;9;1;2;0;0\n",
    );
    let timestamps: Vec<f64> = session.samples.iter().map(|d| d.sample.timestamp).collect();
    assert_eq!(timestamps, vec![1.0, 2.0, 2.0, 3.0]);
    assert_eq!(session.samples[1].sample.id, "tie_a");
    assert_eq!(session.samples[2].sample.id, "tie_b");
    assert_eq!(session.row_counts.rows_ignored, 1);
}

#[test]
fn test_arrival_clamp_and_boundary_never_negative() {
    let session = analyze(
        "0;TRACK;p;0;0;2,5;-1;0;0;0\n\
         1;TRACK;p;0;0;3;4,5;0;0;1\n\
         2;TRACK;p;0;0;3,01;-1;0;0;2\n",
    );
    let goal: Vec<f64> = session.samples.iter().map(|d| d.sample.dist_goal).collect();
    assert_eq!(goal, vec![0.0, 0.0, 3.01]);

    let bound: Vec<f64> = session.samples.iter().map(|d| d.sample.dist_bound).collect();
    assert_eq!(bound, vec![0.0, 4.5, 4.5]);
    assert!(session.samples.iter().all(|d| d.sample.dist_bound >= 0.0));
}

#[test]
fn test_straight_line_path() {
    let session = analyze(
        "0;TRACK;p;0;0;9;1;0;0;0\n\
         1;TRACK;p;0;0;9;1;3;0;0\n\
         2;TRACK;p;0;0;9;1;6;0;0\n\
         3;TRACK;p;0;0;9;1;9;0;0\n",
    );
    assert!((session.stats.total_distance - 9.0).abs() < 1e-12);
    assert!((session.stats.duration - 3.0).abs() < 1e-12);
    assert_eq!(session.samples[0].dt, 1.0);
    assert_eq!(session.samples[0].dx, 0.0);
}

#[test]
fn test_hits_on_rising_edges() {
    let session = analyze(&track_rows_with_goal_distances(&[
        "5", "5", "0.05", "0.05", "5", "0.02",
    ]));
    let indices: Vec<usize> = session.hits.iter().map(|h| h.sample_index).collect();
    assert_eq!(indices, vec![2, 5]);
    assert_eq!(session.stats.goals_reached, 2);
}

#[test]
fn test_unreadable_goal_distance_is_not_an_arrival() {
    let session = analyze(&track_rows_with_goal_distances(&["50", "n/a", "50", "NaN", "50"]));
    assert!(session.hits.is_empty());
    assert_eq!(session.stats.goals_reached, 0);
    assert_eq!(session.samples.len(), 5);
    assert!(session.samples[1].sample.dist_goal_missing);
    assert_eq!(session.samples[1].sample.dist_goal, 50.0);
}

#[test]
fn test_session_starting_inside_goal_zone_counts_index_zero() {
    let session = analyze(&track_rows_with_goal_distances(&["0", "0", "5"]));
    let indices: Vec<usize> = session.hits.iter().map(|h| h.sample_index).collect();
    assert_eq!(indices, vec![0]);
}

#[test]
fn test_smoothed_speed_is_zero_until_window_fills() {
    let rows: String = (0..8)
        .map(|i| format!("{i};TRACK;p;0;0;9;1;{};0;0\n", i * 2))
        .collect();
    let session = analyze(&rows);
    for derived in &session.samples[..4] {
        assert_eq!(derived.speed_smooth, 0.0);
    }
    // Speeds 0, 2, 2, 2, 2: first full window.
    assert!((session.samples[4].speed_smooth - 1.6).abs() < 1e-12);
    assert!((session.samples[5].speed_smooth - 2.0).abs() < 1e-12);
}

#[test]
fn test_goal_attribution_respects_radius() {
    let session = analyze(
        "0;MAP_GOAL;near;0;0;0;0;1;0;1\n\
         0;MAP_GOAL;far;0;0;0;0;100;0;100\n\
         0;TRACK;p;0;0;9;1;0;0;0\n\
         1;TRACK;p;0;0;0;1;2;0;2\n\
         2;TRACK;p;0;0;9;1;50;0;50\n\
         3;TRACK;p;0;0;0;1;50;0;50\n",
    );
    assert_eq!(session.goals.len(), 2);
    assert_eq!(session.hits.len(), 2);
    assert_eq!(session.hits[0].goal_id.as_deref(), Some("near"));
    assert_eq!(session.hits[1].goal_id, None);
}

#[test]
fn test_empty_file_reports_zeros() {
    let session = analyze("");
    assert!(!session.has_data());
    assert_eq!(session.stats.duration, 0.0);
    assert_eq!(session.stats.total_distance, 0.0);
    assert_eq!(session.stats.avg_speed, 0.0);
    assert_eq!(session.stats.hesitation_pct, 0.0);
    assert_eq!(session.stats.goals_reached, 0);
    assert!(session.hits.is_empty());
}

#[test]
fn test_rows_with_bad_coordinates_are_dropped() {
    let session = analyze(
        "0;TRACK;p;0;0;9;1;0;0;0\n\
         x;TRACK;p;0;0;9;1;0;0;0\n\
         2;TRACK;p;0;0;9;1;abc;0;0\n\
         3;TRACK;p;0;0;9;1;1,5;0;2,0\n",
    );
    assert_eq!(session.samples.len(), 2);
    assert_eq!(session.row_counts.sample_rows_dropped, 2);
    assert_eq!(session.samples[1].sample.x, 1.5);
    assert_eq!(session.samples[1].sample.z, 2.0);
}

#[test]
fn test_unreadable_file_is_terminal() {
    let missing = Path::new("/nonexistent/dir/session.csv");
    match analyze_log_file(missing, &AnalysisConfig::default()) {
        Err(LoadError::Io { path, .. }) => assert_eq!(path, missing),
        Ok(_) => panic!("a missing file must not produce a session"),
    }
}

#[test]
fn test_config_file_overrides_thresholds() {
    let config_file = write_log("hit_zone_distance = 4.0\narrival_clamp_distance = 0.0\n");
    let config = AnalysisConfig::from_toml_file(config_file.path()).unwrap();
    assert_eq!(config.hit_zone_distance, 4.0);
    assert_eq!(config.smoothing_window, 5);

    let log = write_log(&track_rows_with_goal_distances(&["10", "3.5", "10"]));
    let session = analyze_log_file(log.path(), &config).unwrap();
    assert_eq!(session.samples[1].sample.dist_goal, 3.5);
    assert_eq!(session.hits.len(), 1);
    assert_eq!(session.hits[0].sample_index, 1);
}
