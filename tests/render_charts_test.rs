// tests/render_charts_test.rs

use std::path::Path;

use nav_log_render::config::AnalysisConfig;
use nav_log_render::data_analysis::session::SessionAnalysis;
use nav_log_render::data_input::log_parser::parse_log_str;
use nav_log_render::plot_functions::plot_density_heatmap::plot_density_heatmap;
use nav_log_render::plot_functions::plot_goal_efficiency::plot_goal_efficiency;
use nav_log_render::plot_functions::plot_safety_margin::plot_safety_margin;
use nav_log_render::plot_functions::plot_speed_profile::plot_speed_profile;
use nav_log_render::plot_functions::plot_trajectory::plot_trajectory;

const CHART_NAMES: [&str; 5] = [
    "Trajectory",
    "DensityHeatmap",
    "GoalEfficiency",
    "SafetyMargin",
    "SpeedProfile",
];

fn render_all(session: &SessionAnalysis, root_name: &str, output_dir: &Path) {
    let config = AnalysisConfig::default();
    plot_trajectory(session, root_name, output_dir).unwrap();
    plot_density_heatmap(session, root_name, output_dir, config.density_bins).unwrap();
    plot_goal_efficiency(session, root_name, output_dir).unwrap();
    plot_safety_margin(session, root_name, output_dir).unwrap();
    plot_speed_profile(session, root_name, output_dir, config.hesitation_speed).unwrap();
}

fn assert_charts_written(root_name: &str, output_dir: &Path) {
    for chart in CHART_NAMES {
        let path = output_dir.join(format!("{root_name}_{chart}.png"));
        let metadata = std::fs::metadata(&path)
            .unwrap_or_else(|e| panic!("missing chart '{}': {e}", path.display()));
        assert!(metadata.len() > 0, "empty chart '{}'", path.display());
    }
}

#[test]
fn test_empty_session_writes_placeholder_charts() {
    let config = AnalysisConfig::default();
    let session = SessionAnalysis::from_parsed(parse_log_str("", &config), &config);
    assert!(!session.has_data());

    let dir = tempfile::tempdir().unwrap();
    render_all(&session, "empty", dir.path());
    assert_charts_written("empty", dir.path());
}

#[test]
fn test_small_session_writes_all_charts() {
    let config = AnalysisConfig::default();
    let log = "0;MAP_GOAL;g1;0;0;0;0;6;0;0\n\
               0;TRACK;p;0;0;8;2;0;0;0\n\
               1;ENTER;rock;1;1;6;-1;2;0;0\n\
               2;TRACK;p;0;0;n/a;1,5;4;0;1\n\
               3;TRACK;p;0;0;0,5;1;6;0;0\n";
    let session = SessionAnalysis::from_parsed(parse_log_str(log, &config), &config);
    assert_eq!(session.samples.len(), 4);
    assert_eq!(session.hits.len(), 1);

    let dir = tempfile::tempdir().unwrap();
    render_all(&session, "run", dir.path());
    assert_charts_written("run", dir.path());
}
