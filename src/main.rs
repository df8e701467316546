// src/main.rs

use clap::Parser;
use env_logger::Builder;
use log::{error, info, warn, LevelFilter};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use nav_log_render::config::AnalysisConfig;
use nav_log_render::data_analysis::session::{analyze_log_file, SessionAnalysis};
use nav_log_render::plot_functions::plot_density_heatmap::plot_density_heatmap;
use nav_log_render::plot_functions::plot_goal_efficiency::plot_goal_efficiency;
use nav_log_render::plot_functions::plot_safety_margin::plot_safety_margin;
use nav_log_render::plot_functions::plot_speed_profile::plot_speed_profile;
use nav_log_render::plot_functions::plot_trajectory::plot_trajectory;
use nav_log_render::report::{print_summary, write_stats_json};

/// Renders navigation-experiment position logs into charts and a session summary.
#[derive(Parser, Debug)]
#[command(name = "nav_log_render")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Semicolon-delimited position logs; each is analysed as its own session
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Directory for the PNG charts (default: next to each input file)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// TOML file overriding the analysis thresholds
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the session summary as JSON (single input only)
    #[arg(long, value_name = "FILE")]
    stats_json: Option<PathBuf>,

    /// Skip chart rendering
    #[arg(long)]
    no_plots: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    Builder::new()
        .filter_level(level)
        .parse_env("RUST_LOG")
        .format_timestamp(None)
        .init();
}

fn render_charts(
    session: &SessionAnalysis,
    root_name: &str,
    output_dir: &Path,
    config: &AnalysisConfig,
) -> Result<(), Box<dyn Error>> {
    plot_trajectory(session, root_name, output_dir)?;
    plot_density_heatmap(session, root_name, output_dir, config.density_bins)?;
    plot_goal_efficiency(session, root_name, output_dir)?;
    plot_safety_margin(session, root_name, output_dir)?;
    plot_speed_profile(session, root_name, output_dir, config.hesitation_speed)?;
    Ok(())
}

fn process_file(
    input_path: &Path,
    cli: &Cli,
    config: &AnalysisConfig,
) -> Result<(), Box<dyn Error>> {
    let root_name = input_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "session".to_string());

    info!("Processing '{}'", input_path.display());
    let session = analyze_log_file(input_path, config)?;
    if !session.has_data() {
        warn!(
            "'{}' contains no valid samples; charts will show placeholders.",
            input_path.display()
        );
    }

    print_summary(&root_name, &session);

    if let Some(json_path) = &cli.stats_json {
        write_stats_json(json_path, input_path, &session)?;
    }

    if !cli.no_plots {
        let output_dir = match &cli.output_dir {
            Some(dir) => dir.clone(),
            None => input_path
                .parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(".")),
        };
        fs::create_dir_all(&output_dir)?;
        info!("Rendering charts into '{}'", output_dir.display());
        render_charts(&session, &root_name, &output_dir, config)?;
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    info!("nav_log_render {}", nav_log_render::crate_version());

    if cli.stats_json.is_some() && cli.inputs.len() > 1 {
        error!("--stats-json accepts a single input file ({} given)", cli.inputs.len());
        return ExitCode::FAILURE;
    }

    let config = match &cli.config {
        Some(path) => match AnalysisConfig::from_toml_file(path) {
            Ok(config) => config,
            Err(err) => {
                error!("{err}");
                return ExitCode::FAILURE;
            }
        },
        None => AnalysisConfig::default(),
    };

    let mut failures = 0usize;
    for input_path in &cli.inputs {
        if let Err(err) = process_file(input_path, &cli, &config) {
            error!("Failed to process '{}': {}", input_path.display(), err);
            failures += 1;
        }
    }

    if failures > 0 {
        error!("{failures} of {} file(s) failed.", cli.inputs.len());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

// src/main.rs
