// src/data_input/log_parser.rs

use csv::{ReaderBuilder, StringRecord};
use log::{debug, info, warn};
use std::fs;
use std::io::Read;
use std::path::Path;

use crate::config::AnalysisConfig;
use crate::constants::{
    DIST_BOUND_SENTINEL, FIELD_DELIMITER, IDX_DIST_BOUND, IDX_DIST_GOAL, IDX_DIST_LOCAL,
    IDX_EVENT, IDX_ID, IDX_TIMESTAMP, IDX_TYPE_CODE, IDX_X, IDX_Y, IDX_Z, MIN_FIELD_COUNT,
    PAD_FIELD_VALUE, SAMPLE_FIELD_COUNT, TAG_MAP_GOAL,
};
use crate::data_input::decimal::{parse_decimal, parse_integer};
use crate::data_input::log_data::{EventKind, Goal, ParsedLog, Sample};
use crate::error::LoadError;

/// Reads and parses a position log from disk.
///
/// The only failure is an unreadable file; everything inside the file is handled
/// row by row (skipped or dropped), so an empty or garbage file yields an empty `ParsedLog`.
pub fn parse_log_file(
    input_file_path: &Path,
    config: &AnalysisConfig,
) -> Result<ParsedLog, LoadError> {
    let bytes = fs::read(input_file_path).map_err(|source| LoadError::Io {
        path: input_file_path.to_path_buf(),
        source,
    })?;
    info!(
        "Reading '{}' ({} bytes)",
        input_file_path.display(),
        bytes.len()
    );
    Ok(parse_log_reader(bytes.as_slice(), config))
}

/// Parses log text already held in memory.
pub fn parse_log_str(text: &str, config: &AnalysisConfig) -> ParsedLog {
    parse_log_reader(text.as_bytes(), config)
}

/// Parses semicolon-delimited log records from any reader.
///
/// Steps, in order:
/// 1. split `MAP_GOAL` declarations from `TRACK`/`ENTER` samples, ignoring everything else,
/// 2. drop samples whose timestamp, x or z cannot be parsed,
/// 3. stable-sort samples by timestamp,
/// 4. clamp `dist_goal` to 0 within the arrival distance and resolve `dist_bound` sentinels.
pub fn parse_log_reader<R: Read>(reader: R, config: &AnalysisConfig) -> ParsedLog {
    let mut parsed = ParsedLog::default();

    let mut csv_reader = ReaderBuilder::new()
        .delimiter(FIELD_DELIMITER)
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    for (row_index, result) in csv_reader.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                warn!("Skipping row {} due to read error: {}", row_index + 1, e);
                parsed.rows_ignored += 1;
                continue;
            }
        };
        parsed.records_read += 1;

        if record.len() < MIN_FIELD_COUNT {
            debug!("Skipping row {}: fewer than {} fields", row_index + 1, MIN_FIELD_COUNT);
            parsed.rows_ignored += 1;
            continue;
        }

        let tag = record.get(IDX_EVENT).unwrap_or("");
        if tag == TAG_MAP_GOAL {
            match parse_goal_row(&record) {
                Some(goal) => parsed.goals.push(goal),
                None => {
                    debug!("Skipping goal row {}: missing or invalid x/z", row_index + 1);
                    parsed.goal_rows_skipped += 1;
                }
            }
        } else if let Some(event) = EventKind::from_tag(tag) {
            match parse_sample_row(&record, event) {
                Some(sample) => parsed.samples.push(sample),
                None => {
                    debug!(
                        "Dropping sample row {}: unparseable timestamp, x or z",
                        row_index + 1
                    );
                    parsed.sample_rows_dropped += 1;
                }
            }
        } else {
            debug!("Ignoring row {} with tag '{}'", row_index + 1, tag);
            parsed.rows_ignored += 1;
        }
    }

    // Vec::sort_by is stable, so equal timestamps keep file order.
    parsed
        .samples
        .sort_by(|a, b| a.timestamp.total_cmp(&b.timestamp));

    clamp_goal_distances(&mut parsed.samples, config.arrival_clamp_distance);
    fill_missing_goal_distances(&mut parsed.samples);
    resolve_boundary_distances(&mut parsed.samples);

    if parsed.sample_rows_dropped > 0 || parsed.goal_rows_skipped > 0 {
        warn!(
            "Dropped {} sample row(s) and {} goal row(s) with invalid coordinates",
            parsed.sample_rows_dropped, parsed.goal_rows_skipped
        );
    }
    info!(
        "Finished reading {} records: {} samples, {} goals, {} ignored",
        parsed.records_read,
        parsed.samples.len(),
        parsed.goals.len(),
        parsed.rows_ignored
    );

    parsed
}

/// Builds a goal from a `MAP_GOAL` row. No partial goal is ever produced.
fn parse_goal_row(record: &StringRecord) -> Option<Goal> {
    let x = record.get(IDX_X).and_then(parse_decimal)?;
    let z = record.get(IDX_Z).and_then(parse_decimal)?;
    Some(Goal {
        id: record.get(IDX_ID).unwrap_or("").to_string(),
        x,
        z,
    })
}

/// Builds a sample from a `TRACK`/`ENTER` row, right-padding short rows with zero fields.
/// Returns `None` when timestamp, x or z is unusable.
fn parse_sample_row(record: &StringRecord, event: EventKind) -> Option<Sample> {
    let mut fields: Vec<&str> = record.iter().collect();
    if fields.len() < SAMPLE_FIELD_COUNT {
        fields.resize(SAMPLE_FIELD_COUNT, PAD_FIELD_VALUE);
    }

    let timestamp = parse_decimal(fields[IDX_TIMESTAMP])?;
    let x = parse_decimal(fields[IDX_X])?;
    let z = parse_decimal(fields[IDX_Z])?;
    // Padded fields read as "0"; only a value present in the row can be unreadable.
    let dist_goal = parse_decimal(fields[IDX_DIST_GOAL]);

    Some(Sample {
        timestamp,
        event,
        id: fields[IDX_ID].to_string(),
        type_code: parse_integer(fields[IDX_TYPE_CODE]).unwrap_or(0),
        dist_local: parse_decimal(fields[IDX_DIST_LOCAL]).unwrap_or(0.0),
        dist_goal: dist_goal.unwrap_or(0.0),
        dist_goal_missing: dist_goal.is_none(),
        // An unreadable boundary distance is no better than "no boundary data".
        dist_bound: parse_decimal(fields[IDX_DIST_BOUND]).unwrap_or(DIST_BOUND_SENTINEL),
        x,
        y: parse_decimal(fields[IDX_Y]).unwrap_or(0.0),
        z,
    })
}

/// Forces `dist_goal` to exactly 0 when it is within the arrival distance.
/// Negative readings fall under the same rule, so the result is never negative.
fn clamp_goal_distances(samples: &mut [Sample], arrival_clamp_distance: f64) {
    for sample in samples.iter_mut().filter(|s| !s.dist_goal_missing) {
        if sample.dist_goal <= arrival_clamp_distance {
            sample.dist_goal = 0.0;
        }
    }
}

/// Gives samples with an unreadable goal distance the last valid reading in time order,
/// or the first later one for a leading gap. The `dist_goal_missing` flag stays set.
fn fill_missing_goal_distances(samples: &mut [Sample]) {
    let mut last_valid = samples
        .iter()
        .find(|s| !s.dist_goal_missing)
        .map(|s| s.dist_goal)
        .unwrap_or(0.0);
    for sample in samples.iter_mut() {
        if sample.dist_goal_missing {
            sample.dist_goal = last_valid;
        } else {
            last_valid = sample.dist_goal;
        }
    }
}

/// Replaces the "no boundary data" sentinel with the last valid reading (in time order),
/// then clamps every value to a minimum of 0.
fn resolve_boundary_distances(samples: &mut [Sample]) {
    let mut last_valid: Option<f64> = None;
    for sample in samples.iter_mut() {
        if sample.dist_bound == DIST_BOUND_SENTINEL {
            sample.dist_bound = last_valid.unwrap_or(0.0);
        } else {
            sample.dist_bound = sample.dist_bound.max(0.0);
            last_valid = Some(sample.dist_bound);
        }
    }
}


// src/data_input/log_parser.rs
