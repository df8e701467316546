// src/plot_functions/mod.rs

use crate::data_analysis::session::SessionAnalysis;
use crate::plot_framework::calculate_range;

pub mod plot_density_heatmap;
pub mod plot_goal_efficiency;
pub mod plot_safety_margin;
pub mod plot_speed_profile;
pub mod plot_trajectory;

/// Time axis for the time-series charts: the exact sample span,
/// padded only when every sample shares one timestamp.
pub(crate) fn time_axis_range(session: &SessionAnalysis) -> Option<(f64, f64)> {
    let (start, end) = session.time_range()?;
    if end > start {
        Some((start, end))
    } else {
        Some(calculate_range(start, end))
    }
}

/// Value axis anchored at zero for quantities that are never negative.
pub(crate) fn non_negative_value_range<I: IntoIterator<Item = f64>>(values: I) -> (f64, f64) {
    let max_val = values.into_iter().fold(0.0_f64, f64::max);
    let (_, padded_max) = calculate_range(0.0, max_val);
    (0.0, padded_max)
}

// src/plot_functions/mod.rs
