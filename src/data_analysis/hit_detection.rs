// src/data_analysis/hit_detection.rs

use serde::Serialize;

use crate::data_analysis::derivative::DerivedSample;
use crate::data_input::log_data::Goal;

/// A goal arrival: the sample where `dist_goal` first enters the goal zone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HitEvent {
    pub sample_index: usize, // Index into the session's derived samples.
    pub timestamp: f64,
    pub x: f64,
    pub z: f64,
    pub goal_id: Option<String>, // Nearest declared goal within the match radius.
}

/// Indices where a boolean series switches from false to true.
/// Index 0 counts when the series starts true.
pub fn rising_edges(flags: &[bool]) -> Vec<usize> {
    flags
        .iter()
        .enumerate()
        .filter(|&(i, &on)| on && (i == 0 || !flags[i - 1]))
        .map(|(i, _)| i)
        .collect()
}

/// Detects goal arrivals as rising edges of `dist_goal <= hit_zone_distance`.
/// Re-entering a zone later yields another hit; nothing is deduplicated by goal.
/// A sample whose goal distance was unreadable is outside every zone.
pub fn detect_hits(samples: &[DerivedSample], hit_zone_distance: f64) -> Vec<HitEvent> {
    let in_zone: Vec<bool> = samples
        .iter()
        .map(|d| !d.sample.dist_goal_missing && d.sample.dist_goal <= hit_zone_distance)
        .collect();

    rising_edges(&in_zone)
        .into_iter()
        .map(|i| {
            let sample = &samples[i].sample;
            HitEvent {
                sample_index: i,
                timestamp: sample.timestamp,
                x: sample.x,
                z: sample.z,
                goal_id: None,
            }
        })
        .collect()
}

/// Nearest goal to `(x, z)` in the x-z plane, if it lies strictly within `radius`.
/// Ties go to the goal declared first.
pub fn nearest_goal<'a>(x: f64, z: f64, goals: &'a [Goal], radius: f64) -> Option<&'a Goal> {
    let mut best: Option<(&Goal, f64)> = None;
    for goal in goals {
        let distance = ((goal.x - x).powi(2) + (goal.z - z).powi(2)).sqrt();
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((goal, distance)),
        }
    }
    best.filter(|&(_, distance)| distance < radius)
        .map(|(goal, _)| goal)
}

/// Fills in `goal_id` for every hit that has a declared goal within `radius`.
pub fn attribute_hits(hits: &mut [HitEvent], goals: &[Goal], radius: f64) {
    for hit in hits.iter_mut() {
        hit.goal_id = nearest_goal(hit.x, hit.z, goals, radius).map(|goal| goal.id.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_analysis::derivative::derive_samples;
    use crate::data_input::log_data::{EventKind, Sample};

    fn goal(id: &str, x: f64, z: f64) -> Goal {
        Goal {
            id: id.to_string(),
            x,
            z,
        }
    }

    #[test]
    fn test_rising_edges() {
        assert_eq!(rising_edges(&[]), Vec::<usize>::new());
        assert_eq!(rising_edges(&[true, true, false, true]), vec![0, 3]);
        assert_eq!(rising_edges(&[false, false, true, true, false, true]), vec![2, 5]);
        assert_eq!(rising_edges(&[false, false]), Vec::<usize>::new());
    }

    fn derived_with_goal_distances(distances: &[Option<f64>]) -> Vec<DerivedSample> {
        let samples = distances
            .iter()
            .enumerate()
            .map(|(i, d)| Sample {
                timestamp: i as f64,
                event: EventKind::Track,
                id: "p".to_string(),
                type_code: 0,
                dist_local: 0.0,
                dist_goal: d.unwrap_or(0.0),
                dist_goal_missing: d.is_none(),
                dist_bound: 1.0,
                x: 0.0,
                y: 0.0,
                z: 0.0,
            })
            .collect();
        derive_samples(samples, 5)
    }

    #[test]
    fn test_detect_hits_on_rising_edges() {
        let samples = derived_with_goal_distances(&[
            Some(5.0),
            Some(5.0),
            Some(0.0),
            Some(0.0),
            Some(5.0),
            Some(0.0),
        ]);
        let indices: Vec<usize> = detect_hits(&samples, 0.1)
            .iter()
            .map(|h| h.sample_index)
            .collect();
        assert_eq!(indices, vec![2, 5]);
    }

    #[test]
    fn test_missing_goal_distance_never_counts_as_arrival() {
        let samples =
            derived_with_goal_distances(&[Some(50.0), None, Some(50.0), None, Some(50.0)]);
        assert!(detect_hits(&samples, 0.1).is_empty());

        // A dropout inside the zone splits it into two visits.
        let samples = derived_with_goal_distances(&[Some(0.0), None, Some(0.0)]);
        let indices: Vec<usize> = detect_hits(&samples, 0.1)
            .iter()
            .map(|h| h.sample_index)
            .collect();
        assert_eq!(indices, vec![0, 2]);
    }

    #[test]
    fn test_nearest_goal_within_radius() {
        let goals = vec![goal("far", 20.0, 0.0), goal("near", 2.0, 0.0)];
        assert_eq!(nearest_goal(0.0, 0.0, &goals, 10.0).map(|g| g.id.as_str()), Some("near"));
        assert!(nearest_goal(0.0, 0.0, &goals, 2.0).is_none());
        assert!(nearest_goal(0.0, 0.0, &[], 10.0).is_none());
    }

    #[test]
    fn test_nearest_goal_tie_prefers_first_declared() {
        let goals = vec![goal("west", -1.0, 0.0), goal("east", 1.0, 0.0)];
        assert_eq!(nearest_goal(0.0, 0.0, &goals, 10.0).map(|g| g.id.as_str()), Some("west"));
    }

    #[test]
    fn test_attribute_hits_leaves_far_hits_unattributed() {
        let goals = vec![goal("g1", 0.0, 0.0)];
        let mut hits = vec![
            HitEvent { sample_index: 0, timestamp: 0.0, x: 1.0, z: 1.0, goal_id: None },
            HitEvent { sample_index: 4, timestamp: 4.0, x: 50.0, z: 0.0, goal_id: None },
        ];
        attribute_hits(&mut hits, &goals, 10.0);
        assert_eq!(hits[0].goal_id.as_deref(), Some("g1"));
        assert_eq!(hits[1].goal_id, None);
    }
}

// src/data_analysis/hit_detection.rs
