//! Location history statistics aggregator.
//!
//! Recomputes [`PlayerStats`] from scratch on every call. The sequence is
//! small (one game session of fixes), so the pure recomputation is the
//! intended usage pattern; there is no incremental state to invalidate when
//! the caller re-queries after a fresh fix.

use crate::models::types::{LocationEntry, PlayerStats};
use crate::spatial::queries::haversine_distance;

/// Derive running statistics from a timestamp-ascending history sequence.
///
/// Returns `None` for an empty sequence: "no data yet" is distinct from
/// "zero distance traveled".
///
/// Average and max speed consider only entries that carry a device-reported
/// speed; the instantaneous GPS speed is a better signal than distance over
/// the coarse history interval.
pub fn compute_stats(entries: &[LocationEntry]) -> Option<PlayerStats> {
    let first = entries.first()?;
    let last = entries.last()?;

    let total_distance_meters = entries
        .windows(2)
        .map(|pair| haversine_distance(pair[0].fix.location, pair[1].fix.location))
        .sum();

    let speeds: Vec<f64> = entries.iter().filter_map(|e| e.speed).collect();
    let average_speed = if speeds.is_empty() {
        0.0
    } else {
        speeds.iter().sum::<f64>() / speeds.len() as f64
    };
    let max_speed = speeds.iter().copied().fold(0.0, f64::max);

    Some(PlayerStats {
        total_distance_meters,
        average_speed,
        max_speed,
        duration_ms: (last.fix.timestamp - first.fix.timestamp).num_milliseconds(),
        last_fix: last.fix,
    })
}
