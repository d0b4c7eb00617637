//! Mission completion evaluation.
//!
//! Each (mission, subject) pair moves Pending -> Completed exactly once;
//! completion is terminal. Re-entering or leaving the target area after
//! completion never re-fires and never removes the subject from
//! `completed_by`.

use geo::Point;
use tracing::info;

use crate::identifiers::{MissionIdentifier, PlayerIdentifier};
use crate::models::types::Mission;
use crate::spatial::queries::haversine_distance;

fn satisfies(subject: &PlayerIdentifier, location: Point, mission: &Mission) -> bool {
    if !mission.kind.is_spatial() || mission.completed_by.contains(subject) {
        return false;
    }
    // Rescue/common and half-configured spatial missions are only ever
    // completed by explicit external action
    match (mission.target, mission.radius_meters) {
        (Some(target), Some(radius)) => haversine_distance(location, target) <= radius,
        _ => false,
    }
}

/// Missions newly satisfied by the subject at this location.
///
/// Pure query; the caller records the result. Already-completed missions are
/// excluded, so repeated evaluation against a recorded snapshot is idempotent.
pub fn evaluate(
    subject: &PlayerIdentifier,
    location: Point,
    missions: &[Mission],
) -> Vec<MissionIdentifier> {
    missions
        .iter()
        .filter(|m| satisfies(subject, location, m))
        .map(|m| m.id.clone())
        .collect()
}

/// Evaluate and record completions into `completed_by` in one step.
///
/// Guarded by membership, not time: calling this on every fix while the
/// subject sits inside the radius emits each completion exactly once.
pub fn evaluate_and_record(
    subject: &PlayerIdentifier,
    location: Point,
    missions: &mut [Mission],
) -> Vec<MissionIdentifier> {
    let mut completed = Vec::new();
    for mission in missions.iter_mut() {
        if satisfies(subject, location, mission) {
            mission.completed_by.insert(subject.clone());
            info!(mission = %mission.id, subject = %subject, "mission completed");
            completed.push(mission.id.clone());
        }
    }
    completed
}
