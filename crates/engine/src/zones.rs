//! Zone membership evaluation.
//!
//! Stateless: results depend only on the point and the zone snapshot, so the
//! same call can serve both the live decision gate and retroactive replay
//! analysis and must agree between the two.

use geo::Point;
use tracing::debug;

use crate::events::GameEvent;
use crate::identifiers::{PlayerIdentifier, ZoneIdentifier};
use crate::models::types::{Zone, ZoneKind};
use crate::spatial::queries::haversine_distance;

/// The zone a point matched, with the distance to its center
#[derive(Clone, Debug, PartialEq)]
pub struct ZoneMatch {
    pub zone_id: ZoneIdentifier,
    pub distance_meters: f64,
}

/// Classify a point against the zones of one kind.
///
/// Membership is union semantics: the point is inside if any zone of the kind
/// contains it (inclusive boundary). When several overlap, the nearest center
/// is reported as "the" match for display. Empty zone set yields `None`.
pub fn classify(point: Point, zones: &[Zone], kind: ZoneKind) -> Option<ZoneMatch> {
    zones
        .iter()
        .filter(|z| z.kind == kind)
        .filter_map(|z| {
            let d = haversine_distance(point, z.center);
            (d <= z.radius_meters).then(|| ZoneMatch {
                zone_id: z.id.clone(),
                distance_meters: d,
            })
        })
        .min_by(|a, b| a.distance_meters.total_cmp(&b.distance_meters))
}

/// Membership boolean for callers that only gate on it
pub fn is_inside(point: Point, zones: &[Zone], kind: ZoneKind) -> bool {
    classify(point, zones, kind).is_some()
}

/// Derive an enter/leave event from two successive classifications.
///
/// Moving between two overlapping zones of the same kind is not a transition;
/// the subject never left the union.
pub fn transition(
    subject: &PlayerIdentifier,
    kind: ZoneKind,
    before: Option<&ZoneMatch>,
    after: Option<&ZoneMatch>,
) -> Option<GameEvent> {
    match (before, after) {
        (None, Some(m)) => {
            debug!(subject = %subject, zone = %m.zone_id, kind = kind.as_str(), "zone entered");
            Some(GameEvent::ZoneEntered {
                subject_id: subject.clone(),
                zone_id: m.zone_id.clone(),
                kind,
            })
        }
        (Some(m), None) => {
            debug!(subject = %subject, zone = %m.zone_id, kind = kind.as_str(), "zone exited");
            Some(GameEvent::ZoneExited {
                subject_id: subject.clone(),
                zone_id: m.zone_id.clone(),
                kind,
            })
        }
        _ => None,
    }
}
