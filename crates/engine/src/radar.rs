//! Proximity queries over player positions.
//!
//! One radius primitive backs the chaser radar, capture-candidate lookup, and
//! nearby-safe-zone style queries; filtering by role or status is layered on
//! top by the caller.

use geo::Point;
use rstar::RTree;

use crate::identifiers::PlayerIdentifier;
use crate::models::types::{EngineError, GeoFix, Result};
use crate::spatial::index::CandidateNode;
use crate::spatial::queries::{haversine_distance, meters_to_degrees_approx};

/// A player position offered to a proximity query.
///
/// A candidate without a fix (location never reported, or sharing disabled)
/// is skipped, not an error.
#[derive(Clone, Debug)]
pub struct Candidate {
    pub id: PlayerIdentifier,
    pub fix: Option<GeoFix>,
}

/// A candidate found in range
#[derive(Clone, Debug, PartialEq)]
pub struct Contact {
    pub id: PlayerIdentifier,
    pub distance_meters: f64,
}

fn check_radius(radius_m: f64) -> Result<()> {
    if !radius_m.is_finite() || radius_m <= 0.0 {
        return Err(EngineError::InvalidRadius(radius_m));
    }
    Ok(())
}

fn sort_contacts(contacts: &mut [Contact]) {
    // Stable output for identical input: distance, then identifier
    contacts.sort_by(|a, b| {
        a.distance_meters
            .total_cmp(&b.distance_meters)
            .then_with(|| a.id.as_str().cmp(b.id.as_str()))
    });
}

/// Find all candidates within `radius_m` of `origin` (inclusive boundary).
///
/// The boundary is inclusive on purpose: a candidate exactly at the radius
/// counts as in range, which matters for capture adjudication fairness.
pub fn within_radius(
    origin: Point,
    candidates: &[Candidate],
    radius_m: f64,
) -> Result<Vec<Contact>> {
    check_radius(radius_m)?;

    let mut contacts: Vec<Contact> = candidates
        .iter()
        .filter_map(|c| {
            let fix = c.fix.as_ref()?;
            let d = haversine_distance(origin, fix.location);
            (d <= radius_m).then(|| Contact {
                id: c.id.clone(),
                distance_meters: d,
            })
        })
        .collect();

    sort_contacts(&mut contacts);
    Ok(contacts)
}

/// R-tree index over a candidate snapshot, for repeated queries against the
/// same positions (e.g. evaluating every chaser's radar in one pass).
///
/// Agrees exactly with [`within_radius`] on the same input.
pub struct CandidateIndex {
    tree: RTree<CandidateNode>,
}

impl CandidateIndex {
    pub fn build(candidates: &[Candidate]) -> Self {
        let nodes = candidates
            .iter()
            .filter_map(|c| {
                let fix = c.fix.as_ref()?;
                Some(CandidateNode::new(c.id.clone(), fix.location))
            })
            .collect();
        Self {
            tree: RTree::bulk_load(nodes),
        }
    }

    pub fn within_radius(&self, origin: Point, radius_m: f64) -> Result<Vec<Contact>> {
        check_radius(radius_m)?;

        // Envelope in degree space, widened for meridian convergence; the
        // haversine pass below makes the final call.
        let lat_cos = origin.y().to_radians().cos().abs().max(0.01);
        let envelope_deg = meters_to_degrees_approx(radius_m) / lat_cos;

        // Degree-space envelopes cannot wrap longitude +/-180, so an origin
        // near the antimeridian needs a second query from the wrapped side.
        let mut centers = vec![origin.x()];
        if origin.x() + envelope_deg > 180.0 {
            centers.push(origin.x() - 360.0);
        }
        if origin.x() - envelope_deg < -180.0 {
            centers.push(origin.x() + 360.0);
        }

        let mut contacts: Vec<Contact> = Vec::new();
        for center_lng in centers {
            contacts.extend(
                self.tree
                    .locate_within_distance([center_lng, origin.y()], envelope_deg * envelope_deg)
                    .filter_map(|node| {
                        let d = haversine_distance(origin, node.location());
                        (d <= radius_m).then(|| Contact {
                            id: node.id.clone(),
                            distance_meters: d,
                        })
                    }),
            );
        }

        sort_contacts(&mut contacts);
        // The two envelopes only overlap for near-global radii; duplicate
        // hits are identical and adjacent after sorting
        contacts.dedup();
        Ok(contacts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::types::geo_point;
    use chrono::DateTime;

    fn fix(lat: f64, lng: f64) -> GeoFix {
        let ts = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        GeoFix::new(lat, lng, ts).unwrap()
    }

    fn candidate(id: &str, fix: Option<GeoFix>) -> Candidate {
        Candidate {
            id: PlayerIdentifier::new(id),
            fix,
        }
    }

    fn ids(contacts: &[Contact]) -> Vec<&str> {
        contacts.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_within_radius_filters_and_sorts() {
        let origin = geo_point(35.0, 139.0).unwrap();
        let candidates = [
            candidate("far", Some(fix(35.0, 139.01))),    // ~912 m
            candidate("near", Some(fix(35.0, 139.0005))), // ~46 m
            candidate("mid", Some(fix(35.0, 139.002))),   // ~182 m
        ];

        let contacts = within_radius(origin, &candidates, 500.0).unwrap();
        assert_eq!(ids(&contacts), vec!["near", "mid"]);
    }

    #[test]
    fn test_candidates_without_fix_are_skipped() {
        let origin = geo_point(35.0, 139.0).unwrap();
        let candidates = [
            candidate("hidden", None),
            candidate("seen", Some(fix(35.0, 139.0))),
        ];

        let contacts = within_radius(origin, &candidates, 100.0).unwrap();
        assert_eq!(ids(&contacts), vec!["seen"]);
    }

    #[test]
    fn test_inclusive_boundary() {
        let origin = geo_point(35.0, 139.0).unwrap();
        let at = fix(35.0, 139.001);
        let exact = haversine_distance(origin, at.location);

        let contacts =
            within_radius(origin, &[candidate("edge", Some(at))], exact).unwrap();
        assert_eq!(ids(&contacts), vec!["edge"]);
    }

    #[test]
    fn test_invalid_radius_rejected() {
        let origin = geo_point(35.0, 139.0).unwrap();
        assert!(matches!(
            within_radius(origin, &[], 0.0),
            Err(EngineError::InvalidRadius(_))
        ));
        assert!(within_radius(origin, &[], -10.0).is_err());
        assert!(within_radius(origin, &[], f64::NAN).is_err());
    }

    #[test]
    fn test_monotone_in_radius() {
        let origin = geo_point(35.0, 139.0).unwrap();
        let candidates: Vec<Candidate> = (0..10)
            .map(|i| candidate(&format!("p{i}"), Some(fix(35.0, 139.0 + i as f64 * 0.001))))
            .collect();

        let small = within_radius(origin, &candidates, 200.0).unwrap();
        let large = within_radius(origin, &candidates, 600.0).unwrap();

        for contact in &small {
            assert!(large.iter().any(|c| c.id == contact.id));
        }
        assert!(large.len() >= small.len());
    }

    #[test]
    fn test_index_agrees_with_linear_scan() {
        let origin = geo_point(55.75, 37.62).unwrap(); // high latitude on purpose
        let candidates: Vec<Candidate> = (0..25)
            .map(|i| {
                candidate(
                    &format!("p{i}"),
                    Some(fix(55.75 + (i as f64 - 12.0) * 0.0004, 37.62 + i as f64 * 0.0007)),
                )
            })
            .chain(std::iter::once(candidate("hidden", None)))
            .collect();

        let index = CandidateIndex::build(&candidates);
        for radius in [50.0, 300.0, 1500.0, 10_000.0] {
            let linear = within_radius(origin, &candidates, radius).unwrap();
            let indexed = index.within_radius(origin, radius).unwrap();
            assert_eq!(linear, indexed, "radius {radius}");
        }
    }

    #[test]
    fn test_index_agrees_across_antimeridian() {
        // ~222 m apart, on opposite sides of longitude 180
        let origin = geo_point(0.0, 179.999).unwrap();
        let candidates = [
            candidate("across", Some(fix(0.0, -179.999))),
            candidate("near", Some(fix(0.0, 179.9985))),
            candidate("far", Some(fix(0.0, 179.0))),
        ];

        let index = CandidateIndex::build(&candidates);
        let linear = within_radius(origin, &candidates, 300.0).unwrap();
        let indexed = index.within_radius(origin, 300.0).unwrap();

        assert_eq!(linear, indexed);
        assert!(indexed.iter().any(|c| c.id.as_str() == "across"));

        // Same seam, approached from the west
        let origin = geo_point(0.0, -179.999).unwrap();
        let candidates = [candidate("across", Some(fix(0.0, 179.999)))];
        let index = CandidateIndex::build(&candidates);
        assert_eq!(
            within_radius(origin, &candidates, 300.0).unwrap(),
            index.within_radius(origin, 300.0).unwrap()
        );
        assert_eq!(index.within_radius(origin, 300.0).unwrap().len(), 1);
    }

    #[test]
    fn test_empty_candidates() {
        let origin = geo_point(35.0, 139.0).unwrap();
        assert!(within_radius(origin, &[], 100.0).unwrap().is_empty());
        let index = CandidateIndex::build(&[]);
        assert!(index.within_radius(origin, 100.0).unwrap().is_empty());
    }
}
