//! R-tree nodes for spatial indexing of radar candidates.
//!
//! ## Two-Stage Filtering
//!
//! Queries over the index use a two-stage filtering approach:
//! 1. **R-tree filter**: an over-approximated degree-space envelope for fast
//!    candidate selection
//! 2. **Haversine filter**: accurate geodesic distance on the filtered results
//!
//! Euclidean distance in degree space is increasingly inaccurate away from the
//! equator, so the envelope is widened by the local meridian convergence and
//! the haversine pass makes the final call.

use geo::Point;
use rstar::{PointDistance, RTreeObject, AABB};

use crate::identifiers::PlayerIdentifier;

#[derive(Clone)]
pub struct CandidateNode {
    pub id: PlayerIdentifier,
    point: [f64; 2],
}

impl CandidateNode {
    pub fn new(id: PlayerIdentifier, location: Point) -> Self {
        Self {
            id,
            point: [location.x(), location.y()],
        }
    }

    pub fn location(&self) -> Point {
        Point::new(self.point[0], self.point[1])
    }
}

impl RTreeObject for CandidateNode {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for CandidateNode {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}
