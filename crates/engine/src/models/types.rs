//! Core data types and enums for game geometry evaluation.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use geo::Point;

use crate::identifiers::*;

// ============================================================================
// Coordinate validation
// ============================================================================

/// Build a `geo::Point` from latitude/longitude degrees, rejecting
/// out-of-range or non-finite values.
///
/// Follows the geo convention: x = longitude, y = latitude.
pub fn geo_point(lat: f64, lng: f64) -> Result<Point> {
    if !lat.is_finite() || !lng.is_finite() || !(-90.0..=90.0).contains(&lat)
        || !(-180.0..=180.0).contains(&lng)
    {
        return Err(EngineError::InvalidCoordinate { lat, lng });
    }
    Ok(Point::new(lng, lat))
}

// ============================================================================
// Enums
// ============================================================================

/// Kind of a circular game zone
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZoneKind {
    Safe,
    Restricted,
}

impl ZoneKind {
    /// Parse the backend's row value (`"safe"` / `"restricted"`)
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "safe" => Some(Self::Safe),
            "restricted" => Some(Self::Restricted),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Restricted => "restricted",
        }
    }
}

/// Kind of a mission objective
///
/// `Area` and `Escape` are spatial and evaluated against location; `Rescue`
/// and `Common` complete only through an explicit external action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MissionKind {
    Area,
    Escape,
    Rescue,
    Common,
}

impl MissionKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "area" => Some(Self::Area),
            "escape" => Some(Self::Escape),
            "rescue" => Some(Self::Rescue),
            "common" => Some(Self::Common),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Area => "area",
            Self::Escape => "escape",
            Self::Rescue => "rescue",
            Self::Common => "common",
        }
    }

    /// Whether completion is derived from geometry rather than external action
    pub fn is_spatial(&self) -> bool {
        matches!(self, Self::Area | Self::Escape)
    }
}

// ============================================================================
// Data Structures
// ============================================================================

/// A single timestamped GPS reading
///
/// Immutable once recorded. Coordinates are validated at construction;
/// everything downstream can assume they are in range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoFix {
    pub location: Point,
    pub accuracy: Option<f64>,
    pub timestamp: DateTime<Utc>,
}

impl GeoFix {
    pub fn new(lat: f64, lng: f64, timestamp: DateTime<Utc>) -> Result<Self> {
        Ok(Self {
            location: geo_point(lat, lng)?,
            accuracy: None,
            timestamp,
        })
    }

    pub fn with_accuracy(mut self, accuracy_m: f64) -> Result<Self> {
        if !accuracy_m.is_finite() || accuracy_m < 0.0 {
            return Err(EngineError::InvalidAccuracy(accuracy_m));
        }
        self.accuracy = Some(accuracy_m);
        Ok(self)
    }

    pub fn lat(&self) -> f64 {
        self.location.y()
    }

    pub fn lng(&self) -> f64 {
        self.location.x()
    }
}

/// One row of a player's location history
///
/// Owned by the append-only history store; the engine only reads ordered
/// sequences of these and never mutates them. `speed` and `heading` are the
/// device-reported instantaneous values, present only when the device
/// supplied them.
#[derive(Clone, Debug, PartialEq)]
pub struct LocationEntry {
    pub id: EntryIdentifier,
    pub subject_id: PlayerIdentifier,
    pub game_id: Option<GameIdentifier>,
    pub fix: GeoFix,
    pub speed: Option<f64>,
    pub heading: Option<f64>,
}

/// A circular geographic region tagged safe or restricted
///
/// Static per game session; the engine treats the zone set as a read-only
/// snapshot per evaluation call.
#[derive(Clone, Debug)]
pub struct Zone {
    pub id: ZoneIdentifier,
    pub name: String,
    pub kind: ZoneKind,
    pub center: Point,
    pub radius_meters: f64,
}

impl Zone {
    pub fn new(
        id: ZoneIdentifier,
        name: impl Into<String>,
        kind: ZoneKind,
        lat: f64,
        lng: f64,
        radius_meters: f64,
    ) -> Result<Self> {
        if !radius_meters.is_finite() || radius_meters <= 0.0 {
            return Err(EngineError::InvalidRadius(radius_meters));
        }
        Ok(Self {
            id,
            name: name.into(),
            kind,
            center: geo_point(lat, lng)?,
            radius_meters,
        })
    }
}

/// A spatial or action-based objective with a completion condition
///
/// `completed_by` is monotone: subjects are only ever added, never removed.
#[derive(Clone, Debug)]
pub struct Mission {
    pub id: MissionIdentifier,
    pub kind: MissionKind,
    pub target: Option<Point>,
    pub radius_meters: Option<f64>,
    pub completed_by: HashSet<PlayerIdentifier>,
}

impl Mission {
    pub fn new(
        id: MissionIdentifier,
        kind: MissionKind,
        target: Option<(f64, f64)>,
        radius_meters: Option<f64>,
    ) -> Result<Self> {
        if let Some(r) = radius_meters {
            if !r.is_finite() || r <= 0.0 {
                return Err(EngineError::InvalidRadius(r));
            }
        }
        let target = match target {
            Some((lat, lng)) => Some(geo_point(lat, lng)?),
            None => None,
        };
        Ok(Self {
            id,
            kind,
            target,
            radius_meters,
            completed_by: HashSet::new(),
        })
    }
}

/// Statistics derived on demand from a location-history sequence
///
/// A pure function of the input entries; never stored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerStats {
    pub total_distance_meters: f64,
    pub average_speed: f64,
    pub max_speed: f64,
    pub duration_ms: i64,
    pub last_fix: GeoFix,
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Coordinate out of range: lat {lat}, lng {lng}")]
    InvalidCoordinate { lat: f64, lng: f64 },

    #[error("Radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    #[error("Accuracy must be non-negative and finite, got {0}")]
    InvalidAccuracy(f64),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
