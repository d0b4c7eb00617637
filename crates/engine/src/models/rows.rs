//! Strict typed boundary over the backend's loosely-typed rows.
//!
//! The realtime backend hands us JSON rows; each external entity has exactly
//! one mapping here, validated with `TryFrom`, so the evaluators never see
//! untyped data.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::identifiers::*;
use crate::models::types::*;

/// One row of the `locations` table
#[derive(Clone, Debug, Deserialize)]
pub struct LocationRow {
    pub id: String,
    pub player_id: String,
    pub game_id: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub accuracy: Option<f64>,
    pub speed: Option<f64>,
    pub heading: Option<f64>,
    pub recorded_at: DateTime<Utc>,
}

impl TryFrom<LocationRow> for LocationEntry {
    type Error = EngineError;

    fn try_from(row: LocationRow) -> Result<Self> {
        let mut fix = GeoFix::new(row.latitude, row.longitude, row.recorded_at)?;

        if let Some(acc) = row.accuracy {
            fix = fix.with_accuracy(acc)?;
        }
        if let Some(speed) = row.speed {
            if !speed.is_finite() || speed < 0.0 {
                return Err(EngineError::InvalidData(format!(
                    "Speed must be non-negative, got {speed}"
                )));
            }
        }
        if let Some(heading) = row.heading {
            if !heading.is_finite() || !(0.0..360.0).contains(&heading) {
                return Err(EngineError::InvalidData(format!(
                    "Heading must be in [0, 360), got {heading}"
                )));
            }
        }

        Ok(LocationEntry {
            id: EntryIdentifier::new(row.id),
            subject_id: PlayerIdentifier::new(row.player_id),
            game_id: row.game_id.map(GameIdentifier::new),
            fix,
            speed: row.speed,
            heading: row.heading,
        })
    }
}

/// One row of the `zones` table
#[derive(Clone, Debug, Deserialize)]
pub struct ZoneRow {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub center_latitude: f64,
    pub center_longitude: f64,
    pub radius_meters: f64,
}

impl TryFrom<ZoneRow> for Zone {
    type Error = EngineError;

    fn try_from(row: ZoneRow) -> Result<Self> {
        let kind = ZoneKind::parse(&row.kind)
            .ok_or_else(|| EngineError::InvalidData(format!("Unknown zone kind: {}", row.kind)))?;
        Zone::new(
            ZoneIdentifier::new(row.id),
            row.name,
            kind,
            row.center_latitude,
            row.center_longitude,
            row.radius_meters,
        )
    }
}

/// One row of the `missions` table
#[derive(Clone, Debug, Deserialize)]
pub struct MissionRow {
    pub id: String,
    pub kind: String,
    pub target_latitude: Option<f64>,
    pub target_longitude: Option<f64>,
    pub radius_meters: Option<f64>,
    #[serde(default)]
    pub completed_by: Vec<String>,
}

impl TryFrom<MissionRow> for Mission {
    type Error = EngineError;

    fn try_from(row: MissionRow) -> Result<Self> {
        let kind = MissionKind::parse(&row.kind).ok_or_else(|| {
            EngineError::InvalidData(format!("Unknown mission kind: {}", row.kind))
        })?;

        let target = match (row.target_latitude, row.target_longitude) {
            (Some(lat), Some(lng)) => Some((lat, lng)),
            (None, None) => None,
            _ => {
                return Err(EngineError::InvalidData(format!(
                    "Mission {} has a partial target coordinate",
                    row.id
                )))
            }
        };

        let mut mission = Mission::new(
            MissionIdentifier::new(row.id),
            kind,
            target,
            row.radius_meters,
        )?;
        mission.completed_by = row.completed_by.into_iter().map(PlayerIdentifier::new).collect();
        Ok(mission)
    }
}
