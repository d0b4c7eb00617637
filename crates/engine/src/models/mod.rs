//! Core data models, types, and the typed row boundary.

pub mod rows;
pub mod types;

// Re-exports for convenience
pub use rows::{LocationRow, MissionRow, ZoneRow};
pub use types::{
    geo_point, EngineError, GeoFix, LocationEntry, Mission, MissionKind, PlayerStats, Result,
    Zone, ZoneKind,
};
