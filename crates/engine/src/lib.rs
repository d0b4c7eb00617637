//! # manhunt-engine
//!
//! Geospatial core for a location-based multiplayer tag game: turns a stream
//! of noisy GPS fixes into discrete game events.
//!
//! ## Features
//!
//! - **Geo math**: haversine distance, initial bearing, ground speed
//! - **History stats**: cumulative distance, speed aggregates, duration
//! - **Zone membership**: safe/restricted circular zones with nearest-match
//!   reporting and enter/leave transitions
//! - **Radar**: radius queries over player positions, linear or R-tree backed
//! - **Missions**: one-shot spatial completion (area/escape)
//! - **Replay**: deterministic seekable playback cursor
//!
//! Every evaluator is a pure function over explicit snapshots; the
//! surrounding app wires live data to them and re-invokes on change
//! notifications. There is no hidden state and no transport here.
//!
//! ## Example
//!
//! ```
//! use manhunt_engine::prelude::*;
//! use manhunt_engine::{radar, zones};
//! use chrono::DateTime;
//!
//! let zone = Zone::new(
//!     ZoneIdentifier::new("plaza"),
//!     "Central Plaza",
//!     ZoneKind::Safe,
//!     35.0, 139.0, // lat, lng
//!     100.0,       // radius in meters
//! ).unwrap();
//!
//! // ~82 m east of the zone center
//! let point = geo_point(35.0, 139.00089).unwrap();
//! assert!(zones::is_inside(point, &[zone], ZoneKind::Safe));
//!
//! // Chaser radar: who is within 500 m?
//! let ts = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
//! let runners = vec![Candidate {
//!     id: PlayerIdentifier::new("runner_1"),
//!     fix: Some(GeoFix::new(35.0, 139.002, ts).unwrap()),
//! }];
//! let contacts = radar::within_radius(point, &runners, 500.0).unwrap();
//! assert_eq!(contacts.len(), 1);
//! ```

pub mod events;
pub mod identifiers;
pub mod missions;
pub mod models;
pub mod radar;
pub mod replay;
pub mod spatial;
pub mod stats;
pub mod store;
pub mod zones;

// Re-exports for convenience
pub mod prelude {
    pub use crate::events::GameEvent;
    pub use crate::identifiers::*;
    pub use crate::models::{
        geo_point, EngineError, GeoFix, LocationEntry, Mission, MissionKind, PlayerStats,
        Result, Zone, ZoneKind,
    };
    pub use crate::radar::{Candidate, CandidateIndex, Contact};
    pub use crate::replay::ReplayCursor;
    pub use crate::stats::compute_stats;
    pub use crate::store::{HistoryStore, MemoryHistoryStore};
    pub use crate::zones::ZoneMatch;
}
