//! Geodesic math primitives and spatial indexing.

pub mod index;
pub mod queries;

pub use queries::{ground_speed, haversine_distance, initial_bearing};
