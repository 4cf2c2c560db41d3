//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod spot_service;

pub use spot_service::{AreaQuery, SpotService};
