//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models representing core business concepts
//! - `geo`: Great-circle distance and the proximity filter built on it
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod geo;
pub mod ports;
