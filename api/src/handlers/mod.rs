//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod health;
pub mod spots;

pub use health::health;
pub use spots::list_spots_in_area;
