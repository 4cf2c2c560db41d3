//! Domain entities
//!
//! Pure domain models representing core business concepts.

pub mod coordinate;
pub mod spot;

pub use coordinate::Coordinate;
pub use spot::Spot;
