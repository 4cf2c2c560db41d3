//! Test utilities
//!
//! Fixtures and manual mock implementations for unit testing.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
