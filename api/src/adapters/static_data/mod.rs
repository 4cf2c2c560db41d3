//! Static spot data
//!
//! An immutable in-memory spot collection, seeded with the reference spots
//! or loaded from a JSON file at startup.

mod spot_repo;

pub use spot_repo::StaticSpotRepository;
