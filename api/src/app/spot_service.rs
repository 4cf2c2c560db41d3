//! Spot service
//!
//! Answers "which spots are near here" queries against the spot repository.

use std::sync::Arc;

use crate::domain::entities::{Coordinate, Spot};
use crate::domain::geo::{DistanceCalculator, Haversine, ProximityFilter};
use crate::domain::ports::SpotRepository;
use crate::error::{AppError, DomainError};

/// A validated area search: a center and a non-negative radius in meters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaQuery {
    center: Coordinate,
    radius_m: f64,
}

impl AreaQuery {
    /// Build a query, rejecting out-of-range coordinates and negative or
    /// non-finite radii.
    pub fn new(latitude: f64, longitude: f64, radius_m: f64) -> Result<Self, DomainError> {
        let center = Coordinate::new(latitude, longitude);
        center.validate()?;

        if !radius_m.is_finite() {
            return Err(DomainError::Validation(format!(
                "radius must be a finite number of meters, got {}",
                radius_m
            )));
        }
        if radius_m < 0.0 {
            return Err(DomainError::Validation(format!(
                "radius must be >= 0, got {}",
                radius_m
            )));
        }

        Ok(Self { center, radius_m })
    }

    pub fn center(&self) -> Coordinate {
        self.center
    }

    pub fn radius_m(&self) -> f64 {
        self.radius_m
    }
}

/// Service for proximity queries over spots
pub struct SpotService<SR, D = Haversine>
where
    SR: SpotRepository,
    D: DistanceCalculator,
{
    spots: Arc<SR>,
    filter: ProximityFilter<D>,
}

impl<SR> SpotService<SR>
where
    SR: SpotRepository,
{
    pub fn new(spots: Arc<SR>) -> Self {
        Self {
            spots,
            filter: ProximityFilter::haversine(),
        }
    }
}

impl<SR, D> SpotService<SR, D>
where
    SR: SpotRepository,
    D: DistanceCalculator,
{
    pub fn with_calculator(spots: Arc<SR>, calculator: D) -> Self {
        Self {
            spots,
            filter: ProximityFilter::new(calculator),
        }
    }

    /// Spots within the query radius, in dataset order
    pub async fn find_in_area(&self, query: &AreaQuery) -> Result<Vec<Spot>, AppError> {
        let spots = self.spots.all().await?;
        let matches: Vec<Spot> = self
            .filter
            .filter(&query.center, query.radius_m, &spots)
            .into_iter()
            .cloned()
            .collect();

        tracing::debug!(
            center = %query.center,
            radius_m = query.radius_m,
            scanned = spots.len(),
            matched = matches.len(),
            "Area query"
        );

        Ok(matches)
    }

    /// Number of spots available to queries
    pub async fn spot_count(&self) -> Result<usize, AppError> {
        Ok(self.spots.count().await?)
    }
}
