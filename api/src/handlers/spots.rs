//! Spot handlers
//!
//! Proximity search over the loaded spots.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::app::AreaQuery;
use crate::domain::entities::Spot;
use crate::error::{AppError, ParseError};
use crate::AppState;

/// Raw query string for GET /spots
///
/// Kept as strings so missing, empty and malformed values can be told apart.
#[derive(Debug, Default, Deserialize)]
pub struct SpotsQuery {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    /// Search radius in meters
    pub radius: Option<String>,
}

/// A spot as returned to clients
#[derive(Debug, Serialize)]
pub struct SpotResponse {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<Spot> for SpotResponse {
    fn from(spot: Spot) -> Self {
        Self {
            name: spot.name,
            latitude: spot.coordinate.latitude,
            longitude: spot.coordinate.longitude,
        }
    }
}

/// Parse a float query parameter
///
/// Surrounding whitespace is rejected, as is anything `f64::from_str` refuses.
pub fn parse_f64(value: Option<&str>) -> Result<f64, ParseError> {
    let value = value.ok_or(ParseError::Missing)?;
    if value.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(value.parse::<f64>()?)
}

fn parse_param(name: &str, value: Option<&str>) -> Result<f64, AppError> {
    parse_f64(value).map_err(|e| AppError::BadRequest(format!("Invalid {}: {}", name, e)))
}

impl SpotsQuery {
    /// Parse and validate into an [`AreaQuery`]
    pub fn to_area_query(&self) -> Result<AreaQuery, AppError> {
        let latitude = parse_param("latitude", self.latitude.as_deref())?;
        let longitude = parse_param("longitude", self.longitude.as_deref())?;
        let radius = parse_param("radius", self.radius.as_deref())?;

        Ok(AreaQuery::new(latitude, longitude, radius)?)
    }
}

/// GET /spots?latitude=..&longitude=..&radius=..
///
/// Spots within `radius` meters of the given point, in dataset order.
pub async fn list_spots_in_area(
    State(state): State<AppState>,
    Query(params): Query<SpotsQuery>,
) -> Result<Json<Vec<SpotResponse>>, AppError> {
    let query = params.to_area_query()?;

    let spots = state.spot_service.find_in_area(&query).await?;

    Ok(Json(spots.into_iter().map(SpotResponse::from).collect()))
}
