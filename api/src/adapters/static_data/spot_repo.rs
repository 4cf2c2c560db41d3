use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entities::Spot;
use crate::domain::ports::SpotRepository;
use crate::error::DomainError;

/// Immutable spot collection shared between requests
#[derive(Debug, Clone)]
pub struct StaticSpotRepository {
    spots: Arc<[Spot]>,
}

impl StaticSpotRepository {
    /// Wrap a collection after checking every record
    pub fn new(spots: Vec<Spot>) -> Result<Self, DomainError> {
        for (index, spot) in spots.iter().enumerate() {
            if spot.name.trim().is_empty() {
                return Err(DomainError::Validation(format!(
                    "spot #{} has an empty name",
                    index
                )));
            }
            spot.coordinate.validate().map_err(|e| match e {
                DomainError::Validation(msg) => {
                    DomainError::Validation(format!("spot #{} ({}): {}", index, spot.name, msg))
                }
                other => other,
            })?;
        }
        Ok(Self {
            spots: spots.into(),
        })
    }

    /// The three San Francisco reference spots
    pub fn with_reference_spots() -> Self {
        Self {
            spots: vec![
                Spot::new("Spot 1", 37.7749, -122.4194),
                Spot::new("Spot 2", 37.7833, -122.4167),
                Spot::new("Spot 3", 37.7936, -122.3987),
            ]
            .into(),
        }
    }

    /// Load a JSON array of `{name, latitude, longitude}` objects
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            DomainError::DataSource(format!("failed to read {}: {}", path.display(), e))
        })?;
        let spots: Vec<Spot> = serde_json::from_str(&raw).map_err(|e| {
            DomainError::DataSource(format!("failed to parse {}: {}", path.display(), e))
        })?;
        tracing::debug!(path = %path.display(), count = spots.len(), "Loaded spots file");
        Self::new(spots)
    }

    pub fn len(&self) -> usize {
        self.spots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }
}

#[async_trait]
impl SpotRepository for StaticSpotRepository {
    async fn all(&self) -> Result<Arc<[Spot]>, DomainError> {
        Ok(Arc::clone(&self.spots))
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.spots.len())
    }
}
