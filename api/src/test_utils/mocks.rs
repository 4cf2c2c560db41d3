//! Mock implementations of port traits

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entities::Spot;
use crate::domain::ports::SpotRepository;
use crate::error::DomainError;

/// Repository whose every call fails with a data source error
pub struct FailingSpotRepository;

#[async_trait]
impl SpotRepository for FailingSpotRepository {
    async fn all(&self) -> Result<Arc<[Spot]>, DomainError> {
        Err(DomainError::DataSource("spot store unavailable".to_string()))
    }
}
