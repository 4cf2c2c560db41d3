//! Repository port traits
//!
//! The spot collection is owned by an adapter and handed out read-only.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entities::Spot;
use crate::error::DomainError;

/// Read-only source of spots
#[async_trait]
pub trait SpotRepository: Send + Sync {
    /// The full collection, in its canonical order
    async fn all(&self) -> Result<Arc<[Spot]>, DomainError>;

    /// Number of spots in the collection
    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.all().await?.len())
    }
}
