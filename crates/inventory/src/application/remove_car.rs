//! Remove Car Use Case

use std::sync::Arc;

use crate::domain::repository::CarRepository;
use crate::error::InventoryResult;

/// Remove car use case
pub struct RemoveCarUseCase<R>
where
    R: CarRepository,
{
    repo: Arc<R>,
}

impl<R> RemoveCarUseCase<R>
where
    R: CarRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Delete the record; `NotFound` if the id is absent.
    ///
    /// Repeating the call after success reports `NotFound` rather than
    /// failing harder, so callers can treat removal as idempotent.
    pub async fn execute(&self, id: i64) -> InventoryResult<()> {
        self.repo.delete(id).await?;

        tracing::info!(car_id = id, "Car record removed");
        Ok(())
    }
}
