//! Toggle Stock Use Case

use std::sync::Arc;

use crate::domain::repository::CarRepository;
use crate::error::InventoryResult;

/// Toggle stock use case
pub struct ToggleStockUseCase<R>
where
    R: CarRepository,
{
    repo: Arc<R>,
}

impl<R> ToggleStockUseCase<R>
where
    R: CarRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Flip the stock flag; `NotFound` if the id is absent.
    pub async fn execute(&self, id: i64) -> InventoryResult<()> {
        self.repo.toggle_stock(id).await?;

        tracing::info!(car_id = id, "Stock status toggled");
        Ok(())
    }
}
