//! List Cars Use Case

use std::sync::Arc;

use crate::domain::entity::Car;
use crate::domain::repository::CarRepository;
use crate::error::InventoryResult;

/// List cars use case; side-effect-free
pub struct ListCarsUseCase<R>
where
    R: CarRepository,
{
    repo: Arc<R>,
}

impl<R> ListCarsUseCase<R>
where
    R: CarRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> InventoryResult<Vec<Car>> {
        self.repo.list_all().await
    }
}
