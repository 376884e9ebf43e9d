//! Add Car Use Case
//!
//! Validates the required fields before any write; a rejected input leaves
//! the store untouched.

use std::sync::Arc;

use crate::domain::entity::Car;
use crate::domain::repository::CarRepository;
use crate::error::{InventoryError, InventoryResult};

/// Add car input
pub struct AddCarInput {
    pub brand: String,
    pub origin: String,
}

/// Add car use case
pub struct AddCarUseCase<R>
where
    R: CarRepository,
{
    repo: Arc<R>,
}

impl<R> AddCarUseCase<R>
where
    R: CarRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Create a record from `brand` and `origin`, in stock by default.
    pub async fn execute(&self, input: AddCarInput) -> InventoryResult<Car> {
        let brand = input.brand.trim();
        let origin = input.origin.trim();

        if brand.is_empty() || origin.is_empty() {
            return Err(InventoryError::Validation(
                "brand and origin are required".to_string(),
            ));
        }

        let car = self.repo.create(brand, origin).await?;

        tracing::info!(car_id = car.id, brand = %car.brand, "Car record added");

        Ok(car)
    }
}
