//! Repository Trait
//!
//! Interface for car record persistence. Implementation is in the infra
//! layer. Every mutation is durable on return: a completed call is visible
//! to any subsequent read.

use crate::domain::entity::Car;
use crate::error::InventoryResult;

/// Car repository trait
#[trait_variant::make(CarRepository: Send)]
pub trait LocalCarRepository {
    /// List all records ordered by id
    async fn list_all(&self) -> InventoryResult<Vec<Car>>;

    /// Insert a new record, in stock by default
    ///
    /// Field presence is validated by the use case before this is called;
    /// the schema enforces non-emptiness as a backstop.
    async fn create(&self, brand: &str, origin: &str) -> InventoryResult<Car>;

    /// Delete a record; `NotFound` if the id is absent
    async fn delete(&self, id: i64) -> InventoryResult<()>;

    /// Flip the stock flag in one atomic statement; `NotFound` if absent
    async fn toggle_stock(&self, id: i64) -> InventoryResult<()>;
}
