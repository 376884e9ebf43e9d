//! Application Layer
//!
//! One use case per inventory operation.

pub mod add_car;
pub mod list_cars;
pub mod remove_car;
pub mod toggle_stock;

// Re-exports
pub use add_car::{AddCarInput, AddCarUseCase};
pub use list_cars::ListCarsUseCase;
pub use remove_car::RemoveCarUseCase;
pub use toggle_stock::ToggleStockUseCase;
