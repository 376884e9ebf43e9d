//! Domain Layer

pub mod entity;
pub mod repository;

// Re-exports
pub use entity::{Car, StockStatus};
pub use repository::CarRepository;
