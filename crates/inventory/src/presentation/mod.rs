//! Presentation Layer

pub mod dto;
pub mod handlers;
pub mod router;
pub mod views;

pub use handlers::InventoryAppState;
pub use router::inventory_router;
