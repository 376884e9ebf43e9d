//! Inventory (Car Records) Module
//!
//! Clean Architecture structure:
//! - `domain/` - Car entity, stock status, repository trait
//! - `application/` - List/add/remove/toggle use cases
//! - `infra/` - SQLite repository implementation
//! - `presentation/` - HTTP handlers, views, router
//!
//! Every route in this crate is protected: the caller layers the session
//! guard from the `auth` crate over the router. All mutations answer with a
//! redirect back to the listing (redirect-after-post), carrying the outcome
//! as a one-shot flash message.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use domain::entity::{Car, StockStatus};
pub use error::{InventoryError, InventoryResult};
pub use infra::sqlite::SqliteCarRepository;
pub use presentation::router::inventory_router;
