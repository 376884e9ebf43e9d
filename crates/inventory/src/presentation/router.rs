//! Inventory Router
//!
//! All four routes are protected; the caller layers the session guard over
//! this router when assembling the application.

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::domain::repository::CarRepository;
use crate::presentation::handlers::{self, InventoryAppState};

/// Create the inventory router for any repository implementation.
pub fn inventory_router<R>(repo: Arc<R>) -> Router
where
    R: CarRepository + Clone + Send + Sync + 'static,
{
    let state = InventoryAppState { repo };

    Router::new()
        .route("/", get(handlers::list_cars::<R>))
        .route("/agregar", post(handlers::add_car::<R>))
        .route("/eliminar/{id}", post(handlers::remove_car::<R>))
        .route("/cambiar_stock/{id}", post(handlers::toggle_stock::<R>))
        .with_state(state)
}
