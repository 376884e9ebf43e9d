//! HTTP Handlers
//!
//! Every mutating handler follows redirect-after-post: the response is a
//! redirect back to the listing carrying the outcome as a flash message, so
//! a client-side refresh cannot repeat the mutation.

use axum::Form;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, header};
use axum::response::{AppendHeaders, Html, IntoResponse, Redirect, Response};
use std::sync::Arc;

use platform::flash::Flash;

use crate::application::{
    AddCarInput, AddCarUseCase, ListCarsUseCase, RemoveCarUseCase, ToggleStockUseCase,
};
use crate::domain::repository::CarRepository;
use crate::error::InventoryError;
use crate::presentation::dto::AddCarForm;
use crate::presentation::views;

/// Shared state for inventory handlers
#[derive(Clone)]
pub struct InventoryAppState<R>
where
    R: CarRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// GET /
pub async fn list_cars<R>(
    State(state): State<InventoryAppState<R>>,
    headers: HeaderMap,
) -> Response
where
    R: CarRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListCarsUseCase::new(state.repo.clone());

    let cars = match use_case.execute().await {
        Ok(cars) => cars,
        Err(e) => return e.into_response(),
    };

    let flash = Flash::from_headers(&headers);
    let html = Html(views::listing_page(&cars, flash.as_ref()));

    match flash {
        Some(_) => (
            AppendHeaders([(header::SET_COOKIE, Flash::clear_cookie())]),
            html,
        )
            .into_response(),
        None => html.into_response(),
    }
}

/// POST /agregar
pub async fn add_car<R>(
    State(state): State<InventoryAppState<R>>,
    Form(form): Form<AddCarForm>,
) -> Response
where
    R: CarRepository + Clone + Send + Sync + 'static,
{
    let use_case = AddCarUseCase::new(state.repo.clone());

    let input = AddCarInput {
        brand: form.marca,
        origin: form.origen,
    };

    let flash = match use_case.execute(input).await {
        Ok(_) => Flash::success("Carro agregado con éxito."),
        Err(InventoryError::Validation(_)) => Flash::danger("Todos los campos son obligatorios."),
        Err(e) => return e.into_response(),
    };

    redirect_to_listing(flash)
}

/// POST /eliminar/{id}
pub async fn remove_car<R>(
    State(state): State<InventoryAppState<R>>,
    Path(id): Path<i64>,
) -> Response
where
    R: CarRepository + Clone + Send + Sync + 'static,
{
    let use_case = RemoveCarUseCase::new(state.repo.clone());

    let flash = match use_case.execute(id).await {
        Ok(()) => Flash::success("Carro eliminado con éxito."),
        Err(InventoryError::NotFound) => Flash::danger("No se encontró el carro."),
        Err(e) => return e.into_response(),
    };

    redirect_to_listing(flash)
}

/// POST /cambiar_stock/{id}
pub async fn toggle_stock<R>(
    State(state): State<InventoryAppState<R>>,
    Path(id): Path<i64>,
) -> Response
where
    R: CarRepository + Clone + Send + Sync + 'static,
{
    let use_case = ToggleStockUseCase::new(state.repo.clone());

    let flash = match use_case.execute(id).await {
        Ok(()) => Flash::info("Estado de stock actualizado."),
        Err(InventoryError::NotFound) => Flash::danger("No se encontró el carro."),
        Err(e) => return e.into_response(),
    };

    redirect_to_listing(flash)
}

fn redirect_to_listing(flash: Flash) -> Response {
    (
        AppendHeaders([(header::SET_COOKIE, flash.set_cookie())]),
        Redirect::to("/"),
    )
        .into_response()
}
