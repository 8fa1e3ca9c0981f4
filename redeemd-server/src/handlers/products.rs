use axum::{
    extract::{Path, State},
    response::Json,
};
use tracing::debug;

use redeemd_core::Product;

use crate::errors::{AppError, AppResult};
use crate::infra::app_state::AppState;

pub async fn list_products_handler(State(state): State<AppState>) -> Json<Vec<Product>> {
    debug!("listing products");
    Json(state.catalog.all().to_vec())
}

pub async fn get_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Product>> {
    state
        .catalog
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::not_found("product not found"))
}
