use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers::{orders, products};
use crate::infra::app_state::AppState;

/// Create all v1 API routes
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/products", get(products::list_products_handler))
        .route("/products/{id}", get(products::get_product_handler))
        .route("/orders", post(orders::create_order_handler))
}
