use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

use redeemd_core::{Outcome, Product};

use crate::errors::{AppError, AppResult};
use crate::infra::app_state::AppState;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: String,
    pub quantity: i32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub coupon_code: String,
}

#[derive(Debug, Serialize)]
pub struct CreateOrderResponse {
    pub id: String,
    pub items: Vec<OrderItem>,
    pub products: Vec<Product>,
}

/// Place an order. The coupon-code field is validated on every order; an
/// absent field is the empty string and fails the length precondition.
pub async fn create_order_handler(
    State(state): State<AppState>,
    Json(body): Json<CreateOrderRequest>,
) -> AppResult<Json<CreateOrderResponse>> {
    validate_items(&body.items)?;

    match state.validator.validate(&body.coupon_code).await {
        Ok(Outcome::Valid) => {}
        Ok(Outcome::Invalid(reason)) => {
            info!(%reason, "rejecting order");
            return Err(AppError::unprocessable(reason.message()));
        }
        Err(err) => {
            error!(error = %err, "coupon validation failed");
            return Err(err.into());
        }
    }

    let products: Vec<Product> = state
        .catalog
        .all()
        .iter()
        .filter(|p| body.items.iter().any(|item| item.product_id == p.id))
        .cloned()
        .collect();

    let response = CreateOrderResponse {
        id: Uuid::new_v4().to_string(),
        items: body.items,
        products,
    };
    info!(order_id = %response.id, "order placed");

    Ok(Json(response))
}

fn validate_items(items: &[OrderItem]) -> Result<(), AppError> {
    if items.is_empty() {
        return Err(AppError::bad_request("order must contain at least one item"));
    }
    for item in items {
        if item.product_id.trim().is_empty() {
            return Err(AppError::bad_request("productId must not be blank"));
        }
        if item.quantity <= 0 {
            return Err(AppError::bad_request("quantity must be greater than zero"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(product_id: &str, quantity: i32) -> OrderItem {
        OrderItem {
            product_id: product_id.to_string(),
            quantity,
        }
    }

    #[test]
    fn rejects_empty_and_malformed_items() {
        assert!(validate_items(&[]).is_err());
        assert!(validate_items(&[item(" ", 1)]).is_err());
        assert!(validate_items(&[item("1", 0)]).is_err());
        assert!(validate_items(&[item("1", -2)]).is_err());
        assert!(validate_items(&[item("1", 2), item("4", 1)]).is_ok());
    }
}
