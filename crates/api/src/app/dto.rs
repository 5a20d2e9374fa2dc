use serde::Deserialize;

use picnic_core::{SessionId, UserId};
use picnic_orders::{OrderLine, OrderStatus};
use picnic_payments::DisplayLine;

// -------------------------
// Cart
// -------------------------

/// Owner identifiers as sent by the client; exactly one is required,
/// the user id wins when both are present.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerParams {
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub session_id: Option<SessionId>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    #[serde(flatten)]
    pub owner: OwnerParams,
    pub item_id: String,
    pub quantity: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetCartQuantityRequest {
    #[serde(flatten)]
    pub owner: OwnerParams,
    pub item_id: String,
    pub quantity: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCartLineRequest {
    pub quantity: u32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepRequest {
    #[serde(default)]
    pub max_age_minutes: Option<i64>,
}

// -------------------------
// Orders
// -------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[serde(default)]
    pub user_id: Option<UserId>,
    pub items: Vec<OrderLine>,
    pub total_cents: u64,
    #[serde(default)]
    pub customer_email: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
    #[serde(default)]
    pub checkout_session_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessPaymentRequest {
    pub checkout_session_id: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersQuery {
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub status: Option<OrderStatus>,
}

// -------------------------
// Checkout
// -------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCheckoutSessionRequest {
    pub order_id: String,
    pub items: Vec<DisplayLine>,
    #[serde(default)]
    pub customer_email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_to_cart_request_accepts_either_owner_key() {
        let body = r#"{"sessionId":"s1","itemId":"00000000-0000-0000-0000-000000000000","quantity":2}"#;
        let req: AddToCartRequest = serde_json::from_str(body).unwrap();
        assert!(req.owner.user_id.is_none());
        assert_eq!(req.owner.session_id, Some(SessionId::from("s1")));
        assert_eq!(req.quantity, 2);
    }

    #[test]
    fn order_status_deserializes_lowercase() {
        let req: UpdateOrderStatusRequest =
            serde_json::from_str(r#"{"status":"cancelled"}"#).unwrap();
        assert_eq!(req.status, OrderStatus::Cancelled);
    }
}
