use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, patch, post},
    Json, Router,
};

use picnic_cart::OwnerKey;
use picnic_core::{CartId, ItemId, SessionId};

use crate::app::{dto, errors, services::AppServices};

pub fn router() -> Router {
    Router::new()
        .route("/cart", get(get_cart))
        .route("/cart/items", post(add_to_cart).patch(set_item_quantity))
        .route("/cart/session/:session_id", delete(clear_cart_for_session))
        .route("/carts/sweep", post(sweep_abandoned))
        .route("/carts/:id", delete(clear_cart))
        .route(
            "/carts/:id/items/:item_id",
            patch(update_cart_line).delete(remove_cart_line),
        )
}

fn resolve_owner(params: dto::OwnerParams) -> Result<OwnerKey, axum::response::Response> {
    OwnerKey::resolve(params.user_id, params.session_id).ok_or_else(|| {
        errors::json_error(
            StatusCode::BAD_REQUEST,
            "missing_owner",
            "userId or sessionId is required",
        )
    })
}

fn parse_ids(
    cart_id: &str,
    item_id: &str,
) -> Result<(CartId, ItemId), axum::response::Response> {
    let cart_id: CartId = cart_id.parse().map_err(errors::domain_error_to_response)?;
    let item_id: ItemId = item_id.parse().map_err(errors::domain_error_to_response)?;
    Ok((cart_id, item_id))
}

async fn get_cart(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<dto::OwnerParams>,
) -> axum::response::Response {
    let owner = match resolve_owner(params) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.carts.get_cart(&owner).await {
        Ok(cart) => Json(cart).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

async fn add_to_cart(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::AddToCartRequest>,
) -> axum::response::Response {
    let owner = match resolve_owner(body.owner) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let item_id: ItemId = match body.item_id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.carts.add_to_cart(&owner, item_id, body.quantity).await {
        Ok(cart) => Json(cart).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

async fn set_item_quantity(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::SetCartQuantityRequest>,
) -> axum::response::Response {
    let owner = match resolve_owner(body.owner) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let item_id: ItemId = match body.item_id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services
        .carts
        .update_cart_item_quantity(&owner, item_id, body.quantity)
        .await
    {
        Ok(cart) => Json(cart).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

async fn update_cart_line(
    Extension(services): Extension<Arc<AppServices>>,
    Path((cart_id, item_id)): Path<(String, String)>,
    Json(body): Json<dto::UpdateCartLineRequest>,
) -> axum::response::Response {
    let (cart_id, item_id) = match parse_ids(&cart_id, &item_id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.carts.update_cart_item(cart_id, item_id, body.quantity).await {
        Ok(cart) => Json(cart).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

async fn remove_cart_line(
    Extension(services): Extension<Arc<AppServices>>,
    Path((cart_id, item_id)): Path<(String, String)>,
) -> axum::response::Response {
    let (cart_id, item_id) = match parse_ids(&cart_id, &item_id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.carts.remove_from_cart(cart_id, item_id).await {
        Ok(cart) => Json(cart).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

async fn clear_cart(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let cart_id: CartId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.carts.clear_cart(cart_id).await {
        Ok(cart) => Json(cart).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// Best-effort beacon target: absence of a cart is still a 200.
async fn clear_cart_for_session(
    Extension(services): Extension<Arc<AppServices>>,
    Path(session_id): Path<String>,
) -> axum::response::Response {
    let session_id = SessionId::from(session_id);

    match services.carts.clear_cart_for_session(&session_id).await {
        Ok(deleted) => Json(serde_json::json!({"deleted": deleted})).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

async fn sweep_abandoned(
    Extension(services): Extension<Arc<AppServices>>,
    body: Option<Json<dto::SweepRequest>>,
) -> axum::response::Response {
    let max_age = body
        .and_then(|Json(b)| b.max_age_minutes)
        .unwrap_or(picnic_infra::DEFAULT_MAX_AGE_MINUTES);

    match services.carts.clear_abandoned_carts(max_age).await {
        Ok(report) => Json(report).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
