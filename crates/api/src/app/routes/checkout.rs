use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use picnic_core::OrderId;

use crate::app::{dto, errors, services::AppServices};

pub fn router() -> Router {
    Router::new()
        .route("/checkout/sessions", post(create_session))
        .route("/checkout/sessions/:id", get(get_session))
}

async fn create_session(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateCheckoutSessionRequest>,
) -> axum::response::Response {
    let order_id: OrderId = match body.order_id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services
        .checkout
        .create_checkout_session(order_id, &body.items, body.customer_email.as_deref())
        .await
    {
        Ok(session) => (StatusCode::CREATED, Json(session)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

async fn get_session(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match services.checkout.retrieve_session(&id).await {
        Ok(session) => Json(session).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
