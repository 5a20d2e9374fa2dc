use std::sync::Arc;

use axum::{
    extract::Extension, response::IntoResponse, routing::post, Json, Router,
};

use crate::app::{errors, services::AppServices};

pub fn router() -> Router {
    Router::new().route("/admin/seed", post(seed_items))
}

async fn seed_items(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.catalog.seed_demo_items().await {
        Ok(inserted) => Json(serde_json::json!({"inserted": inserted})).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
