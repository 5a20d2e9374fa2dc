use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use picnic_settings::{SettingsPatch, StoreSettings};

use crate::app::{errors, services::AppServices};

pub fn router() -> Router {
    Router::new().route(
        "/settings",
        get(get_settings).post(create_settings).patch(update_settings),
    )
}

async fn get_settings(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.settings.get_settings().await {
        Ok(settings) => Json(settings).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

async fn create_settings(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<StoreSettings>,
) -> axum::response::Response {
    match services.settings.create_settings(body).await {
        Ok(settings) => (StatusCode::CREATED, Json(settings)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

async fn update_settings(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<SettingsPatch>,
) -> axum::response::Response {
    match services.settings.update_settings(body).await {
        Ok(settings) => Json(settings).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
