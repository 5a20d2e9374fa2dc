use axum::Router;

pub mod admin;
pub mod carts;
pub mod checkout;
pub mod menu;
pub mod orders;
pub mod settings;
pub mod system;

pub fn router() -> Router {
    Router::new()
        .merge(menu::router())
        .merge(carts::router())
        .merge(orders::router())
        .merge(checkout::router())
        .merge(settings::router())
        .merge(admin::router())
}
