use std::sync::Arc;

use picnic_infra::{CartService, CatalogService, MemoryStore, OrderService, SettingsService};
use picnic_payments::{CheckoutProvider, PaymentsConfig, StripeCheckout, UnconfiguredCheckout};

/// Wired application services shared by all request handlers.
pub struct AppServices {
    pub catalog: CatalogService,
    pub carts: CartService,
    pub orders: OrderService,
    pub settings: SettingsService,
    pub checkout: Arc<dyn CheckoutProvider>,
}

/// Build services over the in-memory store and whatever checkout
/// provider the environment configures.
pub fn build_services() -> AppServices {
    let store = Arc::new(MemoryStore::new());

    let checkout: Arc<dyn CheckoutProvider> = match PaymentsConfig::from_env() {
        Ok(config) => Arc::new(StripeCheckout::new(config)),
        Err(e) => {
            tracing::warn!("checkout disabled: {e}");
            Arc::new(UnconfiguredCheckout)
        }
    };

    AppServices {
        catalog: CatalogService::new(store.clone()),
        carts: CartService::new(store.clone()),
        orders: OrderService::new(store.clone(), store.clone()),
        settings: SettingsService::new(store),
        checkout,
    }
}
