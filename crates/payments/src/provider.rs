use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use picnic_core::{DomainError, DomainResult, OrderId};

/// A line item as shown on the provider's hosted checkout page.
///
/// Display-only: re-derived by the client for presentation, not
/// re-validated against the order snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayLine {
    pub name: String,
    pub quantity: u32,
    /// Unit price in smallest currency unit (e.g., cents).
    pub unit_price_cents: u64,
}

/// A hosted checkout session as returned by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
    /// Redirect URL for the customer; absent once the session completes.
    pub url: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub payment_status: Option<String>,
    #[serde(default)]
    pub amount_total: Option<i64>,
    #[serde(default)]
    pub customer_email: Option<String>,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

/// Seam to the external hosted-checkout provider.
#[async_trait]
pub trait CheckoutProvider: Send + Sync {
    /// Create a hosted checkout session for the given order. The order id
    /// travels in the session metadata; success and cancel URLs point back
    /// at the storefront.
    async fn create_checkout_session(
        &self,
        order_id: OrderId,
        lines: &[DisplayLine],
        customer_email: Option<&str>,
    ) -> DomainResult<CheckoutSession>;

    /// Retrieve an existing session for inspection (confirmation page).
    async fn retrieve_session(&self, session_id: &str) -> DomainResult<CheckoutSession>;
}

/// Stand-in provider used when no credentials are present in the
/// environment: every call fails with a configuration error, matching
/// the "no fallback" policy for an unconfigured bridge.
#[derive(Debug, Default)]
pub struct UnconfiguredCheckout;

#[async_trait]
impl CheckoutProvider for UnconfiguredCheckout {
    async fn create_checkout_session(
        &self,
        _order_id: OrderId,
        _lines: &[DisplayLine],
        _customer_email: Option<&str>,
    ) -> DomainResult<CheckoutSession> {
        Err(DomainError::configuration("checkout provider is not configured"))
    }

    async fn retrieve_session(&self, _session_id: &str) -> DomainResult<CheckoutSession> {
        Err(DomainError::configuration("checkout provider is not configured"))
    }
}
