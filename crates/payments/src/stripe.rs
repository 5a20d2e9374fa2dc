//! Stripe Checkout implementation of the provider seam.
//!
//! Talks to the Checkout Sessions REST API directly with form-encoded
//! requests; amounts are already in minor currency units domain-side, so
//! they pass through unconverted.

use async_trait::async_trait;

use picnic_core::{DomainError, DomainResult, OrderId};

use crate::config::PaymentsConfig;
use crate::provider::{CheckoutProvider, CheckoutSession, DisplayLine};

const API_BASE: &str = "https://api.stripe.com/v1";

pub struct StripeCheckout {
    http: reqwest::Client,
    config: PaymentsConfig,
}

impl StripeCheckout {
    pub fn new(config: PaymentsConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Build the form body for a session-create call.
    fn session_form(
        &self,
        order_id: OrderId,
        lines: &[DisplayLine],
        customer_email: Option<&str>,
    ) -> Vec<(String, String)> {
        let mut form: Vec<(String, String)> = vec![
            ("mode".into(), "payment".into()),
            ("payment_method_types[0]".into(), "card".into()),
            ("success_url".into(), self.config.success_url()),
            ("cancel_url".into(), self.config.cancel_url()),
            ("metadata[orderId]".into(), order_id.to_string()),
        ];

        if let Some(email) = customer_email {
            form.push(("customer_email".into(), email.to_string()));
        }

        for (i, line) in lines.iter().enumerate() {
            form.push((
                format!("line_items[{i}][price_data][currency]"),
                self.config.currency.clone(),
            ));
            form.push((
                format!("line_items[{i}][price_data][product_data][name]"),
                line.name.clone(),
            ));
            form.push((
                format!("line_items[{i}][price_data][unit_amount]"),
                line.unit_price_cents.to_string(),
            ));
            form.push((format!("line_items[{i}][quantity]"), line.quantity.to_string()));
        }

        form
    }

    async fn decode(&self, response: reqwest::Response) -> DomainResult<CheckoutSession> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::provider(format!(
                "checkout provider returned {status}: {body}"
            )));
        }

        response
            .json::<CheckoutSession>()
            .await
            .map_err(|e| DomainError::provider(format!("invalid session payload: {e}")))
    }
}

#[async_trait]
impl CheckoutProvider for StripeCheckout {
    async fn create_checkout_session(
        &self,
        order_id: OrderId,
        lines: &[DisplayLine],
        customer_email: Option<&str>,
    ) -> DomainResult<CheckoutSession> {
        let form = self.session_form(order_id, lines, customer_email);

        let response = self
            .http
            .post(format!("{API_BASE}/checkout/sessions"))
            .bearer_auth(&self.config.secret_key)
            .form(&form)
            .send()
            .await
            .map_err(|e| DomainError::provider(format!("session create failed: {e}")))?;

        let session = self.decode(response).await?;
        tracing::info!(order_id = %order_id, session_id = %session.id, "checkout session created");
        Ok(session)
    }

    async fn retrieve_session(&self, session_id: &str) -> DomainResult<CheckoutSession> {
        let response = self
            .http
            .get(format!("{API_BASE}/checkout/sessions/{session_id}"))
            .bearer_auth(&self.config.secret_key)
            .send()
            .await
            .map_err(|e| DomainError::provider(format!("session retrieve failed: {e}")))?;

        self.decode(response).await
    }
}
