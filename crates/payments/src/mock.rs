//! In-memory checkout provider for tests and local development.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;

use picnic_core::{DomainError, DomainResult, OrderId};

use crate::provider::{CheckoutProvider, CheckoutSession, DisplayLine};

/// Records created sessions and serves them back by id.
#[derive(Debug, Default)]
pub struct MockCheckout {
    sessions: Mutex<HashMap<String, CheckoutSession>>,
    counter: AtomicU64,
}

impl MockCheckout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session_count(&self) -> usize {
        self.sessions.lock().map(|s| s.len()).unwrap_or(0)
    }
}

#[async_trait]
impl CheckoutProvider for MockCheckout {
    async fn create_checkout_session(
        &self,
        order_id: OrderId,
        lines: &[DisplayLine],
        customer_email: Option<&str>,
    ) -> DomainResult<CheckoutSession> {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        let id = format!("cs_test_{n}");

        let amount_total: i64 = lines
            .iter()
            .map(|l| (l.unit_price_cents * u64::from(l.quantity)) as i64)
            .sum();

        let mut metadata = HashMap::new();
        metadata.insert("orderId".to_string(), order_id.to_string());

        let session = CheckoutSession {
            id: id.clone(),
            url: Some(format!("https://checkout.example/pay/{id}")),
            status: Some("open".to_string()),
            payment_status: Some("unpaid".to_string()),
            amount_total: Some(amount_total),
            customer_email: customer_email.map(str::to_string),
            metadata,
        };

        self.sessions
            .lock()
            .map_err(|_| DomainError::provider("mock lock poisoned"))?
            .insert(id, session.clone());

        Ok(session)
    }

    async fn retrieve_session(&self, session_id: &str) -> DomainResult<CheckoutSession> {
        self.sessions
            .lock()
            .map_err(|_| DomainError::provider("mock lock poisoned"))?
            .get(session_id)
            .cloned()
            .ok_or_else(|| DomainError::provider(format!("no such session: {session_id}")))
    }
}
