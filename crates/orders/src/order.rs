use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use picnic_core::{DomainError, DomainResult, ItemId, OrderId, UserId};

/// Order status lifecycle.
///
/// Happy path is pending → paid → completed; cancellation is reachable
/// from pending. No transition is defined away from paid, completed, or
/// cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Paid,
    Completed,
    Cancelled,
}

/// Snapshot line: item reference plus the name and unit price copied at
/// order-creation time. Later item edits do not flow back into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub item_id: ItemId,
    pub quantity: u32,
    /// Unit price in smallest currency unit (e.g., cents).
    pub unit_price_cents: u64,
    pub name: String,
}

impl OrderLine {
    /// Line amount, or `None` when price times quantity overflows u64.
    pub fn amount_cents(&self) -> Option<u64> {
        self.unit_price_cents.checked_mul(u64::from(self.quantity))
    }
}

/// Fields required to create an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    #[serde(default)]
    pub user_id: Option<UserId>,
    pub lines: Vec<OrderLine>,
    pub total_cents: u64,
    #[serde(default)]
    pub customer_email: Option<String>,
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    pub lines: Vec<OrderLine>,
    pub total_cents: u64,
    pub status: OrderStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkout_session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    /// Set once the per-line inventory decrement has run to completion.
    /// Distinct from `status` so the repair primitive can tell "paid but
    /// not yet decremented" from "paid and decremented".
    pub inventory_applied: bool,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Create a pending order from snapshot lines.
    ///
    /// The caller-supplied total must equal the sum over the lines;
    /// a mismatch is rejected rather than trusted.
    pub fn create(new: NewOrder, now: DateTime<Utc>) -> DomainResult<Self> {
        let derived = Self::derive_total(&new.lines)?;
        if derived != new.total_cents {
            return Err(DomainError::validation(format!(
                "order total mismatch: lines sum to {derived}, caller sent {}",
                new.total_cents
            )));
        }

        Ok(Self {
            id: OrderId::new(),
            user_id: new.user_id,
            lines: new.lines,
            total_cents: new.total_cents,
            status: OrderStatus::Pending,
            checkout_session_id: None,
            customer_email: new.customer_email,
            inventory_applied: false,
            created_at: now,
        })
    }

    /// Sum the line amounts; line and total overflow is rejected rather
    /// than wrapped, since the lines arrive from the client untrusted.
    pub fn derive_total(lines: &[OrderLine]) -> DomainResult<u64> {
        lines.iter().try_fold(0u64, |total, line| {
            line.amount_cents()
                .and_then(|amount| total.checked_add(amount))
                .ok_or_else(|| DomainError::validation("order total overflows"))
        })
    }

    pub fn is_paid(&self) -> bool {
        self.status == OrderStatus::Paid
    }
}
