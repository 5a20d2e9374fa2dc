use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use picnic_core::{CartId, ItemId, SessionId, UserId};

use crate::owner::OwnerKey;

/// One line of a cart: an item reference and a quantity.
///
/// A line never persists with quantity zero; mutations that would produce
/// one remove the line instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub item_id: ItemId,
    pub quantity: u32,
}

/// A draft cart: at most one per owner key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub id: CartId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<SessionId>,
    pub lines: Vec<CartLine>,
    pub updated_at: DateTime<Utc>,
}

impl Cart {
    /// Create an empty cart for the given owner.
    pub fn create(owner: &OwnerKey, now: DateTime<Utc>) -> Self {
        Self {
            id: CartId::new(),
            user_id: owner.user_id().cloned(),
            session_id: owner.session_id().cloned(),
            lines: Vec::new(),
            updated_at: now,
        }
    }

    /// Add `quantity` of an item: merges into an existing line for the
    /// same item, otherwise appends a new line.
    pub fn add_line(&mut self, item_id: ItemId, quantity: u32, now: DateTime<Utc>) {
        match self.lines.iter_mut().find(|l| l.item_id == item_id) {
            Some(line) => line.quantity += quantity,
            None => self.lines.push(CartLine { item_id, quantity }),
        }
        self.updated_at = now;
    }

    /// Set the quantity of the matching line, then drop any line whose
    /// quantity reached zero. Returns whether a line matched.
    pub fn set_line_quantity(&mut self, item_id: ItemId, quantity: u32, now: DateTime<Utc>) -> bool {
        let mut matched = false;
        for line in &mut self.lines {
            if line.item_id == item_id {
                line.quantity = quantity;
                matched = true;
            }
        }
        self.lines.retain(|l| l.quantity > 0);
        self.updated_at = now;
        matched
    }

    /// Remove the line for the given item, if present.
    pub fn remove_line(&mut self, item_id: ItemId, now: DateTime<Utc>) {
        self.lines.retain(|l| l.item_id != item_id);
        self.updated_at = now;
    }

    /// Empty the cart, keeping the record.
    pub fn clear(&mut self, now: DateTime<Utc>) {
        self.lines.clear();
        self.updated_at = now;
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether this cart was last touched before the given cutoff
    /// (sweeper eligibility).
    pub fn is_stale(&self, cutoff: DateTime<Utc>) -> bool {
        self.updated_at < cutoff
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn owner() -> OwnerKey {
        OwnerKey::Session(SessionId::from("sess_test"))
    }

    #[test]
    fn adding_the_same_item_twice_merges_into_one_line() {
        let now = Utc::now();
        let item = ItemId::new();
        let mut cart = Cart::create(&owner(), now);

        cart.add_line(item, 2, now);
        cart.add_line(item, 3, now);

        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.lines[0].quantity, 5);
    }

    #[test]
    fn adding_a_different_item_appends_a_line() {
        let now = Utc::now();
        let mut cart = Cart::create(&owner(), now);

        cart.add_line(ItemId::new(), 1, now);
        cart.add_line(ItemId::new(), 1, now);

        assert_eq!(cart.lines.len(), 2);
    }

    #[test]
    fn setting_quantity_to_zero_removes_the_line() {
        let now = Utc::now();
        let item = ItemId::new();
        let mut cart = Cart::create(&owner(), now);
        cart.add_line(item, 4, now);

        let matched = cart.set_line_quantity(item, 0, now);

        assert!(matched);
        assert!(cart.is_empty());
    }

    #[test]
    fn setting_quantity_of_an_unknown_item_changes_nothing() {
        let now = Utc::now();
        let mut cart = Cart::create(&owner(), now);
        cart.add_line(ItemId::new(), 2, now);

        let matched = cart.set_line_quantity(ItemId::new(), 7, now);

        assert!(!matched);
        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.lines[0].quantity, 2);
    }

    #[test]
    fn mutations_touch_the_timestamp() {
        let created = Utc::now() - Duration::minutes(5);
        let item = ItemId::new();
        let mut cart = Cart::create(&owner(), created);

        let now = Utc::now();
        cart.add_line(item, 1, now);

        assert_eq!(cart.updated_at, now);
    }

    #[test]
    fn staleness_is_strictly_before_the_cutoff() {
        let now = Utc::now();
        let cart = Cart::create(&owner(), now - Duration::minutes(90));
        let fresh = Cart::create(&owner(), now - Duration::minutes(10));
        let cutoff = now - Duration::minutes(60);

        assert!(cart.is_stale(cutoff));
        assert!(!fresh.is_stale(cutoff));
    }
}
