use std::sync::Arc;

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use picnic_cart::{Cart, OwnerKey};
use picnic_core::{CartId, DomainError, DomainResult, ItemId, SessionId};

use crate::store::CartStore;

/// Default idle threshold for the abandoned-cart sweep.
pub const DEFAULT_MAX_AGE_MINUTES: i64 = 60;

/// Result of one abandoned-cart sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepReport {
    pub deleted: usize,
}

/// Cart operations: one draft cart per owner key.
#[derive(Clone)]
pub struct CartService {
    carts: Arc<dyn CartStore>,
}

impl CartService {
    pub fn new(carts: Arc<dyn CartStore>) -> Self {
        Self { carts }
    }

    /// The cart for this owner, if any.
    pub async fn get_cart(&self, owner: &OwnerKey) -> DomainResult<Option<Cart>> {
        self.carts.find_by_owner(owner).await
    }

    /// Add `quantity` of an item to the owner's cart, creating the cart
    /// lazily on first add and merging quantities for a repeated item.
    ///
    /// No inventory ceiling is enforced here; overselling is resolved at
    /// payment-confirmation time by the clamp.
    pub async fn add_to_cart(
        &self,
        owner: &OwnerKey,
        item_id: ItemId,
        quantity: u32,
    ) -> DomainResult<Cart> {
        if quantity == 0 {
            return Err(DomainError::validation("quantity must be at least 1"));
        }

        let now = Utc::now();
        match self.carts.find_by_owner(owner).await? {
            Some(mut cart) => {
                cart.add_line(item_id, quantity, now);
                self.carts.save(cart.clone()).await?;
                Ok(cart)
            }
            None => {
                let mut cart = Cart::create(owner, now);
                cart.add_line(item_id, quantity, now);
                self.carts.insert(cart.clone()).await?;
                tracing::debug!(cart_id = %cart.id, "cart created on first add");
                Ok(cart)
            }
        }
    }

    /// Cart-id-keyed quantity update (admin-style flows). Zero-quantity
    /// lines are removed rather than retained.
    pub async fn update_cart_item(
        &self,
        cart_id: CartId,
        item_id: ItemId,
        quantity: u32,
    ) -> DomainResult<Cart> {
        let mut cart = self.carts.get(cart_id).await?.ok_or(DomainError::NotFound)?;
        cart.set_line_quantity(item_id, quantity, Utc::now());
        self.carts.save(cart.clone()).await?;
        Ok(cart)
    }

    /// Owner-keyed quantity update (the live storefront path). Returns
    /// `None` when the owner has no cart.
    pub async fn update_cart_item_quantity(
        &self,
        owner: &OwnerKey,
        item_id: ItemId,
        quantity: u32,
    ) -> DomainResult<Option<Cart>> {
        let Some(mut cart) = self.carts.find_by_owner(owner).await? else {
            return Ok(None);
        };
        cart.set_line_quantity(item_id, quantity, Utc::now());
        self.carts.save(cart.clone()).await?;
        Ok(Some(cart))
    }

    /// Remove one line from the cart.
    pub async fn remove_from_cart(&self, cart_id: CartId, item_id: ItemId) -> DomainResult<Cart> {
        let mut cart = self.carts.get(cart_id).await?.ok_or(DomainError::NotFound)?;
        cart.remove_line(item_id, Utc::now());
        self.carts.save(cart.clone()).await?;
        Ok(cart)
    }

    /// Empty the cart, keeping the record.
    pub async fn clear_cart(&self, cart_id: CartId) -> DomainResult<Cart> {
        let mut cart = self.carts.get(cart_id).await?.ok_or(DomainError::NotFound)?;
        cart.clear(Utc::now());
        self.carts.save(cart.clone()).await?;
        Ok(cart)
    }

    /// Delete the session's cart outright. Best-effort target for the
    /// client-exit beacon; absence is not an error.
    pub async fn clear_cart_for_session(&self, session_id: &SessionId) -> DomainResult<bool> {
        let owner = OwnerKey::Session(session_id.clone());
        match self.carts.find_by_owner(&owner).await? {
            Some(cart) => self.carts.delete(cart.id).await,
            None => Ok(false),
        }
    }

    /// Delete every cart idle for longer than `max_age_minutes`.
    ///
    /// Deletion targets the specific ids fetched by the scan; a cart
    /// touched between scan and delete can still be swept, an accepted
    /// narrow race.
    pub async fn clear_abandoned_carts(&self, max_age_minutes: i64) -> DomainResult<SweepReport> {
        let cutoff = Utc::now() - Duration::minutes(max_age_minutes);
        let mut deleted = 0;

        for cart in self.carts.list_all().await? {
            if cart.is_stale(cutoff) && self.carts.delete(cart.id).await? {
                deleted += 1;
            }
        }

        if deleted > 0 {
            tracing::debug!(deleted, max_age_minutes, "abandoned carts swept");
        }
        Ok(SweepReport { deleted })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use picnic_core::UserId;

    use crate::store::MemoryStore;

    fn service() -> (CartService, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (CartService::new(store.clone()), store)
    }

    fn session_owner(key: &str) -> OwnerKey {
        OwnerKey::Session(SessionId::from(key))
    }

    #[tokio::test]
    async fn add_merges_quantities_for_the_same_item() {
        let (service, _) = service();
        let owner = session_owner("s1");
        let item = ItemId::new();

        service.add_to_cart(&owner, item, 2).await.unwrap();
        let cart = service.add_to_cart(&owner, item, 3).await.unwrap();

        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.lines[0].quantity, 5);
    }

    #[tokio::test]
    async fn add_with_zero_quantity_is_rejected() {
        let (service, _) = service();
        let err = service
            .add_to_cart(&session_owner("s1"), ItemId::new(), 0)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn one_cart_per_owner_key() {
        let (service, _) = service();
        let user_owner = OwnerKey::User(UserId::from("user_1"));
        let anon_owner = session_owner("s1");

        service.add_to_cart(&user_owner, ItemId::new(), 1).await.unwrap();
        service.add_to_cart(&user_owner, ItemId::new(), 1).await.unwrap();
        service.add_to_cart(&anon_owner, ItemId::new(), 1).await.unwrap();

        let user_cart = service.get_cart(&user_owner).await.unwrap().unwrap();
        let anon_cart = service.get_cart(&anon_owner).await.unwrap().unwrap();
        assert_eq!(user_cart.lines.len(), 2);
        assert_eq!(anon_cart.lines.len(), 1);
        assert_ne!(user_cart.id, anon_cart.id);
    }

    #[tokio::test]
    async fn zero_quantity_update_removes_the_line() {
        let (service, _) = service();
        let owner = session_owner("s1");
        let item = ItemId::new();
        service.add_to_cart(&owner, item, 4).await.unwrap();

        let cart = service
            .update_cart_item_quantity(&owner, item, 0)
            .await
            .unwrap()
            .unwrap();
        assert!(cart.is_empty());

        let reread = service.get_cart(&owner).await.unwrap().unwrap();
        assert!(reread.is_empty());
    }

    #[tokio::test]
    async fn owner_keyed_update_without_a_cart_returns_none() {
        let (service, _) = service();
        let result = service
            .update_cart_item_quantity(&session_owner("nobody"), ItemId::new(), 2)
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn cart_id_keyed_update_on_a_missing_cart_is_not_found() {
        let (service, _) = service();
        let err = service
            .update_cart_item(CartId::new(), ItemId::new(), 2)
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::NotFound);
    }

    #[tokio::test]
    async fn clear_empties_but_keeps_the_record() {
        let (service, _) = service();
        let owner = session_owner("s1");
        let cart = service.add_to_cart(&owner, ItemId::new(), 2).await.unwrap();

        let cleared = service.clear_cart(cart.id).await.unwrap();
        assert!(cleared.is_empty());
        assert!(service.get_cart(&owner).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn session_clear_deletes_the_record_and_tolerates_absence() {
        let (service, _) = service();
        let session = SessionId::from("s1");
        service
            .add_to_cart(&OwnerKey::Session(session.clone()), ItemId::new(), 1)
            .await
            .unwrap();

        assert!(service.clear_cart_for_session(&session).await.unwrap());
        assert!(!service.clear_cart_for_session(&session).await.unwrap());
        assert!(service
            .get_cart(&OwnerKey::Session(session))
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn sweep_deletes_only_carts_older_than_the_threshold() {
        let (service, store) = service();
        let now = Utc::now();

        let mut old = Cart::create(&session_owner("old"), now - Duration::minutes(90));
        old.add_line(ItemId::new(), 1, now - Duration::minutes(90));
        let mut fresh = Cart::create(&session_owner("fresh"), now - Duration::minutes(10));
        fresh.add_line(ItemId::new(), 1, now - Duration::minutes(10));
        CartStore::insert(store.as_ref(), old).await.unwrap();
        CartStore::insert(store.as_ref(), fresh).await.unwrap();

        let report = service
            .clear_abandoned_carts(DEFAULT_MAX_AGE_MINUTES)
            .await
            .unwrap();

        assert_eq!(report, SweepReport { deleted: 1 });
        assert!(service.get_cart(&session_owner("old")).await.unwrap().is_none());
        assert!(service.get_cart(&session_owner("fresh")).await.unwrap().is_some());
    }
}
