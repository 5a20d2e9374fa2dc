use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use picnic_cart::{Cart, OwnerKey};
use picnic_catalog::{Category, Item};
use picnic_core::{CartId, CategoryId, DomainError, DomainResult, ItemId, OrderId, UserId};
use picnic_orders::{Order, OrderStatus};
use picnic_settings::StoreSettings;

use super::traits::{CartStore, CatalogStore, OrderStore, SettingsStore};

/// In-memory document store.
///
/// Intended for tests/dev. Each trait method takes one lock for its
/// whole body, giving the per-call atomicity the services assume.
/// Indexed lookups are scans; acceptable at this scale.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RwLock<HashMap<ItemId, Item>>,
    categories: RwLock<HashMap<CategoryId, Category>>,
    carts: RwLock<HashMap<CartId, Cart>>,
    orders: RwLock<HashMap<OrderId, Order>>,
    settings: RwLock<Option<StoreSettings>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> DomainError {
    DomainError::store("lock poisoned")
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn list_items(&self) -> DomainResult<Vec<Item>> {
        let items = self.items.read().map_err(|_| poisoned())?;
        Ok(items.values().cloned().collect())
    }

    async fn list_active_items(&self) -> DomainResult<Vec<Item>> {
        let items = self.items.read().map_err(|_| poisoned())?;
        Ok(items.values().filter(|i| i.is_active).cloned().collect())
    }

    async fn get_item(&self, id: ItemId) -> DomainResult<Option<Item>> {
        let items = self.items.read().map_err(|_| poisoned())?;
        Ok(items.get(&id).cloned())
    }

    async fn insert_item(&self, item: Item) -> DomainResult<()> {
        let mut items = self.items.write().map_err(|_| poisoned())?;
        if items.contains_key(&item.id) {
            return Err(DomainError::conflict(format!("item {} already exists", item.id)));
        }
        items.insert(item.id, item);
        Ok(())
    }

    async fn save_item(&self, item: Item) -> DomainResult<()> {
        let mut items = self.items.write().map_err(|_| poisoned())?;
        if !items.contains_key(&item.id) {
            return Err(DomainError::not_found());
        }
        items.insert(item.id, item);
        Ok(())
    }

    async fn delete_item(&self, id: ItemId) -> DomainResult<bool> {
        let mut items = self.items.write().map_err(|_| poisoned())?;
        Ok(items.remove(&id).is_some())
    }

    async fn list_categories(&self) -> DomainResult<Vec<Category>> {
        let categories = self.categories.read().map_err(|_| poisoned())?;
        Ok(categories.values().cloned().collect())
    }

    async fn get_category(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let categories = self.categories.read().map_err(|_| poisoned())?;
        Ok(categories.get(&id).cloned())
    }

    async fn insert_category(&self, category: Category) -> DomainResult<()> {
        let mut categories = self.categories.write().map_err(|_| poisoned())?;
        categories.insert(category.id, category);
        Ok(())
    }

    async fn save_category(&self, category: Category) -> DomainResult<()> {
        let mut categories = self.categories.write().map_err(|_| poisoned())?;
        if !categories.contains_key(&category.id) {
            return Err(DomainError::not_found());
        }
        categories.insert(category.id, category);
        Ok(())
    }

    async fn delete_category(&self, id: CategoryId) -> DomainResult<bool> {
        let mut categories = self.categories.write().map_err(|_| poisoned())?;
        Ok(categories.remove(&id).is_some())
    }
}

#[async_trait]
impl CartStore for MemoryStore {
    async fn get(&self, id: CartId) -> DomainResult<Option<Cart>> {
        let carts = self.carts.read().map_err(|_| poisoned())?;
        Ok(carts.get(&id).cloned())
    }

    async fn find_by_owner(&self, owner: &OwnerKey) -> DomainResult<Option<Cart>> {
        let carts = self.carts.read().map_err(|_| poisoned())?;
        let found = carts.values().find(|cart| match owner {
            OwnerKey::User(user_id) => cart.user_id.as_ref() == Some(user_id),
            OwnerKey::Session(session_id) => cart.session_id.as_ref() == Some(session_id),
        });
        Ok(found.cloned())
    }

    async fn list_all(&self) -> DomainResult<Vec<Cart>> {
        let carts = self.carts.read().map_err(|_| poisoned())?;
        Ok(carts.values().cloned().collect())
    }

    async fn insert(&self, cart: Cart) -> DomainResult<()> {
        let mut carts = self.carts.write().map_err(|_| poisoned())?;
        if carts.contains_key(&cart.id) {
            return Err(DomainError::conflict(format!("cart {} already exists", cart.id)));
        }
        carts.insert(cart.id, cart);
        Ok(())
    }

    async fn save(&self, cart: Cart) -> DomainResult<()> {
        let mut carts = self.carts.write().map_err(|_| poisoned())?;
        if !carts.contains_key(&cart.id) {
            return Err(DomainError::not_found());
        }
        carts.insert(cart.id, cart);
        Ok(())
    }

    async fn delete(&self, id: CartId) -> DomainResult<bool> {
        let mut carts = self.carts.write().map_err(|_| poisoned())?;
        Ok(carts.remove(&id).is_some())
    }
}

#[async_trait]
impl OrderStore for MemoryStore {
    async fn get(&self, id: OrderId) -> DomainResult<Option<Order>> {
        let orders = self.orders.read().map_err(|_| poisoned())?;
        Ok(orders.get(&id).cloned())
    }

    async fn list_all(&self) -> DomainResult<Vec<Order>> {
        let orders = self.orders.read().map_err(|_| poisoned())?;
        Ok(orders.values().cloned().collect())
    }

    async fn list_by_user(&self, user_id: &UserId) -> DomainResult<Vec<Order>> {
        let orders = self.orders.read().map_err(|_| poisoned())?;
        Ok(orders
            .values()
            .filter(|o| o.user_id.as_ref() == Some(user_id))
            .cloned()
            .collect())
    }

    async fn list_by_status(&self, status: OrderStatus) -> DomainResult<Vec<Order>> {
        let orders = self.orders.read().map_err(|_| poisoned())?;
        Ok(orders.values().filter(|o| o.status == status).cloned().collect())
    }

    async fn insert(&self, order: Order) -> DomainResult<()> {
        let mut orders = self.orders.write().map_err(|_| poisoned())?;
        if orders.contains_key(&order.id) {
            return Err(DomainError::conflict(format!("order {} already exists", order.id)));
        }
        orders.insert(order.id, order);
        Ok(())
    }

    async fn save(&self, order: Order) -> DomainResult<()> {
        let mut orders = self.orders.write().map_err(|_| poisoned())?;
        if !orders.contains_key(&order.id) {
            return Err(DomainError::not_found());
        }
        orders.insert(order.id, order);
        Ok(())
    }

    async fn delete(&self, id: OrderId) -> DomainResult<bool> {
        let mut orders = self.orders.write().map_err(|_| poisoned())?;
        Ok(orders.remove(&id).is_some())
    }
}

#[async_trait]
impl SettingsStore for MemoryStore {
    async fn get(&self) -> DomainResult<Option<StoreSettings>> {
        let settings = self.settings.read().map_err(|_| poisoned())?;
        Ok(settings.clone())
    }

    async fn put(&self, value: StoreSettings) -> DomainResult<()> {
        let mut settings = self.settings.write().map_err(|_| poisoned())?;
        *settings = Some(value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use picnic_catalog::NewItem;
    use picnic_core::SessionId;

    fn item(name: &str, active: bool) -> Item {
        Item::create(NewItem {
            name: name.to_string(),
            ingredients: Vec::new(),
            price_cents: 1000,
            inventory: 5,
            is_active: active,
            category_id: None,
            description: None,
            image: None,
            emoji: None,
            show_qty: None,
        })
    }

    #[tokio::test]
    async fn active_index_filters_inactive_items() {
        let store = MemoryStore::new();
        store.insert_item(item("a", true)).await.unwrap();
        store.insert_item(item("b", false)).await.unwrap();

        assert_eq!(store.list_items().await.unwrap().len(), 2);
        let active = store.list_active_items().await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].name, "a");
    }

    #[tokio::test]
    async fn save_on_a_missing_record_is_not_found() {
        let store = MemoryStore::new();
        let err = store.save_item(item("ghost", true)).await.unwrap_err();
        assert_eq!(err, DomainError::NotFound);
    }

    #[tokio::test]
    async fn owner_index_distinguishes_user_and_session_keys() {
        let store = MemoryStore::new();
        let owner = OwnerKey::Session(SessionId::from("s1"));
        let cart = Cart::create(&owner, Utc::now());
        CartStore::insert(&store, cart.clone()).await.unwrap();

        let found = store.find_by_owner(&owner).await.unwrap().unwrap();
        assert_eq!(found.id, cart.id);

        let other = OwnerKey::Session(SessionId::from("s2"));
        assert!(store.find_by_owner(&other).await.unwrap().is_none());
    }
}
