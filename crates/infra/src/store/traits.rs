use async_trait::async_trait;

use picnic_cart::{Cart, OwnerKey};
use picnic_catalog::{Category, Item};
use picnic_core::{CartId, CategoryId, DomainResult, ItemId, OrderId, UserId};
use picnic_orders::{Order, OrderStatus};
use picnic_settings::StoreSettings;

/// Items and categories.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn list_items(&self) -> DomainResult<Vec<Item>>;
    /// Indexed lookup: active items only.
    async fn list_active_items(&self) -> DomainResult<Vec<Item>>;
    async fn get_item(&self, id: ItemId) -> DomainResult<Option<Item>>;
    async fn insert_item(&self, item: Item) -> DomainResult<()>;
    /// Full-record save of an existing item; `NotFound` if absent.
    async fn save_item(&self, item: Item) -> DomainResult<()>;
    /// Returns whether a record was deleted.
    async fn delete_item(&self, id: ItemId) -> DomainResult<bool>;

    async fn list_categories(&self) -> DomainResult<Vec<Category>>;
    async fn get_category(&self, id: CategoryId) -> DomainResult<Option<Category>>;
    async fn insert_category(&self, category: Category) -> DomainResult<()>;
    /// Full-record save of an existing category; `NotFound` if absent.
    async fn save_category(&self, category: Category) -> DomainResult<()>;
    /// Returns whether a record was deleted.
    async fn delete_category(&self, id: CategoryId) -> DomainResult<bool>;
}

/// Draft carts, looked up by record id or owner key.
#[async_trait]
pub trait CartStore: Send + Sync {
    async fn get(&self, id: CartId) -> DomainResult<Option<Cart>>;
    /// Indexed lookup by owner (user or session key).
    async fn find_by_owner(&self, owner: &OwnerKey) -> DomainResult<Option<Cart>>;
    /// Full scan; only the abandoned-cart sweep uses this.
    async fn list_all(&self) -> DomainResult<Vec<Cart>>;
    async fn insert(&self, cart: Cart) -> DomainResult<()>;
    /// Full-record save of an existing cart; `NotFound` if absent.
    async fn save(&self, cart: Cart) -> DomainResult<()>;
    /// Returns whether a record was deleted.
    async fn delete(&self, id: CartId) -> DomainResult<bool>;
}

/// Orders.
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn get(&self, id: OrderId) -> DomainResult<Option<Order>>;
    async fn list_all(&self) -> DomainResult<Vec<Order>>;
    async fn list_by_user(&self, user_id: &UserId) -> DomainResult<Vec<Order>>;
    async fn list_by_status(&self, status: OrderStatus) -> DomainResult<Vec<Order>>;
    async fn insert(&self, order: Order) -> DomainResult<()>;
    /// Full-record save of an existing order; `NotFound` if absent.
    async fn save(&self, order: Order) -> DomainResult<()>;
    /// Returns whether a record was deleted.
    async fn delete(&self, id: OrderId) -> DomainResult<bool>;
}

/// The singleton settings record.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    async fn get(&self) -> DomainResult<Option<StoreSettings>>;
    /// Insert-or-replace.
    async fn put(&self, settings: StoreSettings) -> DomainResult<()>;
}
