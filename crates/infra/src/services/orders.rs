use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;

use picnic_core::{DomainError, DomainResult, OrderId, UserId};
use picnic_orders::{NewOrder, Order, OrderStatus};

use crate::store::{CatalogStore, OrderStore};

/// Filter for order listings: by user, by status, or everything.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFilter {
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub status: Option<OrderStatus>,
}

/// Order lifecycle operations, including the single place where
/// inventory is decremented.
#[derive(Clone)]
pub struct OrderService {
    orders: Arc<dyn OrderStore>,
    catalog: Arc<dyn CatalogStore>,
}

impl OrderService {
    pub fn new(orders: Arc<dyn OrderStore>, catalog: Arc<dyn CatalogStore>) -> Self {
        Self { orders, catalog }
    }

    /// Persist a new pending order from snapshot lines. The caller's
    /// total must match the sum over the lines.
    pub async fn create_order(&self, new: NewOrder) -> DomainResult<Order> {
        let order = Order::create(new, Utc::now())?;
        self.orders.insert(order.clone()).await?;
        tracing::info!(order_id = %order.id, total_cents = order.total_cents, "order created");
        Ok(order)
    }

    /// List orders: the user filter wins over the status filter, matching
    /// the indexed query patterns.
    pub async fn get_orders(&self, filter: OrderFilter) -> DomainResult<Vec<Order>> {
        if let Some(user_id) = &filter.user_id {
            return self.orders.list_by_user(user_id).await;
        }
        if let Some(status) = filter.status {
            return self.orders.list_by_status(status).await;
        }
        self.orders.list_all().await
    }

    pub async fn get_order(&self, id: OrderId) -> DomainResult<Option<Order>> {
        self.orders.get(id).await
    }

    pub async fn delete_order(&self, id: OrderId) -> DomainResult<()> {
        if self.orders.delete(id).await? {
            Ok(())
        } else {
            Err(DomainError::NotFound)
        }
    }

    /// Set an order's status (admin path). Entering `Paid` from any other
    /// state triggers the inventory decrement; if the order is already
    /// paid the decrement is skipped (idempotency guard).
    pub async fn update_order_status(
        &self,
        id: OrderId,
        status: OrderStatus,
        checkout_session_id: Option<String>,
    ) -> DomainResult<Order> {
        let mut order = self.orders.get(id).await?.ok_or(DomainError::NotFound)?;

        let entering_paid = status == OrderStatus::Paid && !order.is_paid();

        order.status = status;
        if let Some(session_id) = checkout_session_id {
            order.checkout_session_id = Some(session_id);
        }
        self.orders.save(order.clone()).await?;

        if entering_paid {
            order = self.apply_inventory_decrement(order).await?;
        }
        Ok(order)
    }

    /// Payment-callback path: mark the order paid and decrement inventory
    /// exactly once. An already-paid order is returned unchanged; the
    /// provider redirect can fire more than once (e.g. page reload), and
    /// this short-circuit is the primary at-most-once guard.
    pub async fn process_order_payment(
        &self,
        id: OrderId,
        checkout_session_id: String,
    ) -> DomainResult<Order> {
        let mut order = self.orders.get(id).await?.ok_or(DomainError::NotFound)?;

        if order.is_paid() {
            tracing::debug!(order_id = %id, "payment already processed; no-op");
            return Ok(order);
        }

        order.status = OrderStatus::Paid;
        order.checkout_session_id = Some(checkout_session_id);
        self.orders.save(order.clone()).await?;

        let order = self.apply_inventory_decrement(order).await?;
        tracing::info!(order_id = %id, "payment processed, inventory decremented");
        Ok(order)
    }

    /// Repair primitive: decrement inventory for a paid order whose
    /// decrement did not complete. Fails on unpaid orders; a no-op once
    /// the order's decrement marker is set, so it is safe to re-run.
    pub async fn decrement_inventory_for_order(&self, id: OrderId) -> DomainResult<Order> {
        let order = self.orders.get(id).await?.ok_or(DomainError::NotFound)?;

        if !order.is_paid() {
            return Err(DomainError::invariant(
                "cannot decrement inventory for unpaid order",
            ));
        }
        if order.inventory_applied {
            return Ok(order);
        }

        self.apply_inventory_decrement(order).await
    }

    /// Decrement stock for every line, clamping each item at zero, then
    /// set the order's decrement marker.
    ///
    /// Not atomic across items: a failure mid-loop leaves earlier items
    /// decremented and the marker unset, which is what makes the repair
    /// primitive re-runnable rather than rollback-based.
    async fn apply_inventory_decrement(&self, mut order: Order) -> DomainResult<Order> {
        for line in &order.lines {
            if let Some(mut item) = self.catalog.get_item(line.item_id).await? {
                item.decrement_inventory(line.quantity);
                self.catalog.save_item(item).await?;
            }
        }

        order.inventory_applied = true;
        self.orders.save(order.clone()).await?;
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use picnic_catalog::{Item, ItemPatch, NewItem};
    use picnic_core::ItemId;
    use picnic_orders::OrderLine;

    use crate::services::CatalogService;
    use crate::store::MemoryStore;

    struct Fixture {
        orders: OrderService,
        catalog: CatalogService,
        store: Arc<MemoryStore>,
    }

    fn fixture() -> Fixture {
        let store = Arc::new(MemoryStore::new());
        Fixture {
            orders: OrderService::new(store.clone(), store.clone()),
            catalog: CatalogService::new(store.clone()),
            store,
        }
    }

    async fn seeded_item(f: &Fixture, name: &str, price_cents: u64, inventory: u32) -> Item {
        f.catalog
            .create_item(NewItem {
                name: name.to_string(),
                ingredients: Vec::new(),
                price_cents,
                inventory,
                is_active: true,
                category_id: None,
                description: None,
                image: None,
                emoji: None,
                show_qty: None,
            })
            .await
            .unwrap()
    }

    fn snapshot(item: &Item, quantity: u32) -> OrderLine {
        OrderLine {
            item_id: item.id,
            quantity,
            unit_price_cents: item.price_cents,
            name: item.name.clone(),
        }
    }

    fn new_order(lines: Vec<OrderLine>) -> NewOrder {
        let total_cents = Order::derive_total(&lines).unwrap();
        NewOrder {
            user_id: None,
            lines,
            total_cents,
            customer_email: None,
        }
    }

    async fn inventory_of(f: &Fixture, id: ItemId) -> u32 {
        f.store.get_item(id).await.unwrap().unwrap().inventory
    }

    #[tokio::test]
    async fn payment_confirmation_is_idempotent() {
        let f = fixture();
        let item = seeded_item(&f, "Classic Club", 1299, 20).await;
        let order = f
            .orders
            .create_order(new_order(vec![snapshot(&item, 3)]))
            .await
            .unwrap();

        let first = f
            .orders
            .process_order_payment(order.id, "cs_1".to_string())
            .await
            .unwrap();
        assert_eq!(first.status, OrderStatus::Paid);
        assert_eq!(inventory_of(&f, item.id).await, 17);

        let second = f
            .orders
            .process_order_payment(order.id, "cs_1".to_string())
            .await
            .unwrap();
        assert_eq!(second, first);
        assert_eq!(inventory_of(&f, item.id).await, 17);
    }

    #[tokio::test]
    async fn inventory_is_floored_at_zero() {
        let f = fixture();
        let item = seeded_item(&f, "Reuben", 1499, 2).await;
        let order = f
            .orders
            .create_order(new_order(vec![snapshot(&item, 5)]))
            .await
            .unwrap();

        f.orders
            .process_order_payment(order.id, "cs_1".to_string())
            .await
            .unwrap();

        assert_eq!(inventory_of(&f, item.id).await, 0);
    }

    #[tokio::test]
    async fn status_update_into_paid_decrements_once() {
        let f = fixture();
        let item = seeded_item(&f, "Italian Sub", 1199, 10).await;
        let order = f
            .orders
            .create_order(new_order(vec![snapshot(&item, 2)]))
            .await
            .unwrap();

        f.orders
            .update_order_status(order.id, OrderStatus::Paid, Some("cs_9".to_string()))
            .await
            .unwrap();
        assert_eq!(inventory_of(&f, item.id).await, 8);

        // Re-asserting paid must not decrement again.
        f.orders
            .update_order_status(order.id, OrderStatus::Paid, None)
            .await
            .unwrap();
        assert_eq!(inventory_of(&f, item.id).await, 8);

        let completed = f
            .orders
            .update_order_status(order.id, OrderStatus::Completed, None)
            .await
            .unwrap();
        assert_eq!(completed.status, OrderStatus::Completed);
        assert_eq!(inventory_of(&f, item.id).await, 8);
    }

    #[tokio::test]
    async fn order_snapshot_is_immutable_under_item_edits() {
        let f = fixture();
        let item = seeded_item(&f, "Veggie Delight", 500, 25).await;
        let order = f
            .orders
            .create_order(new_order(vec![snapshot(&item, 2)]))
            .await
            .unwrap();

        f.catalog
            .update_item(
                item.id,
                ItemPatch {
                    price_cents: Some(999),
                    name: Some("Veggie Deluxe".to_string()),
                    ..ItemPatch::default()
                },
            )
            .await
            .unwrap();

        let reread = f.orders.get_order(order.id).await.unwrap().unwrap();
        assert_eq!(reread.lines[0].unit_price_cents, 500);
        assert_eq!(reread.lines[0].name, "Veggie Delight");
        assert_eq!(reread.total_cents, 1000);
    }

    #[tokio::test]
    async fn repair_primitive_rejects_unpaid_and_is_rerunnable_when_paid() {
        let f = fixture();
        let item = seeded_item(&f, "BBQ Pulled Pork", 1399, 10).await;
        let order = f
            .orders
            .create_order(new_order(vec![snapshot(&item, 4)]))
            .await
            .unwrap();

        let err = f
            .orders
            .decrement_inventory_for_order(order.id)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));

        f.orders
            .process_order_payment(order.id, "cs_1".to_string())
            .await
            .unwrap();
        assert_eq!(inventory_of(&f, item.id).await, 6);

        // Already applied: re-running the repair must not decrement again.
        f.orders.decrement_inventory_for_order(order.id).await.unwrap();
        assert_eq!(inventory_of(&f, item.id).await, 6);
    }

    #[tokio::test]
    async fn repair_primitive_completes_a_partial_decrement() {
        let f = fixture();
        let item = seeded_item(&f, "Chicken Caesar", 1099, 18).await;
        let order = f
            .orders
            .create_order(new_order(vec![snapshot(&item, 3)]))
            .await
            .unwrap();

        // Simulate "paid but decrement never ran": flip status directly.
        let mut paid = OrderStore::get(f.store.as_ref(), order.id).await.unwrap().unwrap();
        paid.status = OrderStatus::Paid;
        OrderStore::save(f.store.as_ref(), paid).await.unwrap();
        assert_eq!(inventory_of(&f, item.id).await, 18);

        let repaired = f.orders.decrement_inventory_for_order(order.id).await.unwrap();
        assert!(repaired.inventory_applied);
        assert_eq!(inventory_of(&f, item.id).await, 15);
    }

    #[tokio::test]
    async fn create_rejects_a_tampered_total() {
        let f = fixture();
        let item = seeded_item(&f, "Classic Club", 1299, 20).await;

        let err = f
            .orders
            .create_order(NewOrder {
                user_id: None,
                lines: vec![snapshot(&item, 2)],
                total_cents: 1,
                customer_email: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn listing_filters_by_user_then_status() {
        let f = fixture();
        let item = seeded_item(&f, "Reuben", 1499, 12).await;

        let mine = NewOrder {
            user_id: Some(UserId::from("user_1")),
            ..new_order(vec![snapshot(&item, 1)])
        };
        let placed = f.orders.create_order(mine).await.unwrap();
        f.orders
            .create_order(new_order(vec![snapshot(&item, 2)]))
            .await
            .unwrap();

        let by_user = f
            .orders
            .get_orders(OrderFilter {
                user_id: Some(UserId::from("user_1")),
                status: None,
            })
            .await
            .unwrap();
        assert_eq!(by_user.len(), 1);
        assert_eq!(by_user[0].id, placed.id);

        let pending = f
            .orders
            .get_orders(OrderFilter {
                user_id: None,
                status: Some(OrderStatus::Pending),
            })
            .await
            .unwrap();
        assert_eq!(pending.len(), 2);

        let all = f.orders.get_orders(OrderFilter::default()).await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn missing_orders_surface_not_found() {
        let f = fixture();
        let missing = OrderId::new();

        assert_eq!(
            f.orders
                .process_order_payment(missing, "cs_x".to_string())
                .await
                .unwrap_err(),
            DomainError::NotFound
        );
        assert_eq!(
            f.orders
                .update_order_status(missing, OrderStatus::Cancelled, None)
                .await
                .unwrap_err(),
            DomainError::NotFound
        );
        assert_eq!(
            f.orders.delete_order(missing).await.unwrap_err(),
            DomainError::NotFound
        );
    }

    #[tokio::test]
    async fn paid_order_with_a_deleted_item_still_processes() {
        let f = fixture();
        let item = seeded_item(&f, "Limited Special", 800, 5).await;
        let order = f
            .orders
            .create_order(new_order(vec![snapshot(&item, 2)]))
            .await
            .unwrap();

        f.catalog.delete_item(item.id).await.unwrap();

        // Missing line items are skipped, not errors.
        let paid = f
            .orders
            .process_order_payment(order.id, "cs_1".to_string())
            .await
            .unwrap();
        assert_eq!(paid.status, OrderStatus::Paid);
        assert!(paid.inventory_applied);
    }
}
