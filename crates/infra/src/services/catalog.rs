use std::sync::Arc;

use picnic_catalog::{demo_menu, Category, CategoryPatch, Item, ItemPatch, NewCategory, NewItem};
use picnic_core::{CategoryId, DomainError, DomainResult, ItemId};

use crate::store::CatalogStore;

/// Menu management: item and category CRUD plus the demo seed.
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn CatalogStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    pub async fn get_items(&self) -> DomainResult<Vec<Item>> {
        self.store.list_items().await
    }

    pub async fn get_active_items(&self) -> DomainResult<Vec<Item>> {
        self.store.list_active_items().await
    }

    pub async fn get_item(&self, id: ItemId) -> DomainResult<Option<Item>> {
        self.store.get_item(id).await
    }

    pub async fn create_item(&self, new: NewItem) -> DomainResult<Item> {
        let item = Item::create(new);
        self.store.insert_item(item.clone()).await?;
        Ok(item)
    }

    pub async fn update_item(&self, id: ItemId, patch: ItemPatch) -> DomainResult<Item> {
        let mut item = self.store.get_item(id).await?.ok_or(DomainError::NotFound)?;
        item.apply_patch(patch);
        self.store.save_item(item.clone()).await?;
        Ok(item)
    }

    pub async fn delete_item(&self, id: ItemId) -> DomainResult<()> {
        if self.store.delete_item(id).await? {
            Ok(())
        } else {
            Err(DomainError::NotFound)
        }
    }

    pub async fn get_categories(&self) -> DomainResult<Vec<Category>> {
        self.store.list_categories().await
    }

    pub async fn create_category(&self, new: NewCategory) -> DomainResult<Category> {
        let category = Category::create(new);
        self.store.insert_category(category.clone()).await?;
        Ok(category)
    }

    pub async fn update_category(
        &self,
        id: CategoryId,
        patch: CategoryPatch,
    ) -> DomainResult<Category> {
        let mut category = self
            .store
            .get_category(id)
            .await?
            .ok_or(DomainError::NotFound)?;
        category.apply_patch(patch);
        self.store.save_category(category.clone()).await?;
        Ok(category)
    }

    pub async fn delete_category(&self, id: CategoryId) -> DomainResult<()> {
        if self.store.delete_category(id).await? {
            Ok(())
        } else {
            Err(DomainError::NotFound)
        }
    }

    /// Insert the demo menu into an empty store. A store that already has
    /// items is left untouched; returns the number of items inserted.
    pub async fn seed_demo_items(&self) -> DomainResult<usize> {
        if !self.store.list_items().await?.is_empty() {
            tracing::debug!("seed skipped; items already present");
            return Ok(0);
        }

        let menu = demo_menu();
        let count = menu.len();
        for new in menu {
            self.store.insert_item(Item::create(new)).await?;
        }
        tracing::info!(count, "demo menu seeded");
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::store::MemoryStore;

    fn service() -> CatalogService {
        CatalogService::new(Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn seed_fills_an_empty_store_once() {
        let service = service();

        let first = service.seed_demo_items().await.unwrap();
        assert_eq!(first, 6);

        let second = service.seed_demo_items().await.unwrap();
        assert_eq!(second, 0);
        assert_eq!(service.get_items().await.unwrap().len(), 6);
    }

    #[tokio::test]
    async fn update_on_a_missing_item_is_not_found() {
        let service = service();
        let err = service
            .update_item(ItemId::new(), ItemPatch::default())
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::NotFound);
    }

    #[tokio::test]
    async fn categories_round_trip() {
        let service = service();
        let created = service
            .create_category(NewCategory {
                name: "Sandwiches".to_string(),
                description: None,
            })
            .await
            .unwrap();

        let listed = service.get_categories().await.unwrap();
        assert_eq!(listed, vec![created]);
    }

    #[tokio::test]
    async fn category_update_patches_and_delete_removes() {
        let service = service();
        let created = service
            .create_category(NewCategory {
                name: "Sandwiches".to_string(),
                description: None,
            })
            .await
            .unwrap();

        let updated = service
            .update_category(
                created.id,
                CategoryPatch {
                    name: Some("Subs".to_string()),
                    ..CategoryPatch::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Subs");
        assert_eq!(updated.id, created.id);

        service.delete_category(created.id).await.unwrap();
        assert!(service.get_categories().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn category_update_and_delete_on_missing_ids_are_not_found() {
        let service = service();

        let err = service
            .update_category(CategoryId::new(), CategoryPatch::default())
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::NotFound);

        let err = service.delete_category(CategoryId::new()).await.unwrap_err();
        assert_eq!(err, DomainError::NotFound);
    }
}
