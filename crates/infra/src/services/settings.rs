use std::sync::Arc;

use chrono::Utc;

use picnic_core::{DomainError, DomainResult};
use picnic_settings::{SettingsPatch, StoreSettings};

use crate::store::SettingsStore;

/// The singleton store-settings record: readers fall back to defaults,
/// updates upsert (patch existing, else defaults merged with the patch).
#[derive(Clone)]
pub struct SettingsService {
    store: Arc<dyn SettingsStore>,
}

impl SettingsService {
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self { store }
    }

    pub async fn get_settings(&self) -> DomainResult<Option<StoreSettings>> {
        self.store.get().await
    }

    /// Explicit create; fails with a conflict when the record exists.
    pub async fn create_settings(&self, settings: StoreSettings) -> DomainResult<StoreSettings> {
        if self.store.get().await?.is_some() {
            return Err(DomainError::conflict("settings record already exists"));
        }
        self.store.put(settings.clone()).await?;
        Ok(settings)
    }

    /// Create-if-absent upsert: patch the existing record, or start from
    /// defaults and apply the patch on top.
    pub async fn update_settings(&self, patch: SettingsPatch) -> DomainResult<StoreSettings> {
        let now = Utc::now();
        let mut settings = match self.store.get().await? {
            Some(existing) => existing,
            None => StoreSettings::defaults(now),
        };
        settings.apply_patch(patch, now);
        self.store.put(settings.clone()).await?;
        Ok(settings)
    }
}
