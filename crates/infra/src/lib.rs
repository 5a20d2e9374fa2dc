//! `picnic-infra`: persistence contract and application services.
//!
//! The store traits mirror the document-persistence contract the
//! storefront consumes: point lookups, indexed queries, inserts,
//! patch-style saves, and deletes, each call atomic on its own. The
//! services compose those traits with the domain records and hold the
//! order/cart/inventory orchestration.

pub mod services;
pub mod store;

pub use services::{
    CartService, CatalogService, OrderFilter, OrderService, SettingsService, SweepReport,
    DEFAULT_MAX_AGE_MINUTES,
};
pub use store::{CartStore, CatalogStore, MemoryStore, OrderStore, SettingsStore};
