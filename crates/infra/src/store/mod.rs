//! Persistence contract consumed by the services.
//!
//! Each method maps to one atomic call against the backing document
//! service; there are no transactions spanning calls. The in-memory
//! implementation backs tests and the dev server.

mod memory;
mod traits;

pub use memory::MemoryStore;
pub use traits::{CartStore, CatalogStore, OrderStore, SettingsStore};
