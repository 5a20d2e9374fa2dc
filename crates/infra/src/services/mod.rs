//! Application services: domain records composed with the store traits.
//!
//! Every operation is one request-scoped call; atomicity comes from the
//! per-call guarantees of the store, not from transactions.

mod cart;
mod catalog;
mod orders;
mod settings;

pub use cart::{CartService, SweepReport, DEFAULT_MAX_AGE_MINUTES};
pub use catalog::CatalogService;
pub use orders::{OrderFilter, OrderService};
pub use settings::SettingsService;
