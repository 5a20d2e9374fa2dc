//! Order domain module.
//!
//! Orders are immutable-on-create snapshots of cart contents moving
//! through a small status machine: pending → paid → completed, with
//! cancellation from pending. The paid transition is the single point
//! where inventory is decremented; `picnic-infra` orchestrates that
//! against the stores.

pub mod order;

pub use order::{NewOrder, Order, OrderLine, OrderStatus};
