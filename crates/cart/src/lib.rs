//! Cart domain module.
//!
//! One draft cart per owner key (authenticated user or anonymous browser
//! session), holding item/quantity lines. Pure record mutations only;
//! lookups and persistence live in `picnic-infra`.

pub mod cart;
pub mod owner;

pub use cart::{Cart, CartLine};
pub use owner::OwnerKey;
