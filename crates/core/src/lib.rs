//! `picnic-core`: shared domain foundation.
//!
//! Typed identifiers and the domain error taxonomy; no IO, no HTTP,
//! no storage concerns.

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::{CartId, CategoryId, ItemId, OrderId, SessionId, UserId};
