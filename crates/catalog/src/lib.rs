//! Menu catalog domain module.
//!
//! Items and categories as plain records, plus the demo menu used to
//! seed an empty store. No IO; persistence and orchestration live in
//! `picnic-infra`.

pub mod category;
pub mod item;
pub mod seed;

pub use category::{Category, CategoryPatch, NewCategory};
pub use item::{Item, ItemPatch, NewItem};
pub use seed::demo_menu;
