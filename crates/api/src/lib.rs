//! `picnic-api`: HTTP surface for the storefront.

pub mod app;
pub mod sweeper;
