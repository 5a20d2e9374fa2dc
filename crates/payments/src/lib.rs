//! Hosted-checkout payment bridge.
//!
//! The storefront never touches card data: it creates a hosted checkout
//! session at the provider, redirects the customer there, and later
//! reconciles the completed payment onto the order. This crate holds the
//! provider seam (`CheckoutProvider`), the HTTP implementation against
//! the Stripe Checkout REST API, and a mock for tests.

pub mod config;
pub mod mock;
pub mod provider;
pub mod stripe;

pub use config::PaymentsConfig;
pub use mock::MockCheckout;
pub use provider::{CheckoutProvider, CheckoutSession, DisplayLine, UnconfiguredCheckout};
pub use stripe::StripeCheckout;
