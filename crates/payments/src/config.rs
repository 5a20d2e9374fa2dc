use picnic_core::{DomainError, DomainResult};

/// Payment bridge configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct PaymentsConfig {
    /// Provider secret key (`STRIPE_SECRET_KEY`).
    pub secret_key: String,
    /// Base URL of the storefront, used to build the success and cancel
    /// redirect URLs (`APP_URL`).
    pub app_url: String,
    /// ISO currency code for checkout line items.
    pub currency: String,
}

impl PaymentsConfig {
    pub const DEFAULT_APP_URL: &'static str = "http://localhost:3000";

    /// Read configuration from the environment.
    ///
    /// Fails with `Configuration` when the secret key is absent; a missing
    /// app URL only warns and falls back to the localhost default.
    pub fn from_env() -> DomainResult<Self> {
        let secret_key = std::env::var("STRIPE_SECRET_KEY")
            .map_err(|_| DomainError::configuration("STRIPE_SECRET_KEY is not set"))?;

        let app_url = std::env::var("APP_URL").unwrap_or_else(|_| {
            tracing::warn!("APP_URL not set; using {}", Self::DEFAULT_APP_URL);
            Self::DEFAULT_APP_URL.to_string()
        });

        Ok(Self {
            secret_key,
            app_url,
            currency: "usd".to_string(),
        })
    }

    pub fn success_url(&self) -> String {
        // The provider substitutes the session id into the placeholder.
        format!("{}/confirmation?session_id={{CHECKOUT_SESSION_ID}}", self.app_url)
    }

    pub fn cancel_url(&self) -> String {
        format!("{}/cart", self.app_url)
    }
}
