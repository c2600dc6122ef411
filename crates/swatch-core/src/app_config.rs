/// Connection settings for one Shopify storefront.
///
/// Built by [`crate::load_storefront_config`] and handed to the storefront
/// client explicitly; nothing reads the environment after startup.
#[derive(Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Bare store host, e.g. `"example.myshopify.com"` (no scheme, no path).
    pub store_domain: String,
    pub storefront_token: String,
    /// Storefront API version segment, e.g. `"2023-07"`.
    pub api_version: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub log_level: String,
}

impl StorefrontConfig {
    /// GraphQL endpoint for this store.
    #[must_use]
    pub fn endpoint(&self) -> String {
        self.endpoint_at(&format!("https://{}", self.store_domain))
    }

    /// GraphQL endpoint under an arbitrary base URL, e.g. a local mock server.
    #[must_use]
    pub fn endpoint_at(&self, base_url: &str) -> String {
        format!(
            "{}/api/{}/graphql.json",
            base_url.trim_end_matches('/'),
            self.api_version
        )
    }
}

impl std::fmt::Debug for StorefrontConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorefrontConfig")
            .field("store_domain", &self.store_domain)
            .field("storefront_token", &"[redacted]")
            .field("api_version", &self.api_version)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("log_level", &self.log_level)
            .finish()
    }
}
