//! HTTP client for the Storefront GraphQL endpoint.

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Url};
use serde::Serialize;
use swatch_core::{Product, StorefrontConfig};

use crate::error::StorefrontError;
use crate::query::PRODUCTS_QUERY;
use crate::types::ProductsResponse;

const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Storefront-Access-Token";

/// Request body: `{"query": "..."}`. The catalog query takes no variables.
#[derive(Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
}

/// Client for one store's Storefront GraphQL API.
///
/// Issues a single POST per call with the public access token header. Any
/// non-2xx status is an error; there are no retries.
pub struct StorefrontClient {
    client: Client,
    endpoint: Url,
    access_token: String,
}

impl StorefrontClient {
    /// Creates a client for `https://{store_domain}/api/{api_version}/graphql.json`.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`StorefrontError::InvalidEndpoint`] if the
    /// store domain does not form a valid URL.
    pub fn new(config: &StorefrontConfig) -> Result<Self, StorefrontError> {
        Self::with_endpoint(config, &config.endpoint())
    }

    /// Creates a client against a custom base URL (for testing with wiremock).
    ///
    /// The API path `/api/{api_version}/graphql.json` is appended to `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`StorefrontError::InvalidEndpoint`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        config: &StorefrontConfig,
        base_url: &str,
    ) -> Result<Self, StorefrontError> {
        Self::with_endpoint(config, &config.endpoint_at(base_url))
    }

    fn with_endpoint(config: &StorefrontConfig, raw: &str) -> Result<Self, StorefrontError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .build()?;

        let endpoint = Url::parse(raw).map_err(|e| StorefrontError::InvalidEndpoint {
            endpoint: raw.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            endpoint,
            access_token: config.storefront_token.clone(),
        })
    }

    /// The GraphQL endpoint this client posts to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    /// Fetches up to 100 products (20 variants each) and converts them into
    /// catalog records.
    ///
    /// # Errors
    ///
    /// - [`StorefrontError::Http`] on network or TLS failure.
    /// - [`StorefrontError::UnexpectedStatus`] on any non-2xx status.
    /// - [`StorefrontError::Deserialize`] if the body is not the expected JSON shape.
    /// - [`StorefrontError::GraphQl`] if the response carries GraphQL errors.
    pub async fn fetch_products(&self) -> Result<Vec<Product>, StorefrontError> {
        let response = self.fetch_products_response().await?;

        if !response.errors.is_empty() {
            let messages: Vec<String> = response.errors.into_iter().map(|e| e.message).collect();
            tracing::debug!(errors = ?messages, "GraphQL errors in products response");
            return Err(StorefrontError::GraphQl(messages));
        }

        let products = response.into_catalog();
        tracing::info!(count = products.len(), "fetched storefront products");
        Ok(products)
    }

    /// Posts the catalog query and decodes the raw envelope without
    /// inspecting GraphQL errors.
    ///
    /// # Errors
    ///
    /// Same as [`Self::fetch_products`], minus [`StorefrontError::GraphQl`].
    pub async fn fetch_products_response(&self) -> Result<ProductsResponse, StorefrontError> {
        let url = self.endpoint.as_str();
        tracing::debug!(url, "posting products query");

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(ACCESS_TOKEN_HEADER, &self.access_token)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(&GraphQlRequest {
                query: PRODUCTS_QUERY,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(
                status = %status,
                body = %body.chars().take(500).collect::<String>(),
                "storefront returned non-success status"
            );
            return Err(StorefrontError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<ProductsResponse>(&body).map_err(|e| {
            StorefrontError::Deserialize {
                context: format!("products response from {url}"),
                source: e,
            }
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
