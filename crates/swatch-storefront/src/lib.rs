//! Client for the Shopify Storefront GraphQL API, limited to the single
//! product-catalog query the color audit needs.

pub mod client;
pub mod error;
pub mod query;
pub mod types;

pub use client::StorefrontClient;
pub use error::StorefrontError;
pub use query::PRODUCTS_QUERY;
pub use types::ProductsResponse;
