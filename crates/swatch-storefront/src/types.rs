//! Wire types for the Storefront `products` query.
//!
//! The response follows the Relay connection shape:
//! `data.products.edges[].node`, with variants nested the same way under each
//! product. Missing `options` or `variants` decode as empty; a missing
//! `data` or `products` decodes as an empty catalog.
//!
//! `productType` and `tags` stay optional so their absence reaches the
//! classifier instead of being papered over with a default here.

use serde::Deserialize;
use swatch_core::{Product, ProductOption, SelectedOption, Variant};

/// Top-level GraphQL response envelope.
#[derive(Debug, Deserialize)]
pub struct ProductsResponse {
    #[serde(default)]
    pub data: Option<ProductsData>,

    /// GraphQL-level errors. Shopify returns these with HTTP 200.
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub struct ProductsData {
    #[serde(default)]
    pub products: Option<Connection<ProductNode>>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct Connection<T> {
    #[serde(default = "Vec::new")]
    pub edges: Vec<Edge<T>>,
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self { edges: Vec::new() }
    }
}

#[derive(Debug, Deserialize)]
pub struct Edge<T> {
    pub node: T,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductNode {
    /// Storefront GID, e.g. `"gid://shopify/Product/7981234567890"`.
    pub id: String,
    pub title: String,
    pub handle: String,
    /// Plain string, empty (`""`) when the merchant never set one.
    #[serde(default)]
    pub product_type: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub options: Vec<OptionNode>,
    #[serde(default)]
    pub variants: Connection<VariantNode>,
}

#[derive(Debug, Deserialize)]
pub struct OptionNode {
    pub name: String,
    #[serde(default)]
    pub values: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantNode {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub selected_options: Vec<SelectedOptionNode>,
}

#[derive(Debug, Deserialize)]
pub struct SelectedOptionNode {
    pub name: String,
    pub value: String,
}

impl ProductsResponse {
    /// Flattens the connection into catalog products, in response order.
    #[must_use]
    pub fn into_catalog(self) -> Vec<Product> {
        self.data
            .and_then(|data| data.products)
            .unwrap_or_default()
            .edges
            .into_iter()
            .map(|edge| edge.node.into())
            .collect()
    }
}

impl From<ProductNode> for Product {
    fn from(node: ProductNode) -> Self {
        Self {
            id: node.id,
            title: node.title,
            handle: node.handle,
            product_type: node.product_type,
            tags: node.tags,
            options: node
                .options
                .into_iter()
                .map(|option| ProductOption {
                    name: option.name,
                    values: option.values,
                })
                .collect(),
            variants: node
                .variants
                .edges
                .into_iter()
                .map(|edge| edge.node.into())
                .collect(),
        }
    }
}

impl From<VariantNode> for Variant {
    fn from(node: VariantNode) -> Self {
        Self {
            id: node.id,
            title: node.title,
            selected_options: node
                .selected_options
                .into_iter()
                .map(|selected| SelectedOption {
                    name: selected.name,
                    value: selected.value,
                })
                .collect(),
        }
    }
}
