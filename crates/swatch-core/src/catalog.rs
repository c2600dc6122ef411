use serde::{Deserialize, Serialize};

/// A product decoded from one page of the Storefront API.
///
/// `product_type` and `tags` are optional here even though the Storefront
/// schema marks them non-null: the classifier needs to see when a response
/// omits them so schema drift surfaces as an error instead of an empty
/// default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Opaque Storefront GID, e.g. `"gid://shopify/Product/123"`.
    pub id: String,
    pub title: String,
    /// URL slug, unique within the catalog.
    pub handle: String,
    /// May be an empty string for uncategorized products.
    pub product_type: Option<String>,
    pub tags: Option<Vec<String>>,
    /// Product-level options in declaration order.
    pub options: Vec<ProductOption>,
    pub variants: Vec<Variant>,
}

/// An option declared on the product itself, e.g. `Size: [S, M, L]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOption {
    pub name: String,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub id: String,
    pub title: String,
    /// One entry per option dimension that applies to this variant.
    pub selected_options: Vec<SelectedOption>,
}

/// A `name`/`value` pair chosen on a variant, e.g. `Color: Red`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedOption {
    pub name: String,
    pub value: String,
}

impl ProductOption {
    /// Returns `true` when this option's name is `color` in any letter case.
    #[must_use]
    pub fn is_color(&self) -> bool {
        is_color_name(&self.name)
    }
}

impl SelectedOption {
    /// Returns `true` when this pair's name is `color` in any letter case.
    #[must_use]
    pub fn is_color(&self) -> bool {
        is_color_name(&self.name)
    }
}

fn is_color_name(name: &str) -> bool {
    name.eq_ignore_ascii_case("color")
}
