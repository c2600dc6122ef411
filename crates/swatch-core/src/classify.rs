//! Splits a catalog into products that offer a color choice and products
//! that do not.
//!
//! Color information comes from two places, checked in a fixed order:
//!
//! 1. A product-level option named `color` (any case). The first such option
//!    wins and its declared values are used verbatim, including order and any
//!    duplicates. Variants are not consulted.
//! 2. Variant `selectedOptions` named `color`. Every matching value across
//!    all variants is collected into a set, so repeated colors collapse.
//!
//! A product with neither source lands in the colorless list with its
//! product type and tags.

use std::collections::BTreeSet;

use serde::Serialize;
use thiserror::Error;

use crate::catalog::Product;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("malformed product \"{title}\" ({handle}): missing field `{field}`")]
    MalformedProduct {
        title: String,
        handle: String,
        field: &'static str,
    },
}

/// Which pass produced a product's colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorSource {
    ProductOption,
    VariantOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColoredProduct {
    pub title: String,
    pub handle: String,
    pub colors: Vec<String>,
    pub source: ColorSource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorlessProduct {
    pub title: String,
    pub handle: String,
    pub product_type: String,
    pub tags: Vec<String>,
}

/// Result of [`classify`]. Every input product lands in exactly one list,
/// in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub with_colors: Vec<ColoredProduct>,
    pub without_colors: Vec<ColorlessProduct>,
}

impl Classification {
    /// Number of products classified.
    #[must_use]
    pub fn total(&self) -> usize {
        self.with_colors.len() + self.without_colors.len()
    }
}

/// Classifies every product in `products`.
///
/// # Errors
///
/// Returns [`ClassifyError::MalformedProduct`] for the first colorless
/// product whose `product_type` or `tags` is absent. No partial result is
/// returned in that case.
pub fn classify(products: &[Product]) -> Result<Classification, ClassifyError> {
    let mut classification = Classification::default();

    for product in products {
        if let Some(values) = product_option_colors(product) {
            classification.with_colors.push(ColoredProduct {
                title: product.title.clone(),
                handle: product.handle.clone(),
                colors: values.to_vec(),
                source: ColorSource::ProductOption,
            });
            continue;
        }

        let variant_colors = variant_option_colors(product);
        if !variant_colors.is_empty() {
            classification.with_colors.push(ColoredProduct {
                title: product.title.clone(),
                handle: product.handle.clone(),
                colors: variant_colors.into_iter().map(str::to_owned).collect(),
                source: ColorSource::VariantOptions,
            });
            continue;
        }

        classification.without_colors.push(colorless(product)?);
    }

    Ok(classification)
}

/// Returns the declared values of the first product-level `color` option.
///
/// `Some(&[])` is returned for a color option with no values: the presence
/// of the option alone is what marks the product as colored.
#[must_use]
pub fn product_option_colors(product: &Product) -> Option<&[String]> {
    product
        .options
        .iter()
        .find(|option| option.is_color())
        .map(|option| option.values.as_slice())
}

/// Collects the distinct `color` values selected across all variants.
///
/// Sorted only as a side effect of the set type; callers must not rely on
/// the order.
#[must_use]
pub fn variant_option_colors(product: &Product) -> BTreeSet<&str> {
    product
        .variants
        .iter()
        .flat_map(|variant| variant.selected_options.iter())
        .filter(|selected| selected.is_color())
        .map(|selected| selected.value.as_str())
        .collect()
}

fn colorless(product: &Product) -> Result<ColorlessProduct, ClassifyError> {
    let missing = |field| ClassifyError::MalformedProduct {
        title: product.title.clone(),
        handle: product.handle.clone(),
        field,
    };

    let product_type = product.product_type.clone().ok_or_else(|| missing("productType"))?;
    let tags = product.tags.clone().ok_or_else(|| missing("tags"))?;

    Ok(ColorlessProduct {
        title: product.title.clone(),
        handle: product.handle.clone(),
        product_type,
        tags,
    })
}

#[cfg(test)]
#[path = "classify_test.rs"]
mod tests;
