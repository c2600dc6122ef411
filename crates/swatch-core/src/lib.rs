//! Catalog model, color classification, and configuration shared by the
//! storefront client and the `swatch` binary.

mod app_config;
pub mod catalog;
pub mod classify;
pub mod config;

pub use app_config::StorefrontConfig;
pub use catalog::{Product, ProductOption, SelectedOption, Variant};
pub use classify::{
    classify, product_option_colors, variant_option_colors, Classification, ClassifyError,
    ColorSource, ColoredProduct, ColorlessProduct,
};
pub use config::{
    build_storefront_config, load_storefront_config, load_storefront_config_from_env,
    load_storefront_config_from_file, ConfigError,
};
