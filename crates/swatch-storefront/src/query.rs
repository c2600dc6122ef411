/// Maximum products requested in one call (Storefront API page ceiling).
pub const PRODUCTS_PAGE_SIZE: u32 = 100;

/// Maximum variants requested per product.
pub const VARIANTS_PER_PRODUCT: u32 = 20;

/// Product catalog query: identity, classification fields, product-level
/// options, and the selected options of each variant.
pub const PRODUCTS_QUERY: &str = r"
{
  products(first: 100) {
    edges {
      node {
        id
        title
        handle
        productType
        tags
        options {
          name
          values
        }
        variants(first: 20) {
          edges {
            node {
              id
              title
              selectedOptions {
                name
                value
              }
            }
          }
        }
      }
    }
  }
}
";
