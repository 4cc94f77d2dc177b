//! GraphQL documents sent to the Shopify Admin API.

/// One page of products with their media.
///
/// `media(first: 250)` covers the platform's per-product media cap, so a
/// single request always returns every asset of a product.
pub const CATALOG_PAGE_QUERY: &str = r"
query CatalogMediaPage($first: Int!, $after: String) {
  products(first: $first, after: $after) {
    pageInfo {
      hasNextPage
      endCursor
    }
    nodes {
      id
      handle
      title
      media(first: 250) {
        nodes {
          id
          mediaContentType
          ... on MediaImage {
            image {
              url
            }
          }
        }
      }
    }
  }
}
";

/// Bulk-deletes media from a single product.
pub const DELETE_PRODUCT_MEDIA_MUTATION: &str = r"
mutation DeleteProductMedia($productId: ID!, $mediaIds: [ID!]!) {
  productDeleteMedia(productId: $productId, mediaIds: $mediaIds) {
    deletedMediaIds
    mediaUserErrors {
      field
      message
      code
    }
  }
}
";

/// Operation names used in logs and errors.
pub const CATALOG_PAGE_OPERATION: &str = "CatalogMediaPage";
pub const DELETE_PRODUCT_MEDIA_OPERATION: &str = "DeleteProductMedia";
