//! Shopify Admin GraphQL request and response shapes.
//!
//! ## Notes on the observed response shape
//!
//! ### Envelope
//! Every response is `{ "data": ..., "errors": [...] }`. `errors` is omitted
//! on success. On a query-level failure `data` may be `null` or absent.
//!
//! ### Media nodes
//! `Product.media` is a union over `MediaImage`, `Video`, `ExternalVideo` and
//! `Model3d`. Only `MediaImage` carries `image { url }`; the other kinds come
//! back with just `id` and `mediaContentType`, so `image` is optional here.
//! `image` itself can be `null` while an upload is still processing.
//!
//! ### `productDeleteMedia`
//! Returns `deletedMediaIds` (nullable) and `mediaUserErrors`. User errors are
//! reported with HTTP 200 and no top-level `errors`, so callers must inspect
//! the payload.

use serde::{Deserialize, Serialize};

/// Body of a GraphQL POST.
#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a, V> {
    pub query: &'a str,
    pub variables: V,
}

/// Standard GraphQL response envelope.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,

    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// Variables for the catalog page query.
#[derive(Debug, Serialize)]
pub struct CatalogVariables<'a> {
    pub first: u32,
    pub after: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
pub struct CatalogData {
    pub products: ProductConnection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductConnection {
    pub page_info: PageInfo,
    #[serde(default)]
    pub nodes: Vec<ProductNode>,
}

/// Relay-style pagination info returned with every connection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    #[serde(default)]
    pub end_cursor: Option<String>,
}

/// A product node as returned by the catalog query.
#[derive(Debug, Deserialize)]
pub struct ProductNode {
    /// Global ID, e.g. `"gid://shopify/Product/7301234567890"`.
    pub id: String,
    pub handle: String,
    pub title: String,
    #[serde(default)]
    pub media: MediaConnection,
}

#[derive(Debug, Default, Deserialize)]
pub struct MediaConnection {
    #[serde(default)]
    pub nodes: Vec<MediaNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaNode {
    pub id: String,

    /// `"IMAGE"`, `"VIDEO"`, `"EXTERNAL_VIDEO"` or `"MODEL_3D"`.
    #[serde(default)]
    pub media_content_type: Option<String>,

    /// Present only for `MediaImage` nodes.
    #[serde(default)]
    pub image: Option<ImageNode>,
}

impl MediaNode {
    /// Media type as reported by the platform, `"UNKNOWN"` when absent.
    #[must_use]
    pub fn kind(&self) -> &str {
        self.media_content_type.as_deref().unwrap_or("UNKNOWN")
    }
}

#[derive(Debug, Deserialize)]
pub struct ImageNode {
    pub url: String,
}

/// Variables for the `productDeleteMedia` mutation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteMediaVariables<'a> {
    pub product_id: &'a str,
    pub media_ids: &'a [String],
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteMediaData {
    #[serde(default)]
    pub product_delete_media: Option<ProductDeleteMediaPayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDeleteMediaPayload {
    #[serde(default)]
    pub deleted_media_ids: Option<Vec<String>>,
    #[serde(default)]
    pub media_user_errors: Vec<MediaUserError>,
}

#[derive(Debug, Deserialize)]
pub struct MediaUserError {
    /// Path to the offending input, e.g. `["mediaIds", "0"]`.
    #[serde(default)]
    pub field: Option<Vec<String>>,
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
}

impl std::fmt::Display for MediaUserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(field) = self.field.as_ref().filter(|f| !f.is_empty()) {
            write!(f, "{}: ", field.join("."))?;
        }
        write!(f, "{}", self.message)?;
        if let Some(code) = &self.code {
            write!(f, " ({code})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_page_deserializes_mixed_media() {
        let body = serde_json::json!({
            "data": {
                "products": {
                    "pageInfo": { "hasNextPage": true, "endCursor": "eyJsYXN0X2lkIjo3fQ" },
                    "nodes": [{
                        "id": "gid://shopify/Product/1",
                        "handle": "camiseta-argentina-1986",
                        "title": "Camiseta Argentina 1986",
                        "media": { "nodes": [
                            { "id": "gid://shopify/MediaImage/10", "mediaContentType": "IMAGE",
                              "image": { "url": "https://cdn.shopify.com/files/abc.jpg?v=1" } },
                            { "id": "gid://shopify/Video/11", "mediaContentType": "VIDEO" }
                        ]}
                    }]
                }
            }
        });
        let parsed: GraphQlResponse<CatalogData> = serde_json::from_value(body).unwrap();
        assert!(parsed.errors.is_empty());
        let products = parsed.data.unwrap().products;
        assert!(products.page_info.has_next_page);
        assert_eq!(
            products.page_info.end_cursor.as_deref(),
            Some("eyJsYXN0X2lkIjo3fQ")
        );
        let media = &products.nodes[0].media.nodes;
        assert_eq!(media.len(), 2);
        assert!(media[0].image.is_some());
        assert!(media[1].image.is_none());
        assert_eq!(media[1].kind(), "VIDEO");
    }

    #[test]
    fn media_kind_defaults_to_unknown() {
        let node: MediaNode =
            serde_json::from_value(serde_json::json!({ "id": "gid://shopify/Model3d/4" })).unwrap();
        assert_eq!(node.kind(), "UNKNOWN");
    }

    #[test]
    fn error_envelope_without_data() {
        let body = serde_json::json!({
            "errors": [{ "message": "Throttled", "extensions": { "code": "THROTTLED" } }]
        });
        let parsed: GraphQlResponse<CatalogData> = serde_json::from_value(body).unwrap();
        assert!(parsed.data.is_none());
        assert_eq!(parsed.errors[0].message, "Throttled");
    }

    #[test]
    fn delete_variables_serialize_camel_case() {
        let ids = vec!["gid://shopify/MediaImage/2".to_string()];
        let vars = DeleteMediaVariables {
            product_id: "gid://shopify/Product/1",
            media_ids: &ids,
        };
        let value = serde_json::to_value(&vars).unwrap();
        assert_eq!(value["productId"], "gid://shopify/Product/1");
        assert_eq!(value["mediaIds"][0], "gid://shopify/MediaImage/2");
    }

    #[test]
    fn media_user_error_display_includes_field_and_code() {
        let err = MediaUserError {
            field: Some(vec!["mediaIds".into(), "0".into()]),
            message: "Media does not exist".into(),
            code: Some("MEDIA_DOES_NOT_EXIST".into()),
        };
        assert_eq!(
            err.to_string(),
            "mediaIds.0: Media does not exist (MEDIA_DOES_NOT_EXIST)"
        );
    }

    #[test]
    fn media_user_error_display_message_only() {
        let err = MediaUserError {
            field: None,
            message: "Something went wrong".into(),
            code: None,
        };
        assert_eq!(err.to_string(), "Something went wrong");
    }
}
