use serde::{Deserialize, Serialize};

/// A catalog product as read from the Shopify Admin API, reduced to the
/// fields media reconciliation needs. Never created or destroyed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Admin GraphQL global ID, e.g. `"gid://shopify/Product/7301234567890"`.
    pub id: String,
    /// URL slug, e.g. `"camiseta-argentina-1986-titular"`.
    pub handle: String,
    pub title: String,
    /// Image media in the order the platform returns them.
    pub media: Vec<MediaAsset>,
}

impl Product {
    /// Returns `true` when the product has no image media attached.
    #[must_use]
    pub fn has_media(&self) -> bool {
        !self.media.is_empty()
    }
}

/// One image attached to a [`Product`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaAsset {
    /// Admin GraphQL global ID, e.g. `"gid://shopify/MediaImage/2345"`.
    pub id: String,
    /// CDN URL of the image file.
    pub url: String,
}

impl MediaAsset {
    #[must_use]
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
        }
    }
}
