//! Conversion from Admin GraphQL product nodes to [`tienda_core::Product`].

use tienda_core::{MediaAsset, Product};

use crate::types::{MediaNode, ProductNode};

/// Converts a raw [`ProductNode`] into a [`Product`].
///
/// Media without an image URL (videos, 3D models, images still processing)
/// are dropped: they have no filename to derive a dedup key from. The order of
/// the remaining media is preserved.
#[must_use]
pub fn normalize_product(node: ProductNode) -> Product {
    let handle = node.handle;
    let media: Vec<MediaAsset> = node
        .media
        .nodes
        .into_iter()
        .filter_map(|media| normalize_media(&handle, media))
        .collect();

    Product {
        id: node.id,
        handle,
        title: node.title,
        media,
    }
}

fn normalize_media(handle: &str, node: MediaNode) -> Option<MediaAsset> {
    let has_url = node
        .image
        .as_ref()
        .is_some_and(|image| !image.url.is_empty());
    if !has_url {
        tracing::debug!(
            product = %handle,
            media_id = %node.id,
            kind = node.kind(),
            "ignoring media without an image URL"
        );
        return None;
    }
    let url = node.image?.url;
    Some(MediaAsset { id: node.id, url })
}
