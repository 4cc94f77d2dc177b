//! Duplicate image detection for product media.
//!
//! Shopify stores uploaded images under a content-hash filename and appends a
//! suffix when the same file is uploaded again, e.g.
//!
//! ```text
//! https://cdn.shopify.com/s/files/1/0612/files/a1b2c3d4.jpg?v=1700000000
//! https://cdn.shopify.com/s/files/1/0612/files/a1b2c3d4_1.jpg?v=1700000123
//! ```
//!
//! Both reduce to the dedup key `a1b2c3d4`. The key is heuristic: it relies on
//! the platform keeping this naming scheme, and a change there would silently
//! misclassify assets.

use std::collections::HashMap;

use crate::products::MediaAsset;

/// Derives the dedup key from a media URL.
///
/// Takes the last path segment, then cuts it at the first `?`, the first `_`
/// and the first `.`, in that order. Never fails; a malformed URL can yield an
/// empty key.
#[must_use]
pub fn dedup_key(url: &str) -> String {
    let filename = url.rsplit('/').next().unwrap_or(url);
    let filename = cut_at(filename, '?');
    let filename = cut_at(filename, '_');
    cut_at(filename, '.').to_owned()
}

fn cut_at(s: &str, delimiter: char) -> &str {
    s.split(delimiter).next().unwrap_or(s)
}

/// Media split into the assets to keep and the ones that repeat an earlier key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaPartition {
    pub unique: Vec<MediaAsset>,
    pub duplicates: Vec<MediaAsset>,
}

impl MediaPartition {
    #[must_use]
    pub fn has_duplicates(&self) -> bool {
        !self.duplicates.is_empty()
    }

    /// IDs of the duplicate assets, in input order.
    #[must_use]
    pub fn duplicate_ids(&self) -> Vec<String> {
        self.duplicates.iter().map(|m| m.id.clone()).collect()
    }
}

/// Partitions `media` by dedup key.
///
/// The first asset seen for a key is kept; every later asset with the same key
/// is a duplicate. Order within both halves follows the input order, and
/// `unique.len() + duplicates.len() == media.len()` always holds.
#[must_use]
pub fn partition_media(media: &[MediaAsset]) -> MediaPartition {
    let mut first_seen: HashMap<String, &MediaAsset> = HashMap::with_capacity(media.len());
    let mut partition = MediaPartition::default();

    for asset in media {
        let key = dedup_key(&asset.url);
        if first_seen.contains_key(&key) {
            partition.duplicates.push(asset.clone());
        } else {
            first_seen.insert(key, asset);
            partition.unique.push(asset.clone());
        }
    }

    partition
}
