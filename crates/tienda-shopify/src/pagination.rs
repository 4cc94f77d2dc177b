//! Cursor-based pagination over Admin GraphQL connections.
//!
//! Each connection returns a `pageInfo` block:
//!
//! ```text
//! pageInfo { hasNextPage: true, endCursor: "eyJsYXN0X2lkIjo3MzAxMjM0NTY3ODkwfQ" }
//! ```
//!
//! The next page is requested by passing `endCursor` as `after`. The last page
//! reports `hasNextPage: false`; its `endCursor` is ignored.

use crate::error::AdminError;
use crate::types::PageInfo;

/// Returns the cursor for the page after `page_info`, or `None` on the last page.
///
/// `page` is the 1-based number of the page that produced `page_info` and is
/// only used for error reporting.
///
/// # Errors
///
/// Returns [`AdminError::MissingCursor`] if the page claims a successor but
/// carries no usable `endCursor`.
pub fn next_cursor(page_info: &PageInfo, page: usize) -> Result<Option<String>, AdminError> {
    if !page_info.has_next_page {
        return Ok(None);
    }

    match page_info.end_cursor.as_deref() {
        Some(cursor) if !cursor.is_empty() => Ok(Some(cursor.to_owned())),
        _ => Err(AdminError::MissingCursor { page }),
    }
}
