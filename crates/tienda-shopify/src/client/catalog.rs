//! Lazy catalog paging for `AdminClient`.

use std::collections::HashSet;

use futures::stream::{self, Stream};
use tienda_core::Product;

use crate::error::AdminError;
use crate::pagination::next_cursor;

use super::AdminClient;

/// Lazy, restartable walk over the store's product catalog.
///
/// Each call to [`CatalogPager::next_batch`] fetches exactly one page. Nothing
/// is buffered between pages, so callers choose between streaming the catalog
/// and materializing it with [`AdminClient::fetch_all_products`].
pub struct CatalogPager<'a> {
    client: &'a AdminClient,
    page_size: u32,
    cursor: Option<String>,
    seen_cursors: HashSet<String>,
    pages_fetched: usize,
    exhausted: bool,
}

impl<'a> CatalogPager<'a> {
    fn new(client: &'a AdminClient, page_size: u32) -> Self {
        Self {
            client,
            page_size,
            cursor: None,
            seen_cursors: HashSet::new(),
            pages_fetched: 0,
            exhausted: false,
        }
    }

    /// Fetches the next page of products.
    ///
    /// Returns `Ok(None)` once the last page has been consumed. On error the
    /// pager keeps its position, so the same page is requested on the next call.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`AdminClient::fetch_products_page`].
    /// Returns [`AdminError::MissingCursor`] if a page claims a successor without
    /// a cursor and [`AdminError::RepeatedCursor`] if it hands back a cursor
    /// already followed since the last restart.
    pub async fn next_batch(&mut self) -> Result<Option<Vec<Product>>, AdminError> {
        if self.exhausted {
            return Ok(None);
        }

        let page = self.pages_fetched + 1;
        let response = self
            .client
            .fetch_products_page(self.page_size, self.cursor.as_deref())
            .await?;
        let cursor = next_cursor(&response.page_info, page)?;
        if let Some(next) = &cursor {
            if self.seen_cursors.contains(next) {
                return Err(AdminError::RepeatedCursor {
                    endpoint: self.client.endpoint().to_owned(),
                    cursor: next.clone(),
                    page,
                });
            }
        }

        tracing::debug!(
            page,
            count = response.products.len(),
            has_next_page = cursor.is_some(),
            "fetched catalog page"
        );

        self.pages_fetched = page;
        self.exhausted = cursor.is_none();
        if let Some(next) = &cursor {
            self.seen_cursors.insert(next.clone());
        }
        self.cursor = cursor;
        Ok(Some(response.products))
    }

    /// Rewinds to the first page.
    pub fn restart(&mut self) {
        self.cursor = None;
        self.seen_cursors.clear();
        self.pages_fetched = 0;
        self.exhausted = false;
    }

    /// Number of pages successfully fetched since the last restart.
    #[must_use]
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    /// Adapts the pager into a stream of product batches.
    ///
    /// The stream ends after the last page or after the first error.
    pub fn into_stream(self) -> impl Stream<Item = Result<Vec<Product>, AdminError>> + 'a {
        stream::try_unfold(self, |mut pager| async move {
            let batch = pager.next_batch().await?;
            Ok::<_, AdminError>(batch.map(|batch| (batch, pager)))
        })
    }
}

impl AdminClient {
    /// Starts a lazy walk over the catalog, `page_size` products per request.
    #[must_use]
    pub fn catalog(&self, page_size: u32) -> CatalogPager<'_> {
        CatalogPager::new(self, page_size)
    }

    /// Fetches the whole catalog.
    ///
    /// **All-or-nothing semantics**: on any page failure the products from
    /// earlier pages are discarded and the error is returned.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`CatalogPager::next_batch`].
    pub async fn fetch_all_products(&self, page_size: u32) -> Result<Vec<Product>, AdminError> {
        let mut pager = self.catalog(page_size);
        let mut all_products: Vec<Product> = Vec::new();

        while let Some(batch) = pager.next_batch().await? {
            all_products.extend(batch);
        }

        tracing::info!(
            pages = pager.pages_fetched(),
            products = all_products.len(),
            "fetched full catalog"
        );
        Ok(all_products)
    }
}
