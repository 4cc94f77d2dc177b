//! Duplicate media reconciliation over a fetched catalog.
//!
//! Products are visited one at a time, in catalog order. Each product ends in
//! exactly one [`ProductStatus`]; a failed deletion is recorded on that product
//! and never stops the run.

use std::future::Future;
use std::time::Duration;

use tienda_core::{partition_media, MediaAsset, Product};
use tienda_shopify::{AdminClient, AdminError};

use crate::report;

/// Deletes media from a product. Implemented by [`AdminClient`].
pub(crate) trait MediaDeleter {
    /// Deletes `media_ids` from `product_id`, returning how many were removed.
    fn delete_media(
        &self,
        product_id: &str,
        media_ids: &[String],
    ) -> impl Future<Output = Result<usize, AdminError>>;
}

impl MediaDeleter for AdminClient {
    async fn delete_media(
        &self,
        product_id: &str,
        media_ids: &[String],
    ) -> Result<usize, AdminError> {
        self.delete_product_media(product_id, media_ids).await
    }
}

/// How a run treats duplicates. Only `Execute` carries a deleter, so a dry
/// run has nothing to delete with.
pub(crate) enum Mode<D> {
    DryRun,
    Execute(D),
}

impl<D> Mode<D> {
    pub(crate) fn is_dry_run(&self) -> bool {
        matches!(self, Mode::DryRun)
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Mode::DryRun => "dry-run",
            Mode::Execute(_) => "execute",
        }
    }
}

/// Terminal state of one product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ProductStatus {
    /// The product has no image media.
    Skip,
    /// Every image has a distinct dedup key.
    Clean,
    /// Dry run: these assets would be deleted.
    DuplicatesFound { would_delete: Vec<MediaAsset> },
    /// Execute: the duplicates were deleted.
    Cleaned { deleted: usize },
    /// Execute: the deletion failed.
    Error { message: String },
}

impl ProductStatus {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Skip => "skip",
            ProductStatus::Clean => "ok",
            ProductStatus::DuplicatesFound { .. } => "duplicates_found",
            ProductStatus::Cleaned { .. } => "cleaned",
            ProductStatus::Error { .. } => "error",
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct ProductOutcome {
    pub product_id: String,
    pub handle: String,
    pub media_count: usize,
    pub unique_count: usize,
    pub duplicate_count: usize,
    pub status: ProductStatus,
}

/// Per-run counters. `with_duplicates` counts every product that had
/// duplicates, whatever happened to them afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct RunStats {
    pub total: usize,
    pub without_images: usize,
    pub clean: usize,
    pub with_duplicates: usize,
    pub cleaned: usize,
    pub errors: usize,
    pub total_images_deleted: usize,
    pub duplicate_images: usize,
}

impl RunStats {
    pub(crate) fn record(&mut self, outcome: &ProductOutcome) {
        self.total += 1;
        self.duplicate_images += outcome.duplicate_count;
        match &outcome.status {
            ProductStatus::Skip => self.without_images += 1,
            ProductStatus::Clean => self.clean += 1,
            ProductStatus::DuplicatesFound { .. } => self.with_duplicates += 1,
            ProductStatus::Cleaned { deleted } => {
                self.with_duplicates += 1;
                self.cleaned += 1;
                self.total_images_deleted += deleted;
            }
            ProductStatus::Error { .. } => {
                self.with_duplicates += 1;
                self.errors += 1;
            }
        }
    }
}

#[derive(Debug)]
pub(crate) struct RunReport {
    pub outcomes: Vec<ProductOutcome>,
    pub stats: RunStats,
}

pub(crate) struct Reconciler<D> {
    mode: Mode<D>,
    product_delay: Duration,
}

impl<D: MediaDeleter> Reconciler<D> {
    /// `product_delay` is slept after every product; zero disables it.
    pub(crate) fn new(mode: Mode<D>, product_delay: Duration) -> Self {
        Self {
            mode,
            product_delay,
        }
    }

    pub(crate) fn mode(&self) -> &Mode<D> {
        &self.mode
    }

    /// Classifies one product and, in execute mode, deletes its duplicates.
    pub(crate) async fn process_product(&self, product: &Product) -> ProductOutcome {
        let partition = partition_media(&product.media);

        let status = if !product.has_media() {
            ProductStatus::Skip
        } else if !partition.has_duplicates() {
            ProductStatus::Clean
        } else {
            match &self.mode {
                Mode::DryRun => ProductStatus::DuplicatesFound {
                    would_delete: partition.duplicates.clone(),
                },
                Mode::Execute(deleter) => {
                    match deleter
                        .delete_media(&product.id, &partition.duplicate_ids())
                        .await
                    {
                        Ok(deleted) => ProductStatus::Cleaned { deleted },
                        Err(e) => {
                            tracing::warn!(
                                product = %product.handle,
                                error = %e,
                                "failed to delete duplicate media"
                            );
                            ProductStatus::Error {
                                message: e.to_string(),
                            }
                        }
                    }
                }
            }
        };

        ProductOutcome {
            product_id: product.id.clone(),
            handle: product.handle.clone(),
            media_count: product.media.len(),
            unique_count: partition.unique.len(),
            duplicate_count: partition.duplicates.len(),
            status,
        }
    }

    /// Processes `products` in order, printing one line per product.
    pub(crate) async fn run(&self, products: &[Product]) -> RunReport {
        let mut stats = RunStats::default();
        let mut outcomes = Vec::with_capacity(products.len());

        tracing::info!(
            mode = self.mode.label(),
            products = products.len(),
            "starting media reconciliation"
        );

        for (idx, product) in products.iter().enumerate() {
            let outcome = self.process_product(product).await;
            tracing::debug!(
                product_id = %outcome.product_id,
                status = outcome.status.as_str(),
                unique = outcome.unique_count,
                duplicates = outcome.duplicate_count,
                "processed product"
            );
            stats.record(&outcome);
            println!(
                "{}",
                report::render_outcome(idx + 1, products.len(), &outcome)
            );
            outcomes.push(outcome);

            if !self.product_delay.is_zero() {
                tokio::time::sleep(self.product_delay).await;
            }
        }

        RunReport { outcomes, stats }
    }
}

#[cfg(test)]
#[path = "reconcile_test.rs"]
mod tests;
