//! Operator-facing output for reconciliation runs.

use std::fmt::Write as _;

use crate::reconcile::{Mode, ProductOutcome, ProductStatus, RunStats};

/// One progress line for a processed product, e.g.
/// `[2/3] camiseta-argentina-1986: duplicates_found (1 of 3 images would be deleted)`.
///
/// Dry-run lines are followed by one indented line per asset that would be deleted.
pub(crate) fn render_outcome(position: usize, total: usize, outcome: &ProductOutcome) -> String {
    let prefix = format!("[{position}/{total}] {}", outcome.handle);
    match &outcome.status {
        ProductStatus::Skip => format!("{prefix}: skip (no images)"),
        ProductStatus::Clean => format!("{prefix}: ok ({} images)", outcome.media_count),
        ProductStatus::DuplicatesFound { would_delete } => {
            let mut line = format!(
                "{prefix}: duplicates_found ({} of {} images would be deleted)",
                would_delete.len(),
                outcome.media_count
            );
            for asset in would_delete {
                let _ = write!(line, "\n    - {} {}", asset.id, asset.url);
            }
            line
        }
        ProductStatus::Cleaned { deleted } => format!(
            "{prefix}: cleaned (deleted {deleted} of {} images)",
            outcome.media_count
        ),
        ProductStatus::Error { message } => format!("{prefix}: error: {message}"),
    }
}

/// Final summary table.
pub(crate) fn render_summary<D>(stats: &RunStats, mode: &Mode<D>) -> String {
    let rows = [
        ("products scanned", stats.total),
        ("without images", stats.without_images),
        ("clean", stats.clean),
        ("with duplicates", stats.with_duplicates),
        ("duplicate images found", stats.duplicate_images),
        ("cleaned", stats.cleaned),
        ("images deleted", stats.total_images_deleted),
        ("errors", stats.errors),
    ];

    let mut out = format!(
        "=== media reconciliation summary ({}) ===\n",
        mode.label()
    );
    for (label, value) in rows {
        let _ = writeln!(out, "{label:<24}{value:>8}");
    }

    if stats.errors > 0 {
        let _ = writeln!(
            out,
            "{} product(s) failed; see the error lines above",
            stats.errors
        );
    }
    if mode.is_dry_run() && stats.duplicate_images > 0 {
        let _ = writeln!(
            out,
            "re-run with --execute to delete {} duplicate image(s)",
            stats.duplicate_images
        );
    }

    out
}
