//! Store origin resolution for the admin client.

use crate::error::AdminError;

/// Resolves a configured store domain to a `scheme://host[:port]` origin.
///
/// A bare host (`"albiceleste-retro.myshopify.com"`) is assumed to be HTTPS.
/// A full origin (`"http://127.0.0.1:8080"`) is used as given. Any path is
/// discarded so the admin endpoint always hangs off the store root.
///
/// # Errors
///
/// Returns [`AdminError::InvalidStoreDomain`] if the value is empty, does not
/// parse as a URL, has no host, or uses a scheme other than HTTP(S).
pub fn store_origin(store_domain: &str) -> Result<String, AdminError> {
    let trimmed = store_domain.trim().trim_end_matches('/');
    let invalid = |reason: String| AdminError::InvalidStoreDomain {
        store_domain: store_domain.to_owned(),
        reason,
    };

    if trimmed.is_empty() {
        return Err(invalid("store domain is empty".to_owned()));
    }

    let candidate = if trimmed.contains("://") {
        trimmed.to_owned()
    } else {
        format!("https://{trimmed}")
    };

    let url = reqwest::Url::parse(&candidate).map_err(|e| invalid(e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme \"{}\"", url.scheme())));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(invalid("no host".to_owned()));
    }

    Ok(url.origin().ascii_serialization())
}
