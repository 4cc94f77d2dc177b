use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdminError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Shopify rejected the access token for {endpoint} (HTTP {status})")]
    Unauthorized { status: u16, endpoint: String },

    #[error("throttled by {endpoint} (retry after {retry_after_secs}s)")]
    Throttled {
        endpoint: String,
        retry_after_secs: u64,
    },

    #[error("unexpected HTTP status {status} from {endpoint}")]
    UnexpectedStatus { status: u16, endpoint: String },

    #[error("GraphQL errors in {operation}: {messages}")]
    GraphQl { operation: String, messages: String },

    #[error("GraphQL response for {operation} has no data")]
    MissingData { operation: String },

    #[error("media deletion rejected for product {product_id}: {messages}")]
    UserErrors {
        product_id: String,
        messages: String,
    },

    #[error("catalog page {page} reports more pages but no end cursor")]
    MissingCursor { page: usize },

    #[error("catalog page {page} from {endpoint} repeats cursor \"{cursor}\"")]
    RepeatedCursor {
        endpoint: String,
        cursor: String,
        page: usize,
    },

    #[error("invalid store domain \"{store_domain}\": {reason}")]
    InvalidStoreDomain {
        store_domain: String,
        reason: String,
    },
}
