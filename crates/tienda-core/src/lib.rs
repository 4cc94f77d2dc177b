pub mod app_config;
pub mod config;
pub mod media;
pub mod products;

use thiserror::Error;

pub use app_config::{AppConfig, ShopifyAdminConfig};
pub use config::{load_app_config, load_app_config_from_env};
pub use media::{dedup_key, partition_media, MediaPartition};
pub use products::{MediaAsset, Product};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
