use crate::app_config::{AppConfig, ShopifyAdminConfig};
use crate::ConfigError;

/// Largest page size the Admin GraphQL `products` connection accepts.
const MAX_CATALOG_PAGE_SIZE: u32 = 250;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it from a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        match lookup(var) {
            Ok(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
            _ => Err(ConfigError::MissingEnvVar(var.to_string())),
        }
    };

    let or_default = |var: &str, default: &str| -> String {
        match lookup(var) {
            Ok(value) if !value.trim().is_empty() => value.trim().to_string(),
            _ => default.to_string(),
        }
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let store_domain = require("SHOPIFY_STORE_DOMAIN")?;
    let access_token = require("SHOPIFY_ADMIN_ACCESS_TOKEN")?;
    let api_version = or_default("SHOPIFY_API_VERSION", "2024-10");

    let log_level = or_default("TIENDA_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("TIENDA_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("TIENDA_USER_AGENT", "tienda-media/0.1");
    let catalog_page_size = parse_u32("TIENDA_CATALOG_PAGE_SIZE", "50")?;
    let product_delay_ms = parse_u64("TIENDA_PRODUCT_DELAY_MS", "500")?;

    if catalog_page_size == 0 || catalog_page_size > MAX_CATALOG_PAGE_SIZE {
        return Err(ConfigError::InvalidEnvVar {
            var: "TIENDA_CATALOG_PAGE_SIZE".to_string(),
            reason: format!("must be between 1 and {MAX_CATALOG_PAGE_SIZE}, got {catalog_page_size}"),
        });
    }

    Ok(AppConfig {
        shopify: ShopifyAdminConfig {
            store_domain,
            access_token,
            api_version,
        },
        log_level,
        request_timeout_secs,
        user_agent,
        catalog_page_size,
        product_delay_ms,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
