/// Credentials and addressing for the Shopify Admin GraphQL API.
///
/// Passed explicitly into the admin client; nothing reads these values from
/// the environment after startup.
#[derive(Clone)]
pub struct ShopifyAdminConfig {
    /// Store host (`"albiceleste-retro.myshopify.com"`) or full origin
    /// (`"http://127.0.0.1:8080"`).
    pub store_domain: String,
    /// Admin API access token sent as `X-Shopify-Access-Token`.
    pub access_token: String,
    /// Admin API version segment, e.g. `"2024-10"`.
    pub api_version: String,
}

impl std::fmt::Debug for ShopifyAdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopifyAdminConfig")
            .field("store_domain", &self.store_domain)
            .field("access_token", &"[redacted]")
            .field("api_version", &self.api_version)
            .finish()
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub shopify: ShopifyAdminConfig,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub catalog_page_size: u32,
    pub product_delay_ms: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("shopify", &self.shopify)
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("catalog_page_size", &self.catalog_page_size)
            .field("product_delay_ms", &self.product_delay_ms)
            .finish()
    }
}
