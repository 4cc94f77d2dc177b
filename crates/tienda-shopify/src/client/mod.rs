//! HTTP client for the Shopify Admin GraphQL API.

mod catalog;
mod delete;
mod origin;

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tienda_core::ShopifyAdminConfig;

use crate::error::AdminError;
use crate::graphql::{CATALOG_PAGE_OPERATION, CATALOG_PAGE_QUERY};
use crate::normalize::normalize_product;
use crate::types::{CatalogData, CatalogVariables, GraphQlRequest, GraphQlResponse, PageInfo};

pub use catalog::CatalogPager;
pub use origin::store_origin;

const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// One page of the product catalog, already converted to core types.
#[derive(Debug)]
pub struct ProductPage {
    pub products: Vec<tienda_core::Product>,
    pub page_info: PageInfo,
}

/// Client for the Shopify Admin GraphQL endpoint of a single store.
///
/// Every call is a single POST; nothing is retried. Non-2xx responses,
/// GraphQL `errors` and missing `data` all surface as typed [`AdminError`]s.
pub struct AdminClient {
    client: Client,
    endpoint: String,
    access_token: String,
}

impl AdminClient {
    /// Creates an `AdminClient` from explicit admin credentials.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::InvalidStoreDomain`] if the store domain cannot be
    /// resolved to an origin, or [`AdminError::Http`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(
        config: &ShopifyAdminConfig,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, AdminError> {
        let endpoint = Self::endpoint_url(&config.store_domain, &config.api_version)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            endpoint,
            access_token: config.access_token.clone(),
        })
    }

    /// The GraphQL endpoint this client posts to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetches one page of products with their image media.
    ///
    /// # Errors
    ///
    /// - [`AdminError::Unauthorized`]: HTTP 401/403.
    /// - [`AdminError::Throttled`]: HTTP 429.
    /// - [`AdminError::UnexpectedStatus`]: any other non-2xx status.
    /// - [`AdminError::GraphQl`]: the response carries an `errors` array.
    /// - [`AdminError::MissingData`]: the response has no `data`.
    /// - [`AdminError::Deserialize`]: the body does not match the query shape.
    /// - [`AdminError::Http`]: network or TLS failure.
    pub async fn fetch_products_page(
        &self,
        first: u32,
        after: Option<&str>,
    ) -> Result<ProductPage, AdminError> {
        let data: CatalogData = self
            .execute(
                CATALOG_PAGE_OPERATION,
                CATALOG_PAGE_QUERY,
                CatalogVariables { first, after },
            )
            .await?;

        let connection = data.products;
        Ok(ProductPage {
            products: connection
                .nodes
                .into_iter()
                .map(normalize_product)
                .collect(),
            page_info: connection.page_info,
        })
    }

    /// Posts a GraphQL document and unwraps the response envelope.
    pub(super) async fn execute<V, T>(
        &self,
        operation: &str,
        query: &str,
        variables: V,
    ) -> Result<T, AdminError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(&self.endpoint)
            .header(ACCESS_TOKEN_HEADER, &self.access_token)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&GraphQlRequest { query, variables })
            .send()
            .await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(AdminError::Unauthorized {
                status: status.as_u16(),
                endpoint: self.endpoint.clone(),
            });
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after_secs = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(2);
            return Err(AdminError::Throttled {
                endpoint: self.endpoint.clone(),
                retry_after_secs,
            });
        }

        if !status.is_success() {
            return Err(AdminError::UnexpectedStatus {
                status: status.as_u16(),
                endpoint: self.endpoint.clone(),
            });
        }

        let body = response.text().await?;
        let envelope = serde_json::from_str::<GraphQlResponse<T>>(&body).map_err(|e| {
            AdminError::Deserialize {
                context: format!("{operation} response"),
                source: e,
            }
        })?;

        if !envelope.errors.is_empty() {
            let messages = envelope
                .errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(AdminError::GraphQl {
                operation: operation.to_owned(),
                messages,
            });
        }

        envelope.data.ok_or_else(|| AdminError::MissingData {
            operation: operation.to_owned(),
        })
    }

    /// Builds the Admin GraphQL URL for a store and API version.
    fn endpoint_url(store_domain: &str, api_version: &str) -> Result<String, AdminError> {
        let origin = store_origin(store_domain)?;
        Ok(format!(
            "{origin}/admin/api/{}/graphql.json",
            api_version.trim().trim_matches('/')
        ))
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
