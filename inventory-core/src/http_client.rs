//! REST client for the inventory API.

use async_trait::async_trait;
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::{InventoryError, Result};
use crate::lookup::{project, LookupKind, LookupOption};
use crate::models::{Category, Product, ProductPayload, RecordId, Status, Unit};

pub const PRODUCTS_ENDPOINT: &str = "/api/productos/";

pub fn product_endpoint(id: RecordId) -> String {
    format!("{}{}/", PRODUCTS_ENDPOINT, id)
}

/// The remote operations the controller depends on.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait InventoryApi {
    async fn list_products(&self) -> Result<Vec<Product>>;

    /// Fetches one reference table and projects it to dropdown options.
    async fn load_options(&self, kind: LookupKind) -> Result<Vec<LookupOption>>;

    async fn create_product(&self, payload: &ProductPayload) -> Result<()>;

    async fn update_product(&self, id: RecordId, payload: &ProductPayload) -> Result<()>;

    async fn delete_product(&self, id: RecordId) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct InventoryHttpClient {
    config: ApiConfig,
    client: Client,
}

impl InventoryHttpClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    async fn get_json<R: DeserializeOwned>(&self, endpoint: &str) -> Result<R> {
        let url = self.config.url(endpoint);
        log::debug!("📡 [API] GET {}", url);

        let response = self.client.get(&url).send().await?;
        let response = Self::check_status(response, &url)?;

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| {
            log::error!("❌ [API] Failed to decode response from {}: {}", url, source);
            InventoryError::Decode { url, source }
        })
    }

    async fn send_payload(&self, method: Method, endpoint: &str, payload: &ProductPayload) -> Result<()> {
        let url = self.config.url(endpoint);
        log::debug!("📡 [API] {} {}", method, url);

        let response = self.client.request(method, &url).json(payload).send().await?;
        Self::check_status(response, &url)?;
        Ok(())
    }

    fn check_status(response: Response, url: &str) -> Result<Response> {
        let status = response.status();
        if !status.is_success() {
            log::error!("❌ [API] {} answered with status {}", url, status);
            return Err(InventoryError::ServerError {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl InventoryApi for InventoryHttpClient {
    async fn list_products(&self) -> Result<Vec<Product>> {
        let products: Vec<Product> = self.get_json(PRODUCTS_ENDPOINT).await?;
        log::debug!("[API] Received {} products", products.len());
        Ok(products)
    }

    async fn load_options(&self, kind: LookupKind) -> Result<Vec<LookupOption>> {
        let endpoint = kind.endpoint();
        let options = match kind {
            LookupKind::Category => project(&self.get_json::<Vec<Category>>(endpoint).await?),
            LookupKind::Unit => project(&self.get_json::<Vec<Unit>>(endpoint).await?),
            LookupKind::Status => project(&self.get_json::<Vec<Status>>(endpoint).await?),
        };
        Ok(options)
    }

    async fn create_product(&self, payload: &ProductPayload) -> Result<()> {
        self.send_payload(Method::POST, PRODUCTS_ENDPOINT, payload).await
    }

    async fn update_product(&self, id: RecordId, payload: &ProductPayload) -> Result<()> {
        self.send_payload(Method::PUT, &product_endpoint(id), payload).await
    }

    async fn delete_product(&self, id: RecordId) -> Result<()> {
        let url = self.config.url(&product_endpoint(id));
        log::debug!("📡 [API] DELETE {}", url);

        let response = self.client.delete(&url).send().await?;
        Self::check_status(response, &url)?;
        Ok(())
    }
}
