use crate::error::{InventoryError, Result};

pub const API_BASE_ENV: &str = "INVENTORY_API_BASE";
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Where the REST API lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(InventoryError::Config("empty API base URL".to_string()));
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(InventoryError::Config(format!(
                "API base URL must start with http:// or https://, got {}",
                base_url
            )));
        }
        Ok(Self {
            base_url: base_url.to_string(),
        })
    }

    /// Runtime environment first (native only), then the value baked in at
    /// build time, then the local default.
    pub fn from_env() -> Result<Self> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Ok(value) = std::env::var(API_BASE_ENV) {
                log::info!("[CONFIG] Using {} from environment", API_BASE_ENV);
                return Self::new(&value);
            }
        }

        match option_env!("INVENTORY_API_BASE") {
            Some(value) => {
                log::info!("[CONFIG] Using {} captured at build time", API_BASE_ENV);
                Self::new(value)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
