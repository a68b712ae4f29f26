//! Inventory screen core: wire models, REST client, lookup cache, product
//! form and the controller state that ties them together.

pub mod config;
pub mod display;
pub mod error;
pub mod form;
pub mod http_client;
pub mod inventory;
pub mod lookup;
pub mod models;

pub use config::ApiConfig;
pub use error::{Failure, FailureKind, InventoryError, Result};
pub use http_client::{InventoryApi, InventoryHttpClient};
pub use inventory::{InventoryAction, InventoryManager, InventoryState};
pub use lookup::{LookupCache, LookupKind, LookupOption};
pub use models::{Product, ProductPayload, RecordId};
