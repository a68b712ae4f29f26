pub mod actions;
pub mod filter;
pub mod manager;
pub mod requests;
pub mod state;


pub use actions::{CloseReason, InventoryAction};
pub use filter::filter_products;
pub use manager::{ConfirmPrompt, InventoryManager};
pub use requests::{execute, load_initial, save_and_refetch, Completion, Effect, InitialData};
pub use state::{DeletePrompt, InventoryState, LoadGuard};
