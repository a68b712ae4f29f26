// Pure render functions. Each one reads `InventoryState`, draws, and hands
// back the actions the user triggered; none of them talk to the API.

pub mod dialogs;
pub mod form;
pub mod sidebar;
pub mod table;

pub use form::FormView;
