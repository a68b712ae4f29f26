use crate::form::FormField;
use crate::models::{Product, RecordId};

/// Why the modal is being closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    CloseButton,
    Cancel,
    Escape,
    OutsideClick,
    /// The save went through and the list was refetched.
    Saved,
}

#[derive(Debug, Clone)]
pub enum InventoryAction {
    // Data loading
    Load,

    // List
    SetSearch { text: String },

    // Modal
    BeginCreate,
    BeginEdit { product: Product },
    CloseModal { reason: CloseReason },
    EditField { field: FormField, value: String },
    SubmitForm,

    // Delete, behind a confirmation
    RequestDelete { id: RecordId, name: String },
    ConfirmDelete,
    CancelDelete,

    ClearError,
}

impl InventoryAction {
    pub fn description(&self) -> &'static str {
        match self {
            InventoryAction::Load => "Loading products and lookup tables",
            InventoryAction::SetSearch { .. } => "Updating search text",
            InventoryAction::BeginCreate => "Opening form for a new product",
            InventoryAction::BeginEdit { .. } => "Opening form for an existing product",
            InventoryAction::CloseModal { .. } => "Closing product form",
            InventoryAction::EditField { .. } => "Editing form field",
            InventoryAction::SubmitForm => "Submitting product form",
            InventoryAction::RequestDelete { .. } => "Asking for delete confirmation",
            InventoryAction::ConfirmDelete => "Deleting product",
            InventoryAction::CancelDelete => "Cancelling delete",
            InventoryAction::ClearError => "Clearing error message",
        }
    }

    /// Whether handling this action may end in a request to the API.
    pub fn requires_network(&self) -> bool {
        match self {
            InventoryAction::Load | InventoryAction::SubmitForm | InventoryAction::ConfirmDelete => true,

            InventoryAction::SetSearch { .. }
            | InventoryAction::BeginCreate
            | InventoryAction::BeginEdit { .. }
            | InventoryAction::CloseModal { .. }
            | InventoryAction::EditField { .. }
            | InventoryAction::RequestDelete { .. }
            | InventoryAction::CancelDelete
            | InventoryAction::ClearError => false,
        }
    }
}
