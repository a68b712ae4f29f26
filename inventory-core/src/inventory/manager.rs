use super::actions::{CloseReason, InventoryAction};
use super::requests::{execute, save_and_refetch, Completion};
use super::state::InventoryState;
use crate::form::FormField;
use crate::http_client::InventoryApi;
use crate::models::{ProductPayload, RecordId};

/// Synchronous yes/no question asked before a destructive request.
pub trait ConfirmPrompt {
    fn confirm(&self, message: &str) -> bool;
}

impl<F: Fn(&str) -> bool> ConfirmPrompt for F {
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Drives `InventoryState` against an API by awaiting each request in place.
///
/// The egui shell spawns requests instead and never blocks a frame; this is
/// the same controller for callers that can simply await.
pub struct InventoryManager<A: InventoryApi> {
    // Current state - single source of truth
    state: InventoryState,

    api: A,
}

impl<A: InventoryApi> InventoryManager<A> {
    pub fn new(api: A) -> Self {
        Self {
            state: InventoryState::new(),
            api,
        }
    }

    /// Reduces `action` and runs the request it asks for, if any, to completion.
    pub async fn handle(&mut self, action: InventoryAction) {
        log::debug!("Handling action: {:?}", action.description());
        let effect = self.state.reduce(action);
        if let Some(completion) = execute(&self.api, effect).await {
            self.state.commit(completion);
        }
    }

    pub fn state(&self) -> &InventoryState {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }
}

// One method per screen operation
impl<A: InventoryApi> InventoryManager<A> {
    pub async fn initial_load(&mut self) {
        self.handle(InventoryAction::Load).await;
    }

    pub fn set_search(&mut self, text: &str) {
        self.state.reduce(InventoryAction::SetSearch {
            text: text.to_string(),
        });
    }

    pub fn begin_create(&mut self) {
        self.state.reduce(InventoryAction::BeginCreate);
    }

    /// Whether the form is now open on product `id`.
    pub fn begin_edit(&mut self, id: RecordId) -> bool {
        let Some(product) = self.state.products.iter().find(|p| p.id == id).cloned() else {
            log::warn!("⚠️ [INVENTORY] Edit requested for unknown product {}", id);
            return false;
        };
        self.state.reduce(InventoryAction::BeginEdit { product });
        self.state.modal_open && self.state.edit_target.as_ref().is_some_and(|p| p.id == id)
    }

    pub fn close_modal(&mut self, reason: CloseReason) -> bool {
        self.state.close_modal(reason)
    }

    /// Asks `prompt` first; nothing is sent unless it answers yes.
    pub async fn delete<P: ConfirmPrompt + ?Sized>(&mut self, id: RecordId, name: &str, prompt: &P) {
        self.state.reduce(InventoryAction::RequestDelete {
            id,
            name: name.to_string(),
        });

        let answer = match &self.state.pending_delete {
            Some(pending) => prompt.confirm(&pending.message()),
            None => return,
        };

        let action = if answer {
            InventoryAction::ConfirmDelete
        } else {
            InventoryAction::CancelDelete
        };
        self.handle(action).await;
    }

    /// Saves an already-validated payload without going through the form.
    /// Returns whether the save and the refetch both succeeded.
    pub async fn submit(&mut self, payload: ProductPayload) -> bool {
        let result = save_and_refetch(&self.api, &payload).await;
        let saved = result.is_ok();
        self.state.commit(Completion::Saved { result });
        saved
    }

    /// Validates the open form and saves it.
    pub async fn submit_form(&mut self) {
        self.handle(InventoryAction::SubmitForm).await;
    }

    pub fn edit_field(&mut self, field: FormField, value: &str) {
        self.state.reduce(InventoryAction::EditField {
            field,
            value: value.to_string(),
        });
    }
}
