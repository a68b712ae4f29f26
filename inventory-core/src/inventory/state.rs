use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::actions::{CloseReason, InventoryAction};
use super::filter::filter_products;
use super::requests::{Completion, Effect};
use crate::error::{Failure, FailureKind};
use crate::form::{FormPhase, ProductForm, SubmitAttempt};
use crate::lookup::LookupCache;
use crate::models::{Product, RecordId};

/// Staleness flag for one load.
///
/// Created when the load starts; the requester cancels it when it stops
/// caring (unmount, superseding load). A result arriving for a cancelled guard
/// is dropped without touching state.
#[derive(Debug, Clone)]
pub struct LoadGuard {
    active: Arc<AtomicBool>,
}

impl LoadGuard {
    fn new() -> Self {
        Self {
            active: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    pub fn cancel(&self) {
        self.active.store(false, Ordering::SeqCst);
    }
}

/// Confirmation the user has to answer before a delete is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePrompt {
    pub id: RecordId,
    pub name: String,
}

impl DeletePrompt {
    pub fn message(&self) -> String {
        format!(
            "¿Eliminar el producto \"{}\"? Esta acción no se puede deshacer.",
            self.name
        )
    }
}

#[derive(Debug, Clone)]
pub struct InventoryState {
    pub products: Vec<Product>,
    pub lookups: LookupCache,
    pub search_text: String,
    pub loading: bool,
    pub error: Option<Failure>,
    /// At most one delete in flight.
    pub deleting_id: Option<RecordId>,
    pub modal_open: bool,
    /// `None` means create mode.
    pub edit_target: Option<Product>,
    pub form: Option<ProductForm>,
    pub pending_delete: Option<DeletePrompt>,
    current_load: Option<LoadGuard>,
}

impl Default for InventoryState {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryState {
    /// Starts in the loading state: the screen fetches on mount.
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            lookups: LookupCache::default(),
            search_text: String::new(),
            loading: true,
            error: None,
            deleting_id: None,
            modal_open: false,
            edit_target: None,
            form: None,
            pending_delete: None,
            current_load: None,
        }
    }

    pub fn filtered_view(&self) -> Vec<&Product> {
        filter_products(&self.products, &self.search_text)
    }

    pub fn table_visible(&self) -> bool {
        !self.loading && self.error.as_ref().map_or(true, |e| !e.kind.blocks_table())
    }

    pub fn is_deleting(&self, id: RecordId) -> bool {
        self.deleting_id == Some(id)
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().map(|e| e.message.as_str())
    }

    /// Stops any in-flight load from committing. Call when the view goes away.
    pub fn cancel_load(&mut self) {
        if let Some(guard) = self.current_load.take() {
            log::debug!("[INVENTORY] Cancelling in-flight load");
            guard.cancel();
        }
    }

    /// Applies an action's synchronous part and returns the request, if any,
    /// that has to run before the action is complete.
    pub fn reduce(&mut self, action: InventoryAction) -> Effect {
        log::debug!("[INVENTORY] {}", action.description());

        match action {
            InventoryAction::Load => self.begin_load(),
            InventoryAction::SetSearch { text } => {
                self.search_text = text;
                Effect::None
            }
            InventoryAction::BeginCreate => {
                if self.can_open_modal() {
                    self.begin_create();
                }
                Effect::None
            }
            InventoryAction::BeginEdit { product } => {
                if self.can_open_modal() {
                    self.begin_edit(product);
                }
                Effect::None
            }
            InventoryAction::CloseModal { reason } => {
                self.close_modal(reason);
                Effect::None
            }
            InventoryAction::EditField { field, value } => {
                match self.form.as_mut() {
                    Some(form) => form.change(field, &value),
                    None => log::warn!("⚠️ [INVENTORY] Edit of {:?} with no form open - ignoring", field),
                }
                Effect::None
            }
            InventoryAction::SubmitForm => self.begin_submit(),
            InventoryAction::RequestDelete { id, name } => {
                self.request_delete(id, name);
                Effect::None
            }
            InventoryAction::ConfirmDelete => self.resolve_delete(true),
            InventoryAction::CancelDelete => self.resolve_delete(false),
            InventoryAction::ClearError => {
                self.error = None;
                Effect::None
            }
        }
    }

    /// Folds a finished request back into state.
    pub fn commit(&mut self, completion: Completion) {
        match completion {
            Completion::Loaded { guard, result } => {
                if !guard.is_active() {
                    log::info!("[INVENTORY] Dropping result of a cancelled load");
                    return;
                }
                self.current_load = None;
                match result {
                    Ok(data) => {
                        log::info!(
                            "✅ [INVENTORY] Loaded {} products, {} categories, {} units, {} statuses",
                            data.products.len(),
                            data.lookups.categories.len(),
                            data.lookups.units.len(),
                            data.lookups.statuses.len()
                        );
                        self.products = data.products;
                        self.lookups = data.lookups;
                        self.error = None;
                    }
                    Err(e) => {
                        log::error!("❌ [INVENTORY] Failed to load inventory: {}", e);
                        self.error = Some(Failure::new(FailureKind::Load));
                    }
                }
                self.loading = false;
            }
            Completion::Deleted { id, result } => {
                match result {
                    Ok(()) => {
                        log::info!("✅ [INVENTORY] Deleted product {}", id);
                        self.products.retain(|product| product.id != id);
                        self.error = None;
                    }
                    Err(e) => {
                        log::error!("❌ [INVENTORY] Failed to delete product {}: {}", id, e);
                        self.error = Some(Failure::new(FailureKind::Delete));
                    }
                }
                self.deleting_id = None;
            }
            Completion::Saved { result } => match result {
                Ok(products) => {
                    log::info!("✅ [INVENTORY] Product saved, list refreshed ({} products)", products.len());
                    self.products = products;
                    self.error = None;
                    if let Some(form) = self.form.as_mut() {
                        form.finish_submit(true);
                    }
                    self.close_modal(CloseReason::Saved);
                }
                Err(e) => {
                    log::error!("❌ [INVENTORY] Failed to save product: {}", e);
                    self.error = Some(Failure::new(FailureKind::Save));
                    if let Some(form) = self.form.as_mut() {
                        form.finish_submit(false);
                    }
                }
            },
        }
    }

    fn begin_load(&mut self) -> Effect {
        if self.current_load.is_some() {
            log::warn!("⚠️ [INVENTORY] Load called but already loading - ignoring");
            return Effect::None;
        }

        log::info!("🔄 [INVENTORY] Starting inventory load");
        let guard = LoadGuard::new();
        self.current_load = Some(guard.clone());
        self.loading = true;
        Effect::Load(guard)
    }

    // The modal and the delete prompt each own the screen while they are up;
    // a second one would replace a form that may still be saving.
    fn can_open_modal(&self) -> bool {
        if self.modal_open || self.pending_delete.is_some() {
            log::warn!("⚠️ [INVENTORY] Modal or delete prompt already open - ignoring");
            return false;
        }
        true
    }

    fn begin_create(&mut self) {
        self.edit_target = None;
        self.form = Some(ProductForm::create());
        self.modal_open = true;
    }

    fn begin_edit(&mut self, product: Product) {
        self.form = Some(ProductForm::edit(&product));
        self.edit_target = Some(product);
        self.modal_open = true;
    }

    /// Returns false when the close was refused.
    pub fn close_modal(&mut self, reason: CloseReason) -> bool {
        if !self.modal_open {
            return true;
        }

        let submitting = self
            .form
            .as_ref()
            .is_some_and(|form| form.phase() == FormPhase::Submitting);
        if submitting && reason != CloseReason::Saved {
            log::warn!("⚠️ [INVENTORY] Close ({:?}) while saving - ignoring", reason);
            return false;
        }

        log::debug!("[INVENTORY] Closing modal: {:?}", reason);
        self.modal_open = false;
        self.form = None;
        true
    }

    fn begin_submit(&mut self) -> Effect {
        let Some(form) = self.form.as_mut() else {
            log::warn!("⚠️ [INVENTORY] Submit with no form open - ignoring");
            return Effect::None;
        };

        match form.begin_submit() {
            SubmitAttempt::Ready(payload) => {
                log::info!(
                    "📝 [INVENTORY] {} product {:?}",
                    if payload.id.is_some() { "Updating" } else { "Creating" },
                    payload.sku
                );
                Effect::Save(payload)
            }
            SubmitAttempt::Invalid(_) | SubmitAttempt::Busy | SubmitAttempt::Closed => Effect::None,
        }
    }

    fn request_delete(&mut self, id: RecordId, name: String) {
        if !self.can_open_modal() {
            return;
        }
        if let Some(current) = self.deleting_id {
            log::warn!(
                "⚠️ [INVENTORY] Delete of {} requested while {} is still deleting - ignoring",
                id,
                current
            );
            return;
        }
        self.pending_delete = Some(DeletePrompt { id, name });
    }

    fn resolve_delete(&mut self, confirmed: bool) -> Effect {
        let Some(prompt) = self.pending_delete.take() else {
            return Effect::None;
        };
        if !confirmed {
            log::debug!("[INVENTORY] Delete of {} cancelled", prompt.id);
            return Effect::None;
        }
        if self.deleting_id.is_some() {
            return Effect::None;
        }

        log::info!("🗑️ [INVENTORY] Deleting product {} ({})", prompt.id, prompt.name);
        self.deleting_id = Some(prompt.id);
        Effect::Delete(prompt.id)
    }
}
