use std::sync::{Arc, Mutex};

use inventory_core::inventory::{execute, Completion, Effect};
use inventory_core::{InventoryAction, InventoryHttpClient, InventoryState};

use crate::wasm_utils;

/// Owns the screen state and runs its requests in the background.
///
/// Actions are reduced on the UI thread; the request an action asks for runs
/// on a spawned task and its result comes back through `completions`, to be
/// committed on the next frame by `update_from_async`.
pub struct InventoryStore {
    client: InventoryHttpClient,
    state: InventoryState,

    // Async state bridge (Arc<Mutex<>> for thread-safe async updates)
    completions: Arc<Mutex<Vec<Completion>>>,

    repaint: Option<egui::Context>,
}

impl InventoryStore {
    pub fn new(client: InventoryHttpClient) -> Self {
        Self {
            client,
            state: InventoryState::new(),
            completions: Arc::new(Mutex::new(Vec::new())),
            repaint: None,
        }
    }

    /// Finished requests wake this context so the result shows up without
    /// waiting for input.
    pub fn with_repaint(mut self, ctx: egui::Context) -> Self {
        self.repaint = Some(ctx);
        self
    }

    pub fn state(&self) -> &InventoryState {
        &self.state
    }

    pub fn api_base(&self) -> &str {
        self.client.base_url()
    }

    pub fn dispatch(&mut self, action: InventoryAction) {
        let effect = self.state.reduce(action);
        self.spawn(effect);
    }

    /// Pulls in whatever background requests have finished since the last
    /// frame.
    pub fn update_from_async(&mut self) {
        let finished: Vec<Completion> = match self.completions.lock() {
            Ok(mut queue) => queue.drain(..).collect(),
            Err(_) => {
                log::error!("❌ [STORE] Failed to acquire completion lock");
                return;
            }
        };

        for completion in finished {
            self.state.commit(completion);
        }
    }

    /// Late results from a load that is still running will be dropped.
    pub fn shutdown(&mut self) {
        self.state.cancel_load();
    }

    fn spawn(&self, effect: Effect) {
        if matches!(effect, Effect::None) {
            return;
        }

        let client = self.client.clone();
        let completions = self.completions.clone();
        let repaint = self.repaint.clone();

        wasm_utils::spawn_async(async move {
            let Some(completion) = execute(&client, effect).await else {
                return;
            };

            if let Ok(mut queue) = completions.lock() {
                queue.push(completion);
            } else {
                log::error!("❌ [STORE] Failed to acquire completion lock");
            }

            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        });
    }
}

impl Drop for InventoryStore {
    fn drop(&mut self) {
        self.shutdown();
    }
}
