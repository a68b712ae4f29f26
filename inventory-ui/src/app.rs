use eframe::egui;
use inventory_core::{ApiConfig, FailureKind, InventoryAction, InventoryHttpClient};

use crate::store::InventoryStore;
use crate::ui::{self, FormView};
use crate::wasm_utils;

/// Inventory screen: sidebar, product table and the create/edit modal.
pub struct InventoryApp {
    store: InventoryStore,
    form_view: FormView,
    // Where the modal was drawn last frame; `None` while it is closed.
    modal_rect: Option<egui::Rect>,
    loaded: bool,
}

impl InventoryApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        wasm_utils::set_panic_hook();
        wasm_utils::console_log("🚀 Starting inventory screen");

        let config = ApiConfig::from_env().unwrap_or_else(|e| {
            log::error!("❌ [APP] {} - falling back to the default API base", e);
            ApiConfig::default()
        });
        log::info!("[APP] API base: {}", config.base_url);

        let store = InventoryStore::new(InventoryHttpClient::new(config)).with_repaint(cc.egui_ctx.clone());

        Self {
            store,
            form_view: FormView::default(),
            modal_rect: None,
            loaded: false,
        }
    }

    fn dispatch(&mut self, action: InventoryAction) {
        let opens_form = matches!(
            action,
            InventoryAction::BeginCreate | InventoryAction::BeginEdit { .. }
        );
        let edited = match &action {
            InventoryAction::EditField { field, value } => Some((*field, value.clone())),
            _ => None,
        };

        self.store.dispatch(action);

        let Some(form) = self.store.state().form.as_ref() else {
            return;
        };
        if opens_form {
            self.form_view.reset(form);
        } else if let Some((field, raw)) = edited {
            self.form_view.sync(field, &raw, form);
        }
    }

    fn handle_keys_and_clicks(&mut self, ctx: &egui::Context) {
        let state = self.store.state();
        let action = ui::dialogs::dismissal(
            state.modal_open,
            state.pending_delete.is_some(),
            self.modal_rect,
            &ui::dialogs::FrameInput::read(ctx),
        );
        if let Some(action) = action {
            self.dispatch(action);
        }
    }

    fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Inventario de Productos");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("+ Nuevo producto").clicked() {
                    self.dispatch(InventoryAction::BeginCreate);
                }
            });
        });
        ui.add_space(8.0);

        let mut search = self.store.state().search_text.clone();
        let response = ui.add(
            egui::TextEdit::singleline(&mut search)
                .hint_text("🔍 Buscar por nombre o SKU")
                .desired_width(320.0),
        );
        if response.changed() {
            self.dispatch(InventoryAction::SetSearch { text: search });
        }
        ui.add_space(8.0);
    }

    fn render_status(&mut self, ui: &mut egui::Ui) {
        let state = self.store.state();

        if state.loading {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Cargando inventario…");
            });
            return;
        }

        let Some(failure) = state.error.clone() else {
            return;
        };

        ui.horizontal(|ui| {
            ui.colored_label(egui::Color32::RED, format!("❌ {}", failure.message));
            match failure.kind {
                FailureKind::Load => {
                    if ui.button("🔄 Reintentar").clicked() {
                        self.dispatch(InventoryAction::Load);
                    }
                }
                FailureKind::Save | FailureKind::Delete => {
                    if ui.small_button("✖").clicked() {
                        self.dispatch(InventoryAction::ClearError);
                    }
                }
            }
        });
        ui.add_space(8.0);
    }

    fn render_modals(&mut self, ctx: &egui::Context) {
        let state = self.store.state();

        if state.modal_open {
            ui::dialogs::paint_backdrop(ctx);
            if let Some(form) = state.form.as_ref() {
                let (actions, rect) = self.form_view.show(ctx, form, &state.lookups);
                self.modal_rect = rect;
                for action in actions {
                    self.dispatch(action);
                }
            }
        }

        if !self.store.state().modal_open {
            self.modal_rect = None;
        }

        if let Some(prompt) = self.store.state().pending_delete.clone() {
            ui::dialogs::paint_backdrop(ctx);
            match ui::dialogs::confirm_delete(ctx, &prompt) {
                Some(true) => self.dispatch(InventoryAction::ConfirmDelete),
                Some(false) => self.dispatch(InventoryAction::CancelDelete),
                None => {}
            }
        }
    }
}

impl eframe::App for InventoryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Update state from async operations
        self.store.update_from_async();

        // Load everything on first render
        if !self.loaded {
            self.loaded = true;
            self.dispatch(InventoryAction::Load);
        }

        self.handle_keys_and_clicks(ctx);

        egui::SidePanel::left("sidebar")
            .resizable(false)
            .exact_width(200.0)
            .show(ctx, ui::sidebar::show);

        // The page behind an open dialog stays visible but takes no input.
        let blocked = {
            let state = self.store.state();
            state.modal_open || state.pending_delete.is_some()
        };

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!blocked, |ui| {
                self.render_header(ui);
                self.render_status(ui);

                if self.store.state().table_visible() {
                    if let Some(action) = ui::table::show(ui, self.store.state()) {
                        self.dispatch(action);
                    }
                }
            });
        });

        self.render_modals(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        log::info!("[APP] Shutting down");
        self.store.shutdown();
    }
}
