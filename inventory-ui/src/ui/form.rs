use std::collections::BTreeMap;

use eframe::egui;
use inventory_core::form::{Entry, FormField, ProductForm};
use inventory_core::inventory::CloseReason;
use inventory_core::{InventoryAction, LookupCache, LookupKind};

/// Raw text typed into the free-text inputs.
///
/// The form keeps normalized values, so a half-typed "4." would read back as
/// "4"; the widgets edit these buffers instead and report every change.
#[derive(Default)]
pub struct FormView {
    buffers: BTreeMap<FormField, String>,
}

impl FormView {
    /// Seeds the buffers from a freshly opened form.
    pub fn reset(&mut self, form: &ProductForm) {
        self.buffers = FormField::ALL
            .iter()
            .filter(|field| field.lookup_kind().is_none())
            .map(|field| (*field, form.values().display_text(*field)))
            .collect();
    }

    /// Brings a buffer back in line with the form after `raw` was applied to
    /// `field`, when the form stored something else.
    pub fn sync(&mut self, field: FormField, raw: &str, form: &ProductForm) {
        if let Some(text) = form.values().corrected_input(field, raw) {
            self.buffers.insert(field, text);
        }
    }

    pub fn buffer(&self, field: FormField) -> Option<&str> {
        self.buffers.get(&field).map(String::as_str)
    }

    pub fn show(
        &mut self,
        ctx: &egui::Context,
        form: &ProductForm,
        lookups: &LookupCache,
    ) -> (Vec<InventoryAction>, Option<egui::Rect>) {
        let mut actions = Vec::new();
        let enabled = form.controls_enabled();
        let title = if form.is_edit() {
            "Editar producto"
        } else {
            "Nuevo producto"
        };

        let response = egui::Window::new(title)
            .id(egui::Id::new("product_form"))
            .collapsible(false)
            .resizable(false)
            .title_bar(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(title);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.add_enabled(enabled, egui::Button::new("×").frame(false)).clicked() {
                            actions.push(InventoryAction::CloseModal {
                                reason: CloseReason::CloseButton,
                            });
                        }
                    });
                });
                ui.separator();

                ui.add_enabled_ui(enabled, |ui| {
                    egui::Grid::new("product_form_grid")
                        .num_columns(2)
                        .spacing([12.0, 10.0])
                        .show(ui, |ui| {
                            for field in FormField::ALL {
                                ui.label(field.label());
                                ui.vertical(|ui| {
                                    let changed = match field.lookup_kind() {
                                        Some(kind) => select(ui, field, kind, form, lookups),
                                        None => self.text_input(ui, field),
                                    };
                                    if let Some(value) = changed {
                                        actions.push(InventoryAction::EditField { field, value });
                                    }
                                    if let Some(message) = form.error(field) {
                                        ui.colored_label(egui::Color32::RED, message);
                                    }
                                });
                                ui.end_row();
                            }
                        });
                });

                ui.add_space(8.0);
                ui.separator();

                ui.horizontal(|ui| {
                    if ui.add_enabled(enabled, egui::Button::new("Cancelar")).clicked() {
                        actions.push(InventoryAction::CloseModal {
                            reason: CloseReason::Cancel,
                        });
                    }
                    if ui
                        .add_enabled(enabled, egui::Button::new(form.submit_label()))
                        .clicked()
                    {
                        actions.push(InventoryAction::SubmitForm);
                    }
                    if !enabled {
                        ui.spinner();
                    }
                });
            });

        (actions, response.map(|inner| inner.response.rect))
    }

    fn text_input(&mut self, ui: &mut egui::Ui, field: FormField) -> Option<String> {
        let (hint, limit) = match field {
            FormField::Sku => ("p.ej. ABA-001", 20),
            FormField::Name => ("p.ej. Agua mineral 600ml", 100),
            FormField::Quantity => ("0", usize::MAX),
            _ => ("0.00", usize::MAX),
        };

        let buffer = self.buffers.entry(field).or_default();
        let edit = egui::TextEdit::singleline(&mut *buffer)
            .char_limit(limit)
            .hint_text(hint)
            .desired_width(260.0);

        if ui.add(edit).changed() {
            Some(buffer.clone())
        } else {
            None
        }
    }
}

fn select(
    ui: &mut egui::Ui,
    field: FormField,
    kind: LookupKind,
    form: &ProductForm,
    lookups: &LookupCache,
) -> Option<String> {
    let current = form.values().code(kind);
    let selected_text = match current {
        Entry::Value(id) => lookups
            .label(kind, id)
            .map(str::to_string)
            .unwrap_or_else(|| format!("#{}", id)),
        Entry::Empty => kind.placeholder().to_string(),
    };

    let mut changed = None;
    egui::ComboBox::from_id_salt(field.wire_name())
        .selected_text(selected_text)
        .width(260.0)
        .show_ui(ui, |ui| {
            if ui.selectable_label(current.is_empty(), kind.placeholder()).clicked() {
                changed = Some(String::new());
            }
            for option in lookups.options(kind) {
                if ui
                    .selectable_label(current == Entry::Value(option.id), option.name.as_str())
                    .clicked()
                {
                    changed = Some(option.id.to_string());
                }
            }
        });

    changed
}
