use eframe::egui;
use inventory_core::display::{format_price, reference_label, StatusBadge};
use inventory_core::{InventoryAction, InventoryState};

const COLUMNS: [&str; 8] = [
    "SKU",
    "Producto",
    "Categoría",
    "Unidad",
    "Cantidad",
    "Precio",
    "Estado",
    "Acciones",
];

fn badge_color(badge: StatusBadge) -> egui::Color32 {
    match badge {
        StatusBadge::BestSeller => egui::Color32::from_rgb(0xF5, 0x9E, 0x0B),
        StatusBadge::Pending => egui::Color32::from_rgb(0xEA, 0xB3, 0x08),
        StatusBadge::Active => egui::Color32::from_rgb(0x22, 0xC5, 0x5E),
    }
}

/// Product rows that match the current search, in list order.
pub fn show(ui: &mut egui::Ui, state: &InventoryState) -> Option<InventoryAction> {
    let rows = state.filtered_view();
    if rows.is_empty() {
        ui.label("No se encontraron productos.");
        return None;
    }

    let mut action = None;

    egui::ScrollArea::vertical().show(ui, |ui| {
        egui::Grid::new("inventory_table")
            .num_columns(COLUMNS.len())
            .striped(true)
            .spacing([16.0, 8.0])
            .show(ui, |ui| {
                for column in COLUMNS {
                    ui.strong(column);
                }
                ui.end_row();

                for product in rows {
                    ui.monospace(&product.sku);
                    ui.label(&product.name);
                    ui.label(reference_label(&product.category.name));
                    ui.label(reference_label(&product.unit.name));
                    ui.label(product.quantity.to_string());
                    ui.label(format_price(&product.price));

                    let status = reference_label(&product.status.name);
                    let badge = StatusBadge::classify(status);
                    ui.label(egui::RichText::new(status).color(badge_color(badge)).strong());

                    let deleting = state.is_deleting(product.id);
                    ui.horizontal(|ui| {
                        if ui.add_enabled(!deleting, egui::Button::new("✏ Editar")).clicked() {
                            action = Some(InventoryAction::BeginEdit {
                                product: product.clone(),
                            });
                        }

                        let delete_label = if deleting { "Eliminando…" } else { "🗑 Eliminar" };
                        if ui.add_enabled(!deleting, egui::Button::new(delete_label)).clicked() {
                            action = Some(InventoryAction::RequestDelete {
                                id: product.id,
                                name: product.name.clone(),
                            });
                        }
                    });
                    ui.end_row();
                }
            });
    });

    action
}
