use eframe::egui;

pub const STORE_NAME: &str = "DyA Minimarket";

/// Navigation chrome. Only the inventory screen exists, so the entry is
/// always the selected one.
pub fn show(ui: &mut egui::Ui) {
    ui.add_space(12.0);
    ui.heading(STORE_NAME);
    ui.add_space(16.0);

    ui.label(egui::RichText::new("ALMACÉN").small().weak());
    ui.add_space(4.0);
    let _ = ui.selectable_label(true, "📦 Inventario");
}
