use eframe::egui;
use inventory_core::inventory::{CloseReason, DeletePrompt};
use inventory_core::InventoryAction;

/// The bits of a frame's input that can dismiss a dialog.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub escape: bool,
    /// Where the pointer went down this frame, if it did.
    pub press: Option<egui::Pos2>,
    /// A dropdown is open; its list is drawn outside the modal.
    pub popup_open: bool,
}

impl FrameInput {
    pub fn read(ctx: &egui::Context) -> Self {
        let (escape, press) = ctx.input(|i| {
            let press = if i.pointer.any_pressed() {
                i.pointer.interact_pos()
            } else {
                None
            };
            (i.key_pressed(egui::Key::Escape), press)
        });
        Self {
            escape,
            press,
            popup_open: ctx.memory(|m| m.any_popup_open()),
        }
    }
}

/// Escape closes the form, or answers "no" to a delete prompt. A press
/// outside last frame's modal rect closes the form too.
pub fn dismissal(
    modal_open: bool,
    confirming: bool,
    modal_rect: Option<egui::Rect>,
    input: &FrameInput,
) -> Option<InventoryAction> {
    if input.escape {
        if modal_open {
            return Some(InventoryAction::CloseModal {
                reason: CloseReason::Escape,
            });
        }
        return confirming.then_some(InventoryAction::CancelDelete);
    }

    let rect = modal_rect.filter(|_| modal_open)?;
    let pos = input.press?;
    if rect.contains(pos) || input.popup_open {
        return None;
    }
    Some(InventoryAction::CloseModal {
        reason: CloseReason::OutsideClick,
    })
}

/// Yes/no question shown before a delete. `Some(answer)` once the user picks.
pub fn confirm_delete(ctx: &egui::Context, prompt: &DeletePrompt) -> Option<bool> {
    let mut answer = None;

    egui::Window::new("Confirmar eliminación")
        .id(egui::Id::new("confirm_delete"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(prompt.message());
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Sí, eliminar").clicked() {
                    answer = Some(true);
                }
                if ui.button("No").clicked() {
                    answer = Some(false);
                }
            });
        });

    answer
}

/// Darkens everything under the modal windows.
pub fn paint_backdrop(ctx: &egui::Context) {
    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::PanelResizeLine,
        egui::Id::new("modal_backdrop"),
    ));
    painter.rect_filled(ctx.screen_rect(), 0.0, egui::Color32::from_black_alpha(160));
}
