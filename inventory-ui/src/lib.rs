#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

mod app;
mod store;
mod ui;
pub mod wasm_utils;

pub use app::InventoryApp;
pub use store::InventoryStore;

/// WASM entry point for the inventory screen
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn start(canvas_id: &str) -> Result<(), wasm_bindgen::JsValue> {
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();
    let canvas_id = canvas_id.to_string();

    let canvas = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(&canvas_id))
        .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        .ok_or_else(|| JsValue::from_str(&format!("canvas #{} not found", canvas_id)))?;

    wasm_utils::spawn_async(async move {
        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| {
                    cc.egui_ctx.set_visuals(egui::Visuals::light());
                    Ok(Box::new(app::InventoryApp::new(cc)))
                }),
            )
            .await;

        let loading_text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("loading_text"));

        match start_result {
            Ok(_) => {
                if let Some(loading_text) = loading_text {
                    loading_text.remove();
                }
            }
            Err(e) => {
                if let Some(loading_text) = loading_text {
                    loading_text.set_inner_html(
                        "<p>La aplicación falló al iniciar. Revisa la consola del navegador.</p>",
                    );
                }
                log::error!("❌ [APP] Failed to start eframe: {:?}", e);
            }
        }
    });

    Ok(())
}
