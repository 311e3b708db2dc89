// ============================================================================
// PORTFOLIO FRONT - Comportamiento del sitio en Rust puro + WASM
// ============================================================================
// - Models: idioma, tema, tablas de traducción
// - Services: descarga y caché de traducciones
// - ViewModels: estado + lógica UI sin DOM (testeable en nativo)
// - Views: enlazan el HTML existente con los viewmodels
// - App: contexto `Site` que posee todos los controladores
// ============================================================================

mod app;
mod config;
mod dom;
mod models;
mod services;
mod utils;
mod viewmodels;
mod views;

use std::cell::RefCell;

use gloo_events::EventListener;
use wasm_bindgen::prelude::*;

use crate::app::Site;
use crate::config::CONFIG;

// Contexto del sitio: vive mientras viva la página
thread_local! {
    static SITE: RefCell<Option<Site>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Portfolio front - Rust + WASM");

    let document = dom::document().ok_or_else(|| JsValue::from_str("No document"))?;

    if still_parsing(&document.ready_state()) {
        // Un solo registro al arrancar el módulo
        EventListener::once(&document, "DOMContentLoaded", |_| boot_site()).forget();
    } else {
        boot_site();
    }

    Ok(())
}

/// `document.readyState` mientras el HTML aún se está parseando
fn still_parsing(ready_state: &str) -> bool {
    ready_state == "loading"
}

fn boot_site() {
    SITE.with(|cell| {
        if cell.borrow().is_some() {
            log::warn!("⚠️ [SITE] Ya inicializado, se ignora");
            return;
        }
        let site = Site::boot();
        *cell.borrow_mut() = Some(site);
    });
}

/// Re-aplica las traducciones del idioma activo (llamable desde JavaScript)
#[wasm_bindgen]
pub fn relocalize_wasm() {
    SITE.with(|cell| match cell.borrow().as_ref() {
        Some(site) => {
            if let Err(e) = site.relocalize() {
                log::error!("❌ [I18N] Error re-localizando: {:?}", e);
            }
        }
        None => log::warn!("⚠️ [SITE] Sitio no inicializado"),
    });
}
