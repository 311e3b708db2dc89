// ============================================================================
// TEMA CLARO/OSCURO - #themeToggle
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement};

use crate::dom::element::{body, get_element_by_id, set_aria_flag, toggle_class, window};
use crate::dom::events::on_click;
use crate::models::Theme;
use crate::utils::constants::{DARK_SCHEME_QUERY, THEME_DARK_CLASS, THEME_LIGHT_CLASS, THEME_TOGGLE_ID};
use crate::utils::storage::PreferenceStore;
use crate::viewmodels::ThemeViewModel;

/// `prefers-color-scheme: dark`; `None` si el navegador no soporta matchMedia
pub fn system_prefers_dark() -> Option<bool> {
    window()?
        .match_media(DARK_SCHEME_QUERY)
        .ok()
        .flatten()
        .map(|query| query.matches())
}

/// Exactamente una de `theme-dark` / `theme-light` en <body>
fn apply_theme(body: &HtmlElement, toggle: &Element, theme: Theme) -> Result<(), JsValue> {
    toggle_class(body, THEME_DARK_CLASS, theme.is_dark())?;
    toggle_class(body, THEME_LIGHT_CLASS, !theme.is_dark())?;
    set_aria_flag(toggle, "aria-pressed", theme.is_dark())
}

pub struct ThemeToggle {
    _listener: EventListener,
}

impl ThemeToggle {
    pub fn mount(prefs: Rc<dyn PreferenceStore>) -> Result<Option<Self>, JsValue> {
        let (Some(toggle), Some(body)) = (get_element_by_id(THEME_TOGGLE_ID), body()) else {
            return Ok(None);
        };

        let vm = ThemeViewModel::new(prefs, system_prefers_dark());
        apply_theme(&body, &toggle, vm.theme())?;
        let vm = RefCell::new(vm);

        let button = toggle.clone();
        let listener = on_click(&toggle, move |_| {
            let theme = vm.borrow_mut().toggle();
            log::info!("🎨 [THEME] Tema cambiado a '{}'", theme.as_str());
            if let Err(e) = apply_theme(&body, &button, theme) {
                log::error!("❌ [THEME] Error aplicando tema: {:?}", e);
            }
        });

        Ok(Some(Self {
            _listener: listener,
        }))
    }
}
