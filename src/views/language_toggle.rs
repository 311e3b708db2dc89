// ============================================================================
// IDIOMA ES/EN - #langToggle
// ============================================================================
// Carga del idioma inicial -> primera localización -> se habilita el click.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::element::{get_element_by_id, query_selector_in, set_aria_flag};
use crate::dom::events::on_click;
use crate::dom::localizer::Localizer;
use crate::models::Language;
use crate::utils::constants::{LANG_ICON_SELECTOR, LANG_TOGGLE_ID};
use crate::viewmodels::LanguageViewModel;

/// `aria-pressed` = inglés activo; el icono muestra el código en mayúsculas
fn sync_button(button: &Element, lang: Language) -> Result<(), JsValue> {
    set_aria_flag(button, "aria-pressed", lang == Language::English)?;
    if let Some(icon) = query_selector_in(button, LANG_ICON_SELECTOR) {
        icon.set_text_content(Some(lang.label()));
    }
    Ok(())
}

/// Se llama tras cada activación de idioma, incluida la primera
fn relocalize(vm: &LanguageViewModel, button: &Element) {
    let lang = vm.store().active();
    if let Err(e) = Localizer::new(vm.store()).apply_all() {
        log::error!("❌ [I18N] Error aplicando traducciones: {:?}", e);
    }
    if let Err(e) = sync_button(button, lang) {
        log::error!("❌ [I18N] Error actualizando el botón de idioma: {:?}", e);
    }
}

pub struct LanguageToggle {
    _listener: Rc<RefCell<Option<EventListener>>>,
}

impl LanguageToggle {
    /// Sin botón no se carga ni se localiza nada
    pub fn mount(vm: Rc<LanguageViewModel>, default: Language) -> Option<Self> {
        let button = get_element_by_id(LANG_TOGGLE_ID)?;

        let slot = Rc::new(RefCell::new(None));
        {
            let slot = Rc::clone(&slot);
            spawn_local(async move {
                let lang = vm.activate_initial(default).await;
                log::info!("🌍 [I18N] Idioma inicial: '{}'", lang.code());
                relocalize(&vm, &button);
                *slot.borrow_mut() = Some(listen_for_toggle(vm, button));
            });
        }

        Some(Self { _listener: slot })
    }
}

fn listen_for_toggle(vm: Rc<LanguageViewModel>, button: Element) -> EventListener {
    let target = button.clone();
    on_click(&target, move |_| {
        let vm = Rc::clone(&vm);
        let button = button.clone();
        spawn_local(async move {
            vm.toggle().await;
            relocalize(&vm, &button);
        });
    })
}
