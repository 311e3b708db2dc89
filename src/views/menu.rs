// ============================================================================
// MENÚ MÓVIL - #menuToggle + #menu
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, MouseEvent, Node};

use crate::dom::element::{
    document, get_element_by_id, get_html_element_by_id, has_class, set_aria_flag, toggle_class,
    viewport_width, window,
};
use crate::dom::events::{on, on_click, on_key_down, Listeners};
use crate::utils::constants::{MENU_ID, MENU_OPEN_CLASS, MENU_TOGGLE_ID};
use crate::viewmodels::{MenuEvent, MenuState, MenuViewModel};

struct MenuElements {
    toggle: HtmlElement,
    menu: Element,
    vm: RefCell<MenuViewModel>,
}

impl MenuElements {
    fn dispatch(&self, event: MenuEvent) {
        let transition = self.vm.borrow_mut().handle(event);
        if let Err(e) = self.render(transition.state) {
            log::error!("❌ [MENU] Error actualizando el menú: {:?}", e);
        }
        if transition.changed {
            log::debug!("📱 [MENU] {:?} -> {:?}", event, transition.state);
        }
        if transition.focus_toggle {
            let _ = self.toggle.focus();
        }
    }

    /// `aria-expanded` y `is-open` salen siempre del estado de la máquina
    fn render(&self, state: MenuState) -> Result<(), JsValue> {
        toggle_class(&self.menu, MENU_OPEN_CLASS, state.is_open())?;
        set_aria_flag(&self.toggle, "aria-expanded", state.is_open())
    }

    fn contains(&self, node: &Node) -> bool {
        self.menu.contains(Some(node)) || self.toggle.contains(Some(node))
    }
}

/// ¿El click cayó en un enlace (o dentro de uno)?
fn clicked_link(event: &MouseEvent) -> bool {
    event
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest("a").ok().flatten())
        .is_some()
}

pub struct MobileMenu {
    _listeners: Listeners,
}

impl MobileMenu {
    /// `Ok(None)` si falta el botón o el panel
    pub fn mount(breakpoint: f64) -> Result<Option<Self>, JsValue> {
        let (Some(toggle), Some(menu)) = (
            get_html_element_by_id(MENU_TOGGLE_ID),
            get_element_by_id(MENU_ID),
        ) else {
            return Ok(None);
        };
        let doc = document().ok_or_else(|| JsValue::from_str("No document"))?;
        let win = window().ok_or_else(|| JsValue::from_str("No window"))?;

        let initial = if has_class(&menu, MENU_OPEN_CLASS) {
            MenuState::Open
        } else {
            MenuState::Closed
        };
        let view = Rc::new(MenuElements {
            toggle,
            menu,
            vm: RefCell::new(MenuViewModel::new(initial, breakpoint)),
        });
        view.render(initial)?;

        let mut listeners = Listeners::new();

        let v = Rc::clone(&view);
        listeners.push(on_click(&view.toggle, move |event| {
            event.prevent_default();
            v.dispatch(MenuEvent::TogglePressed);
        }));

        let v = Rc::clone(&view);
        listeners.push(on_click(&view.menu, move |event| {
            if clicked_link(event) {
                v.dispatch(MenuEvent::LinkClicked);
            }
        }));

        let v = Rc::clone(&view);
        listeners.push(on_key_down(&doc, move |event| {
            if event.key() == "Escape" {
                v.dispatch(MenuEvent::EscapePressed);
            }
        }));

        let v = Rc::clone(&view);
        listeners.push(on_click(&doc, move |event| {
            let inside = event
                .target()
                .and_then(|t| t.dyn_into::<Node>().ok())
                .map(|node| v.contains(&node))
                .unwrap_or(false);
            if !inside {
                v.dispatch(MenuEvent::OutsideClick {
                    viewport_width: viewport_width(),
                });
            }
        }));

        let v = Rc::clone(&view);
        listeners.push(on(&win, "resize", move |_| {
            v.dispatch(MenuEvent::Resized {
                viewport_width: viewport_width(),
            });
        }));

        Ok(Some(Self {
            _listeners: listeners,
        }))
    }
}
