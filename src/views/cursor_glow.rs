// ============================================================================
// CURSOR GLOW - --cursor-x / --cursor-y sobre <html>
// ============================================================================
// El bucle arranca con el primer mousemove y sigue mientras viva la página.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::dom::element::{root_element, set_style_property, viewport_size, window};
use crate::dom::events::{on, on_mouse_move, Listeners};
use crate::utils::constants::{CURSOR_X_PROPERTY, CURSOR_Y_PROPERTY};
use crate::viewmodels::GlowViewModel;

struct GlowLoop {
    root: HtmlElement,
    vm: RefCell<GlowViewModel>,
    frame: RefCell<Option<AnimationFrame>>,
    running: Cell<bool>,
}

impl GlowLoop {
    /// No-op si el bucle ya está programado
    fn start(self: &Rc<Self>) {
        if self.running.replace(true) {
            return;
        }
        log::debug!("✨ [GLOW] Bucle de animación iniciado");
        self.schedule();
    }

    fn schedule(self: &Rc<Self>) {
        let this = Rc::clone(self);
        let handle = request_animation_frame(move |_timestamp| {
            this.frame.borrow_mut().take();
            this.tick();
            this.schedule();
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn tick(&self) {
        let (x, y) = {
            let mut vm = self.vm.borrow_mut();
            vm.tick();
            vm.css_values()
        };
        if let Err(e) = self.write(&x, &y) {
            log::warn!("⚠️ [GLOW] No se pudo escribir la posición: {:?}", e);
        }
    }

    fn write(&self, x: &str, y: &str) -> Result<(), JsValue> {
        set_style_property(&self.root, CURSOR_X_PROPERTY, x)?;
        set_style_property(&self.root, CURSOR_Y_PROPERTY, y)
    }
}

pub struct CursorGlow {
    _glow: Rc<GlowLoop>,
    _listeners: Listeners,
}

impl CursorGlow {
    pub fn mount(damping: f64) -> Result<Option<Self>, JsValue> {
        let Some(root) = root_element() else {
            return Ok(None);
        };
        let win = window().ok_or_else(|| JsValue::from_str("No window"))?;

        let glow = Rc::new(GlowLoop {
            root: root.clone(),
            vm: RefCell::new(GlowViewModel::new(damping)),
            frame: RefCell::new(None),
            running: Cell::new(false),
        });

        let mut listeners = Listeners::new();

        let g = Rc::clone(&glow);
        listeners.push(on_mouse_move(&win, move |event| {
            let (width, height) = viewport_size();
            g.vm.borrow_mut().pointer_moved(
                f64::from(event.client_x()),
                f64::from(event.client_y()),
                width,
                height,
            );
            g.start();
        }));

        // Al salir del viewport solo se recentra el objetivo
        let g = Rc::clone(&glow);
        listeners.push(on(&root, "mouseleave", move |_| {
            g.vm.borrow_mut().pointer_left();
        }));

        Ok(Some(Self {
            _glow: glow,
            _listeners: listeners,
        }))
    }
}
