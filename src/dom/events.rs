// ============================================================================
// EVENT HANDLING - Sistema de eventos
// ============================================================================
// Cada registro devuelve un `EventListener` de gloo: soltarlo desregistra el
// listener. Cada controlador guarda los suyos en un `Listeners`, y el sitio
// guarda los controladores durante toda la vida de la página.
// ============================================================================

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, KeyboardEvent, MouseEvent};

/// Listeners registrados por un controlador
#[derive(Default)]
pub struct Listeners {
    handles: Vec<EventListener>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, listener: EventListener) {
        self.handles.push(listener);
    }
}

/// Listener genérico (pasivo, fase de burbuja)
pub fn on<F>(target: &EventTarget, event_type: &'static str, handler: F) -> EventListener
where
    F: FnMut(&Event) + 'static,
{
    EventListener::new(target, event_type, handler)
}

/// Helper para click handler
pub fn on_click<F>(target: &EventTarget, mut handler: F) -> EventListener
where
    F: FnMut(&MouseEvent) + 'static,
{
    EventListener::new_with_options(
        target,
        "click",
        EventListenerOptions::enable_prevent_default(),
        move |event: &Event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                handler(event);
            }
        },
    )
}

/// Helper para mousemove
pub fn on_mouse_move<F>(target: &EventTarget, mut handler: F) -> EventListener
where
    F: FnMut(&MouseEvent) + 'static,
{
    EventListener::new(target, "mousemove", move |event: &Event| {
        if let Some(event) = event.dyn_ref::<MouseEvent>() {
            handler(event);
        }
    })
}

/// Helper para keydown
pub fn on_key_down<F>(target: &EventTarget, mut handler: F) -> EventListener
where
    F: FnMut(&KeyboardEvent) + 'static,
{
    EventListener::new(target, "keydown", move |event: &Event| {
        if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
            handler(event);
        }
    })
}
