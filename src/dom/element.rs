// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Obtener `<html>`
pub fn root_element() -> Option<HtmlElement> {
    document()?.document_element()?.dyn_into::<HtmlElement>().ok()
}

/// Obtener `<body>`
pub fn body() -> Option<HtmlElement> {
    document()?.body()
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Obtener elemento por ID ya convertido a HtmlElement
pub fn get_html_element_by_id(id: &str) -> Option<HtmlElement> {
    get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()
}

/// Ancho interior de la ventana en px (0 si no se puede leer)
pub fn viewport_width() -> f64 {
    viewport_size().0
}

/// (innerWidth, innerHeight) en px
pub fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return (0.0, 0.0);
    };
    let width = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

/// Agregar o quitar una clase según `enabled`
pub fn toggle_class(element: &Element, class: &str, enabled: bool) -> Result<(), JsValue> {
    element.class_list().toggle_with_force(class, enabled).map(|_| ())
}

/// Verificar si tiene clase
pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

/// Escribe un booleano ARIA como "true"/"false"
pub fn set_aria_flag(element: &Element, name: &str, value: bool) -> Result<(), JsValue> {
    element.set_attribute(name, if value { "true" } else { "false" })
}

/// Query selector dentro de un elemento
pub fn query_selector_in(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

/// Query selector all (todos los elementos del documento que casan con el selector)
pub fn query_selector_all(selector: &str) -> Result<Vec<Element>, JsValue> {
    let list = document()
        .ok_or_else(|| JsValue::from_str("No document"))?
        .query_selector_all(selector)?;

    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Establecer una custom property CSS sobre un elemento
pub fn set_style_property(element: &HtmlElement, name: &str, value: &str) -> Result<(), JsValue> {
    element.style().set_property(name, value)
}
