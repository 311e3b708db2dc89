// ============================================================================
// LOCALIZER - Aplica traducciones a los elementos marcados
// ============================================================================
// Contrato con el HTML:
//   data-i18n="clave"              -> texto del elemento
//   data-i18n-html="true"          -> la traducción se inserta como markup
//   data-i18n-attr="attr:clave,…"  -> atributos (clave opcional = data-i18n)
// Una traducción vacía nunca borra el contenido ni el atributo existente.
// ============================================================================

use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::dom::element::{document, query_selector_all};
use crate::models::Language;
use crate::services::TranslationStore;
use crate::utils::constants::{I18N_ATTR_SPEC_ATTR, I18N_HTML_ATTR, I18N_KEY_ATTR, I18N_SELECTOR};

/// Lo mínimo que el localizer necesita de un nodo
pub trait Localizable {
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_text(&self, text: &str);
    fn set_markup(&self, markup: &str);
    fn set_attribute_value(&self, name: &str, value: &str);
}

impl Localizable for Element {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }

    fn set_markup(&self, markup: &str) {
        // Solo contenido de confianza: los JSON de i18n son parte del sitio
        self.set_inner_html(markup);
    }

    fn set_attribute_value(&self, name: &str, value: &str) {
        if let Err(e) = self.set_attribute(name, value) {
            log::warn!("⚠️ [I18N] No se pudo escribir el atributo '{}': {:?}", name, e);
        }
    }
}

/// Par `atributo:clave` de `data-i18n-attr`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrBinding {
    pub attribute: String,
    pub key: Option<String>,
}

/// Parsea `"title:k1, aria-label"` -> [(title, Some(k1)), (aria-label, None)].
/// Los pares sin nombre de atributo se descartan.
pub fn parse_attr_spec(spec: &str) -> Vec<AttrBinding> {
    spec.split(',')
        .filter_map(|pair| {
            let mut parts = pair.split(':').map(str::trim);
            let attribute = parts.next().unwrap_or_default();
            if attribute.is_empty() {
                return None;
            }
            let key = parts.next().filter(|k| !k.is_empty()).map(str::to_string);
            Some(AttrBinding {
                attribute: attribute.to_string(),
                key,
            })
        })
        .collect()
}

/// Aplica las traducciones a un único nodo
pub fn localize_node<N, R>(node: &N, resolve: R)
where
    N: Localizable + ?Sized,
    R: Fn(&str) -> String,
{
    let text_key = node.attribute(I18N_KEY_ATTR).filter(|k| !k.is_empty());

    if let Some(key) = text_key.as_deref() {
        let value = resolve(key);
        if !value.is_empty() {
            if node.attribute(I18N_HTML_ATTR).as_deref() == Some("true") {
                node.set_markup(&value);
            } else {
                node.set_text(&value);
            }
        }
    }

    let Some(spec) = node.attribute(I18N_ATTR_SPEC_ATTR).filter(|s| !s.is_empty()) else {
        return;
    };

    for binding in parse_attr_spec(&spec) {
        let Some(key) = binding.key.as_deref().or(text_key.as_deref()) else {
            continue;
        };
        let value = resolve(key);
        if !value.is_empty() {
            node.set_attribute_value(&binding.attribute, &value);
        }
    }
}

/// `<html lang>` sigue al idioma activo
pub fn sync_document_lang<N>(root: &N, lang: Language)
where
    N: Localizable + ?Sized,
{
    root.set_attribute_value("lang", lang.code());
}

/// Recorre el documento y aplica el idioma activo del store
pub struct Localizer<'a> {
    store: &'a TranslationStore,
}

impl<'a> Localizer<'a> {
    pub fn new(store: &'a TranslationStore) -> Self {
        Self { store }
    }

    /// Idempotente: misma tabla => mismas escrituras
    pub fn apply_all(&self) -> Result<usize, JsValue> {
        let elements = query_selector_all(I18N_SELECTOR)?;
        for element in &elements {
            localize_node(element, |key| self.store.resolve(key));
        }
        if let Some(root) = document().and_then(|doc| doc.document_element()) {
            sync_document_lang(&root, self.store.active());
        }
        log::debug!(
            "🌍 [I18N] {} elementos localizados ({})",
            elements.len(),
            self.store.active().code()
        );
        Ok(elements.len())
    }
}
