use std::collections::HashMap;

use serde_json::Value;

/// Tabla de traducciones de un idioma: clave opaca -> texto localizado
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslationTable {
    entries: HashMap<String, String>,
}

impl TranslationTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Construye la tabla desde el JSON descargado.
    /// Un documento que no es objeto da una tabla vacía; los valores que no
    /// son string se descartan clave por clave.
    pub fn from_value(value: Value) -> Self {
        let Value::Object(map) = value else {
            log::warn!("⚠️ [I18N] El JSON de traducciones no es un objeto plano, se ignora");
            return Self::empty();
        };

        let entries = map
            .into_iter()
            .filter_map(|(key, value)| match value {
                Value::String(text) => Some((key, text)),
                _ => None,
            })
            .collect();

        Self { entries }
    }

    pub fn from_json_str(json: &str) -> Result<Self, String> {
        serde_json::from_str::<Value>(json)
            .map(Self::from_value)
            .map_err(|e| format!("Parse error: {}", e))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TranslationTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_object_is_loaded() {
        let table = TranslationTable::from_json_str(r#"{"hello":"Hi","nav.about":"About"}"#).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("hello"), Some("Hi"));
        assert_eq!(table.get("nav.about"), Some("About"));
    }

    #[test]
    fn non_string_values_are_skipped() {
        let table = TranslationTable::from_json_str(r#"{"ok":"yes","n":3,"nested":{"a":"b"},"none":null}"#)
            .unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("ok"), Some("yes"));
        assert_eq!(table.get("nested"), None);
    }

    #[test]
    fn non_object_document_gives_empty_table() {
        assert!(TranslationTable::from_json_str(r#"["hello","Hi"]"#).unwrap().is_empty());
        assert!(TranslationTable::from_json_str("\"hello\"").unwrap().is_empty());
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let err = TranslationTable::from_json_str("{not json").unwrap_err();
        assert!(err.starts_with("Parse error"));
    }
}
