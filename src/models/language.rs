use serde::{Deserialize, Serialize};

/// Idiomas del sitio. Español es el principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "en")]
    English,
}

impl Language {
    /// Código usado en `localStorage`, en `<html lang>` y en el nombre del JSON
    pub fn code(self) -> &'static str {
        match self {
            Language::Spanish => "es",
            Language::English => "en",
        }
    }

    /// Texto del icono del botón (`ES` / `EN`)
    pub fn label(self) -> &'static str {
        match self {
            Language::Spanish => "ES",
            Language::English => "EN",
        }
    }

    /// Solo acepta los dos códigos soportados; cualquier otro valor es `None`
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "es" => Some(Language::Spanish),
            "en" => Some(Language::English),
            _ => None,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Language::Spanish => Language::English,
            Language::English => Language::Spanish,
        }
    }
}
