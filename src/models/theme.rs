/// Tema visual del sitio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Orden de resolución: preferencia guardada válida, luego
    /// `prefers-color-scheme` del sistema, y por último claro.
    pub fn resolve_initial(stored: Option<&str>, system_prefers_dark: Option<bool>) -> Self {
        if let Some(theme) = stored.and_then(Theme::parse) {
            return theme;
        }
        match system_prefers_dark {
            Some(true) => Theme::Dark,
            _ => Theme::Light,
        }
    }
}
