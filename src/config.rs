// ============================================================================
// CONFIGURACIÓN DEL SITIO
// ============================================================================
// Valores fijados en tiempo de compilación (ver build.rs y .env)
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::models::Language;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Ruta base de los JSON de traducción (`<base>/<lang>.json`)
    pub i18n_base_path: String,
    pub default_language: Language,
    /// Ancho (px) a partir del cual el layout deja de ser móvil
    pub mobile_breakpoint: f64,
    /// Fracción de la distancia restante que recorre el glow en cada frame
    pub glow_damping: f64,
    pub enable_logging: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            i18n_base_path: "i18n".to_string(),
            default_language: Language::Spanish,
            mobile_breakpoint: 900.0,
            glow_damping: 0.12,
            enable_logging: true,
        }
    }
}

impl SiteConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("I18N_BASE_PATH"),
            option_env!("DEFAULT_LANGUAGE"),
            option_env!("MOBILE_BREAKPOINT"),
            option_env!("GLOW_DAMPING"),
            option_env!("ENABLE_LOGGING"),
        )
    }

    /// Cada valor ausente o inválido cae a su default
    fn from_values(
        i18n_base_path: Option<&str>,
        default_language: Option<&str>,
        mobile_breakpoint: Option<&str>,
        glow_damping: Option<&str>,
        enable_logging: Option<&str>,
    ) -> Self {
        let defaults = Self::default();

        let glow_damping = glow_damping
            .and_then(|v| v.parse::<f64>().ok())
            .filter(|d| *d > 0.0 && *d <= 1.0)
            .unwrap_or(defaults.glow_damping);

        Self {
            i18n_base_path: i18n_base_path
                .map(|p| p.trim_end_matches('/').to_string())
                .filter(|p| !p.is_empty())
                .unwrap_or(defaults.i18n_base_path),
            default_language: default_language
                .and_then(Language::from_code)
                .unwrap_or(defaults.default_language),
            mobile_breakpoint: mobile_breakpoint
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.mobile_breakpoint),
            glow_damping,
            enable_logging: enable_logging
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
        }
    }

    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: SiteConfig = SiteConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_fall_back_to_defaults() {
        let config = SiteConfig::from_values(None, None, None, None, None);
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let config = SiteConfig::from_values(
            Some(""),
            Some("fr"),
            Some("wide"),
            Some("1.5"),
            Some("maybe"),
        );
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn valid_values_override_defaults() {
        let config = SiteConfig::from_values(
            Some("/static/i18n/"),
            Some("en"),
            Some("1024"),
            Some("0.2"),
            Some("false"),
        );
        assert_eq!(config.i18n_base_path, "/static/i18n");
        assert_eq!(config.default_language, Language::English);
        assert_eq!(config.mobile_breakpoint, 1024.0);
        assert_eq!(config.glow_damping, 0.2);
        assert!(!config.enable_logging);
        assert_eq!(config.log_level(), log::Level::Warn);
    }
}
