// ============================================================================
// PREFERENCIAS PERSISTIDAS
// ============================================================================
// `localStorage` puede no existir, estar bloqueado (navegación privada) o
// lanzar por cuota. Ningún fallo sale de aquí: lo que no se puede guardar en
// `localStorage` se guarda en memoria y dura lo que dure la página.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;

use web_sys::{window, Storage};

pub const LANGUAGE_PREF_KEY: &str = "language";
pub const THEME_PREF_KEY: &str = "theme";

/// Puerto de persistencia de preferencias (strings por nombre)
pub trait PreferenceStore {
    fn get(&self, name: &str) -> Option<String>;
    fn set(&self, name: &str, value: &str);
}

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Preferencias sobre `window.localStorage`, con respaldo en memoria
#[derive(Debug, Default)]
pub struct LocalPreferences {
    storage: Option<Storage>,
    fallback: MemoryPreferences,
}

impl LocalPreferences {
    pub fn new() -> Self {
        Self::from_storage(get_local_storage())
    }

    fn from_storage(storage: Option<Storage>) -> Self {
        Self {
            storage,
            fallback: MemoryPreferences::new(),
        }
    }

    /// `false` si el navegador no deja usar `localStorage`
    pub fn is_available(&self) -> bool {
        self.storage.is_some()
    }
}

impl PreferenceStore for LocalPreferences {
    fn get(&self, name: &str) -> Option<String> {
        self.storage
            .as_ref()
            .and_then(|storage| storage.get_item(name).ok().flatten())
            .or_else(|| self.fallback.get(name))
    }

    fn set(&self, name: &str, value: &str) {
        let Some(storage) = self.storage.as_ref() else {
            log::debug!("💾 [PREFS] localStorage no disponible, '{}' queda en memoria", name);
            self.fallback.set(name, value);
            return;
        };
        if storage.set_item(name, value).is_err() {
            log::warn!("⚠️ [PREFS] Error guardando '{}' en localStorage", name);
            self.fallback.set(name, value);
        }
    }
}

/// Preferencias en memoria (respaldo de `LocalPreferences` y tests)
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(name: &str, value: &str) -> Self {
        let prefs = Self::new();
        prefs.set(name, value);
        prefs
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, name: &str) -> Option<String> {
        self.values.borrow().get(name).cloned()
    }

    fn set(&self, name: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_preferences_round_trip_a_value() {
        let prefs = MemoryPreferences::new();
        assert_eq!(prefs.get(THEME_PREF_KEY), None);
        prefs.set(THEME_PREF_KEY, "dark");
        assert_eq!(prefs.get(THEME_PREF_KEY).as_deref(), Some("dark"));
        prefs.set(THEME_PREF_KEY, "light");
        assert_eq!(prefs.get(THEME_PREF_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn missing_local_storage_keeps_preferences_for_the_session() {
        let prefs = LocalPreferences::from_storage(None);
        assert!(!prefs.is_available());
        assert_eq!(prefs.get(LANGUAGE_PREF_KEY), None);
        prefs.set(LANGUAGE_PREF_KEY, "en");
        assert_eq!(prefs.get(LANGUAGE_PREF_KEY).as_deref(), Some("en"));
        assert_eq!(prefs.get(THEME_PREF_KEY), None);
    }

    #[test]
    fn memory_preferences_keep_names_apart() {
        let prefs = MemoryPreferences::with(LANGUAGE_PREF_KEY, "en");
        assert_eq!(prefs.get(THEME_PREF_KEY), None);
        assert_eq!(prefs.get(LANGUAGE_PREF_KEY).as_deref(), Some("en"));
    }
}
