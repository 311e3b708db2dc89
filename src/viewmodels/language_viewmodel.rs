use std::cell::Cell;
use std::rc::Rc;

use crate::models::Language;
use crate::services::TranslationStore;
use crate::utils::storage::{PreferenceStore, LANGUAGE_PREF_KEY};

/// Cambio de idioma: cargar tabla, activar, persistir.
/// La vista se encarga de relocalizar el DOM y del botón.
pub struct LanguageViewModel {
    store: Rc<TranslationStore>,
    prefs: Rc<dyn PreferenceStore>,
    /// El usuario ya eligió idioma: la carga inicial no debe pisarlo
    user_choice: Cell<bool>,
}

impl LanguageViewModel {
    pub fn new(store: Rc<TranslationStore>, prefs: Rc<dyn PreferenceStore>) -> Self {
        Self {
            store,
            prefs,
            user_choice: Cell::new(false),
        }
    }

    pub fn store(&self) -> &TranslationStore {
        &self.store
    }

    /// Preferencia guardada si es válida; si no, el idioma por defecto
    pub fn initial_language(&self, default: Language) -> Language {
        self.prefs
            .get(LANGUAGE_PREF_KEY)
            .as_deref()
            .and_then(Language::from_code)
            .unwrap_or(default)
    }

    /// Carga y activa el idioma inicial (no se persiste).
    /// Si durante la carga hubo un cambio de idioma, gana ese cambio.
    pub async fn activate_initial(&self, default: Language) -> Language {
        let lang = self.initial_language(default);
        self.store.ensure_loaded(lang).await;
        if self.user_choice.get() {
            let chosen = self.store.active();
            log::debug!("🌍 [I18N] '{}' ya elegido, se descarta '{}'", chosen.code(), lang.code());
            return chosen;
        }
        self.store.set_active(lang);
        lang
    }

    /// Pasa al otro idioma y lo guarda
    pub async fn toggle(&self) -> Language {
        let next = self.store.active().other();
        self.user_choice.set(true);
        self.store.ensure_loaded(next).await;
        self.store.set_active(next);
        self.prefs.set(LANGUAGE_PREF_KEY, next.code());
        log::info!("🌍 [I18N] Idioma cambiado a '{}'", next.code());
        next
    }
}
