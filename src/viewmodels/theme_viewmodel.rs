use std::rc::Rc;

use crate::models::Theme;
use crate::utils::storage::{PreferenceStore, THEME_PREF_KEY};

/// Tema actual. Solo `toggle` (acción del usuario) escribe la preferencia.
pub struct ThemeViewModel {
    theme: Theme,
    prefs: Rc<dyn PreferenceStore>,
}

impl ThemeViewModel {
    pub fn new(prefs: Rc<dyn PreferenceStore>, system_prefers_dark: Option<bool>) -> Self {
        let stored = prefs.get(THEME_PREF_KEY);
        let theme = Theme::resolve_initial(stored.as_deref(), system_prefers_dark);
        log::debug!(
            "🎨 [THEME] Tema inicial: {} (guardado: {:?}, sistema oscuro: {:?})",
            theme.as_str(),
            stored,
            system_prefers_dark
        );
        Self { theme, prefs }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.prefs.set(THEME_PREF_KEY, self.theme.as_str());
        self.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::MemoryPreferences;

    #[test]
    fn initial_seeding_does_not_persist() {
        let prefs = Rc::new(MemoryPreferences::new());
        let vm = ThemeViewModel::new(prefs.clone(), Some(true));
        assert_eq!(vm.theme(), Theme::Dark);
        assert_eq!(prefs.get(THEME_PREF_KEY), None);
    }

    #[test]
    fn toggling_persists_the_opposite_of_prior_state() {
        let prefs = Rc::new(MemoryPreferences::new());
        let mut vm = ThemeViewModel::new(prefs.clone(), Some(true));
        assert_eq!(vm.toggle(), Theme::Light);
        assert_eq!(prefs.get(THEME_PREF_KEY).as_deref(), Some("light"));
        assert_eq!(vm.toggle(), Theme::Dark);
        assert_eq!(prefs.get(THEME_PREF_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn stored_theme_is_restored() {
        let prefs = Rc::new(MemoryPreferences::with(THEME_PREF_KEY, "dark"));
        let vm = ThemeViewModel::new(prefs, Some(false));
        assert_eq!(vm.theme(), Theme::Dark);
    }
}
