// ============================================================================
// SITE - Contexto de la página
// ============================================================================
// Se crea una vez en document-ready y vive toda la sesión. Cada controlador
// es dueño de sus listeners; mientras el Site exista siguen registrados.
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::config::CONFIG;
use crate::dom::localizer::Localizer;
use crate::services::{TranslationClient, TranslationStore};
use crate::utils::storage::{LocalPreferences, PreferenceStore};
use crate::viewmodels::LanguageViewModel;
use crate::views::{stamp_year, CursorGlow, LanguageToggle, MobileMenu, ProjectVideos, ThemeToggle};

pub struct Site {
    store: Rc<TranslationStore>,
    _menu: Option<MobileMenu>,
    _theme: Option<ThemeToggle>,
    _language: Option<LanguageToggle>,
    _glow: Option<CursorGlow>,
    _videos: Option<ProjectVideos>,
}

impl Site {
    /// Monta todos los controladores; uno que falle no impide el resto
    pub fn boot() -> Self {
        let local = LocalPreferences::new();
        if !local.is_available() {
            log::warn!("⚠️ [SITE] localStorage no disponible: las preferencias solo duran esta sesión");
        }
        let prefs: Rc<dyn PreferenceStore> = Rc::new(local);

        let store = Rc::new(TranslationStore::new(
            Rc::new(TranslationClient::new()),
            CONFIG.default_language,
        ));
        let language_vm = Rc::new(LanguageViewModel::new(Rc::clone(&store), Rc::clone(&prefs)));

        let site = Self {
            _menu: mounted("menú", MobileMenu::mount(CONFIG.mobile_breakpoint)),
            _theme: mounted("tema", ThemeToggle::mount(prefs)),
            _language: mounted("idioma", Ok(LanguageToggle::mount(language_vm, CONFIG.default_language))),
            _glow: mounted("cursor glow", CursorGlow::mount(CONFIG.glow_damping)),
            _videos: mounted("vídeos", ProjectVideos::mount()),
            store,
        };

        if !stamp_year() {
            log::debug!("ℹ️ [SITE] Sin #year en la página");
        }
        log::info!("✅ [SITE] Sitio inicializado");
        site
    }

    /// Vuelve a aplicar el idioma activo (p.ej. tras inyectar HTML nuevo)
    pub fn relocalize(&self) -> Result<usize, JsValue> {
        Localizer::new(&self.store).apply_all()
    }
}

fn mounted<T>(name: &str, result: Result<Option<T>, JsValue>) -> Option<T> {
    match result {
        Ok(Some(controller)) => {
            log::debug!("✅ [SITE] {} montado", name);
            Some(controller)
        }
        Ok(None) => {
            log::debug!("ℹ️ [SITE] {}: elementos ausentes, no se inicializa", name);
            None
        }
        Err(e) => {
            log::error!("❌ [SITE] Error inicializando {}: {:?}", name, e);
            None
        }
    }
}
