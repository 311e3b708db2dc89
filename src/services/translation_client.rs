// ============================================================================
// CLIENTE DE TRADUCCIONES - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Descarga `<base>/<lang>.json`. Sin caché ni lógica de fallback: eso vive en
// TranslationStore.
// ============================================================================

use futures_util::future::{FutureExt, LocalBoxFuture};
use gloo_net::http::Request;
use web_sys::RequestCache;

use crate::config::CONFIG;
use crate::models::{Language, TranslationTable};

/// Origen de tablas de traducción
pub trait TranslationSource {
    fn fetch(&self, lang: Language) -> LocalBoxFuture<'static, Result<TranslationTable, String>>;
}

/// Cliente HTTP para los JSON de `i18n/`
#[derive(Clone, Debug)]
pub struct TranslationClient {
    base_path: String,
}

impl TranslationClient {
    pub fn new() -> Self {
        Self::with_base_path(&CONFIG.i18n_base_path)
    }

    pub fn with_base_path(base_path: &str) -> Self {
        Self {
            base_path: base_path.trim_end_matches('/').to_string(),
        }
    }

    pub fn url_for(&self, lang: Language) -> String {
        format!("{}/{}.json", self.base_path, lang.code())
    }

    pub async fn get_translations(url: String) -> Result<TranslationTable, String> {
        log::debug!("🌐 [I18N] GET {}", url);

        let response = Request::get(&url)
            .cache(RequestCache::NoStore)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        TranslationTable::from_json_str(&body)
    }
}

impl Default for TranslationClient {
    fn default() -> Self {
        Self::new()
    }
}

impl TranslationSource for TranslationClient {
    fn fetch(&self, lang: Language) -> LocalBoxFuture<'static, Result<TranslationTable, String>> {
        Self::get_translations(self.url_for(lang)).boxed_local()
    }
}
