// ============================================================================
// TRANSLATION STORE - Idioma activo + caché de tablas
// ============================================================================
// - Cada idioma se descarga como máximo una vez por vida de la página.
// - Una carga en vuelo se comparte: quien pida el mismo idioma espera esa
//   misma descarga en lugar de lanzar otra.
// - Un fallo se cachea como tabla vacía; `resolve` nunca falla.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use futures_util::future::{FutureExt, LocalBoxFuture, Shared};

use crate::models::{Language, TranslationTable};
use crate::services::translation_client::TranslationSource;

type PendingLoad = Shared<LocalBoxFuture<'static, Rc<TranslationTable>>>;

enum CacheSlot {
    Loading(PendingLoad),
    Ready(Rc<TranslationTable>),
}

pub struct TranslationStore {
    active: Cell<Language>,
    cache: RefCell<HashMap<Language, CacheSlot>>,
    source: Rc<dyn TranslationSource>,
}

impl TranslationStore {
    pub fn new(source: Rc<dyn TranslationSource>, initial: Language) -> Self {
        Self {
            active: Cell::new(initial),
            cache: RefCell::new(HashMap::new()),
            source,
        }
    }

    pub fn active(&self) -> Language {
        self.active.get()
    }

    /// Cambia el idioma activo. Si su tabla aún no está cargada se comporta
    /// como tabla vacía hasta que termine `ensure_loaded`.
    pub fn set_active(&self, lang: Language) {
        self.active.set(lang);
    }

    #[cfg(test)]
    pub fn is_loaded(&self, lang: Language) -> bool {
        matches!(self.cache.borrow().get(&lang), Some(CacheSlot::Ready(_)))
    }

    /// Texto para `key` en el idioma activo, o `""` si no existe
    pub fn resolve(&self, key: &str) -> String {
        match self.cache.borrow().get(&self.active.get()) {
            Some(CacheSlot::Ready(table)) => table.get(key).unwrap_or_default().to_string(),
            _ => String::new(),
        }
    }

    /// Garantiza que la tabla de `lang` esté en caché (cargada o vacía por error)
    pub async fn ensure_loaded(&self, lang: Language) {
        let pending = {
            let mut cache = self.cache.borrow_mut();
            match cache.get(&lang) {
                Some(CacheSlot::Ready(_)) => return,
                Some(CacheSlot::Loading(pending)) => pending.clone(),
                None => {
                    let pending = load_or_empty(self.source.fetch(lang), lang)
                        .boxed_local()
                        .shared();
                    cache.insert(lang, CacheSlot::Loading(pending.clone()));
                    pending
                }
            }
        };

        // El borrow se suelta antes del await: otras tareas pueden consultar la caché
        let table = pending.await;
        self.cache
            .borrow_mut()
            .insert(lang, CacheSlot::Ready(table));
    }
}

async fn load_or_empty(
    fetch: LocalBoxFuture<'static, Result<TranslationTable, String>>,
    lang: Language,
) -> Rc<TranslationTable> {
    match fetch.await {
        Ok(table) if table.is_empty() => {
            log::warn!("⚠️ [I18N] Tabla '{}' sin traducciones de texto", lang.code());
            Rc::new(table)
        }
        Ok(table) => {
            log::info!("🌍 [I18N] {} traducciones cargadas para '{}'", table.len(), lang.code());
            Rc::new(table)
        }
        Err(e) => {
            log::warn!("⚠️ [I18N] No se pudieron cargar las traducciones '{}': {}", lang.code(), e);
            Rc::new(TranslationTable::empty())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::join;

    /// Fuente falsa que cuenta las descargas por idioma
    struct FakeSource {
        tables: HashMap<Language, Result<TranslationTable, String>>,
        calls: Rc<RefCell<Vec<Language>>>,
    }

    impl FakeSource {
        fn new() -> Self {
            Self {
                tables: HashMap::new(),
                calls: Rc::new(RefCell::new(Vec::new())),
            }
        }

        fn with(mut self, lang: Language, table: Result<TranslationTable, String>) -> Self {
            self.tables.insert(lang, table);
            self
        }

        fn calls_for(&self, lang: Language) -> usize {
            self.calls.borrow().iter().filter(|l| **l == lang).count()
        }
    }

    impl TranslationSource for FakeSource {
        fn fetch(&self, lang: Language) -> LocalBoxFuture<'static, Result<TranslationTable, String>> {
            self.calls.borrow_mut().push(lang);
            let result = self
                .tables
                .get(&lang)
                .cloned()
                .unwrap_or_else(|| Err("HTTP 404: Not Found".to_string()));
            async move { result }.boxed_local()
        }
    }

    fn store_with(source: FakeSource) -> (TranslationStore, Rc<FakeSource>) {
        let source = Rc::new(source);
        let store = TranslationStore::new(source.clone(), Language::Spanish);
        (store, source)
    }

    fn english() -> TranslationTable {
        [("hello", "Hi"), ("nav.work", "Work")].into_iter().collect()
    }

    fn spanish() -> TranslationTable {
        [("hello", "Hola")].into_iter().collect()
    }

    #[test]
    fn unknown_key_resolves_to_empty_string() {
        let (store, _) = store_with(FakeSource::new().with(Language::Spanish, Ok(spanish())));
        block_on(store.ensure_loaded(Language::Spanish));
        assert_eq!(store.resolve("does.not.exist"), "");
        assert_eq!(store.resolve(""), "");
    }

    #[test]
    fn unloaded_active_language_behaves_as_empty_table() {
        let (store, source) = store_with(FakeSource::new().with(Language::English, Ok(english())));
        store.set_active(Language::English);
        assert_eq!(store.resolve("hello"), "");
        assert_eq!(source.calls_for(Language::English), 0);
    }

    #[test]
    fn loading_twice_fetches_once() {
        let (store, source) = store_with(FakeSource::new().with(Language::English, Ok(english())));
        block_on(store.ensure_loaded(Language::English));
        block_on(store.ensure_loaded(Language::English));
        assert_eq!(source.calls_for(Language::English), 1);
        assert!(store.is_loaded(Language::English));
    }

    #[test]
    fn overlapping_loads_share_one_fetch() {
        let (store, source) = store_with(FakeSource::new().with(Language::English, Ok(english())));
        block_on(async {
            join!(
                store.ensure_loaded(Language::English),
                store.ensure_loaded(Language::English)
            );
        });
        assert_eq!(source.calls_for(Language::English), 1);
        store.set_active(Language::English);
        assert_eq!(store.resolve("hello"), "Hi");
    }

    #[test]
    fn failed_load_is_cached_as_empty_and_not_retried() {
        let (store, source) = store_with(FakeSource::new());
        block_on(store.ensure_loaded(Language::English));
        block_on(store.ensure_loaded(Language::English));
        assert_eq!(source.calls_for(Language::English), 1);
        assert!(store.is_loaded(Language::English));
        store.set_active(Language::English);
        assert_eq!(store.resolve("hello"), "");
    }

    #[test]
    fn resolve_only_reads_the_active_table() {
        let (store, _) = store_with(
            FakeSource::new()
                .with(Language::Spanish, Ok(spanish()))
                .with(Language::English, Ok(english())),
        );
        block_on(store.ensure_loaded(Language::Spanish));
        block_on(store.ensure_loaded(Language::English));

        store.set_active(Language::English);
        assert_eq!(store.resolve("hello"), "Hi");
        assert_eq!(store.resolve("nav.work"), "Work");

        store.set_active(Language::Spanish);
        assert_eq!(store.resolve("hello"), "Hola");
        assert_eq!(store.resolve("nav.work"), "");
    }
}
