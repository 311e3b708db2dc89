// Contrato con el HTML: ids, clases y atributos que lee/escribe el script

pub const MENU_TOGGLE_ID: &str = "menuToggle";
pub const MENU_ID: &str = "menu";
pub const THEME_TOGGLE_ID: &str = "themeToggle";
pub const LANG_TOGGLE_ID: &str = "langToggle";
pub const YEAR_ID: &str = "year";

pub const MENU_OPEN_CLASS: &str = "is-open";
pub const THEME_DARK_CLASS: &str = "theme-dark";
pub const THEME_LIGHT_CLASS: &str = "theme-light";
pub const PROJECT_MEDIA_SELECTOR: &str = ".project__media";

pub const I18N_KEY_ATTR: &str = "data-i18n";
pub const I18N_HTML_ATTR: &str = "data-i18n-html";
pub const I18N_ATTR_SPEC_ATTR: &str = "data-i18n-attr";
pub const I18N_SELECTOR: &str = "[data-i18n], [data-i18n-attr]";
pub const LANG_ICON_SELECTOR: &str = "span[aria-hidden=\"true\"]";

pub const CURSOR_X_PROPERTY: &str = "--cursor-x";
pub const CURSOR_Y_PROPERTY: &str = "--cursor-y";

pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";
