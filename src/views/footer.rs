use crate::dom::element::get_element_by_id;
use crate::utils::constants::YEAR_ID;

/// Escribe el año actual en `#year`. Devuelve `false` si no existe.
pub fn stamp_year() -> bool {
    let Some(year_el) = get_element_by_id(YEAR_ID) else {
        return false;
    };
    let year = js_sys::Date::new_0().get_full_year();
    year_el.set_text_content(Some(&year.to_string()));
    true
}
