// ============================================================================
// VIEWS - Enlazan el DOM existente con los viewmodels (sin lógica propia)
// ============================================================================

pub mod cursor_glow;
pub mod footer;
pub mod language_toggle;
pub mod menu;
pub mod project_videos;
pub mod theme_toggle;

pub use cursor_glow::CursorGlow;
pub use footer::stamp_year;
pub use language_toggle::LanguageToggle;
pub use menu::MobileMenu;
pub use project_videos::ProjectVideos;
pub use theme_toggle::ThemeToggle;
