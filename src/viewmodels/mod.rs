// ============================================================================
// VIEWMODELS - Estado + lógica UI (sin DOM)
// ============================================================================

pub mod glow_viewmodel;
pub mod language_viewmodel;
pub mod menu_viewmodel;
pub mod theme_viewmodel;
pub mod video_viewmodel;

pub use glow_viewmodel::*;
pub use language_viewmodel::*;
pub use menu_viewmodel::*;
pub use theme_viewmodel::*;
pub use video_viewmodel::*;
