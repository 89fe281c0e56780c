// Template context structures for Askama templates, organized by page.
// All types are re-exported: `use ramaera::templates_structs::*`

use crate::config::AppConfig;

/// Common context shared by all pages.
/// Templates access these as `ctx.app_name`, `ctx.presentation_mode`, etc.
pub struct PageContext {
    pub app_name: String,
    pub current_path: String,
    /// Set while a presentation owns the viewport; the layout hides its chrome.
    pub presentation_mode: bool,
}

impl PageContext {
    pub fn build(config: &AppConfig, current_path: &str) -> Self {
        Self {
            app_name: config.app_name.clone(),
            current_path: current_path.to_string(),
            presentation_mode: false,
        }
    }

    pub fn presenting(mut self) -> Self {
        self.presentation_mode = true;
        self
    }

    pub fn is_current(&self, path: &str) -> bool {
        self.current_path == path
    }
}

mod site;
mod presentation;
mod api;

pub use self::site::{HomeTemplate, HeroSummary};
pub use self::presentation::{PresentationPageTemplate, SlideFragment, DeckControls, SlideDot};
pub use self::api::{ApiErrorResponse, ApiMessage};
