use serde::Serialize;

/// Route the presentation leaves to on exit.
pub const EXIT_ROUTE: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Warning,
}

/// Transient message shown to the viewer (a toast).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Warning, message: message.into() }
    }
}

/// The host application around a presentation view.
pub trait Shell {
    fn navigate(&mut self, route: &str);
    fn notify(&mut self, notice: Notice);
}
