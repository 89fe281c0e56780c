use std::fmt;

/// Why the platform refused or could not carry out a full-screen change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FullScreenError {
    /// The platform denied the request (e.g. no user gesture, policy).
    Denied(String),
    /// The display surface is gone or does not support full-screen.
    Unavailable,
}

impl fmt::Display for FullScreenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FullScreenError::Denied(reason) if reason.is_empty() => write!(f, "request denied"),
            FullScreenError::Denied(reason) => write!(f, "{reason}"),
            FullScreenError::Unavailable => write!(f, "full-screen is not available"),
        }
    }
}

impl std::error::Error for FullScreenError {}

/// Platform full-screen capability. Requests are fire-and-forget: success is
/// only known once the platform reports the new status, which the owner
/// forwards to `Controller::full_screen_changed`.
pub trait FullScreen {
    fn request_enter(&mut self) -> Result<(), FullScreenError>;
    fn request_exit(&mut self) -> Result<(), FullScreenError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullScreenRequest {
    Enter,
    Exit,
}

impl FullScreenRequest {
    /// The request that flips the current status.
    pub fn toggle_from(active: bool) -> Self {
        if active { FullScreenRequest::Exit } else { FullScreenRequest::Enter }
    }

    pub fn issue<F: FullScreen>(self, adapter: &mut F) -> Result<(), FullScreenError> {
        match self {
            FullScreenRequest::Enter => adapter.request_enter(),
            FullScreenRequest::Exit => adapter.request_exit(),
        }
    }

    pub fn verb(&self) -> &'static str {
        match self {
            FullScreenRequest::Enter => "enter",
            FullScreenRequest::Exit => "exit",
        }
    }
}
