//! Slide-deck engine: navigation state, auto-play, full-screen and key
//! handling, composed by [`Controller`], plus the pure slide renderer.

pub mod autoplay;
pub mod controller;
pub mod fullscreen;
pub mod keys;
pub mod protocol;
pub mod renderer;
pub mod shell;
pub mod state;

pub use autoplay::{AUTOPLAY_PERIOD, AutoPlay, IntervalTicker, Tick, Ticker};
pub use controller::{Controller, KeyOutcome};
pub use fullscreen::{FullScreen, FullScreenError, FullScreenRequest};
pub use keys::{Command, Key};
pub use renderer::{SlideBody, SlideView, render};
pub use shell::{EXIT_ROUTE, Notice, NoticeLevel, Shell};
pub use state::{Cursor, PresentationState, progress_percent};
