use std::time::Duration;

use crate::models::slide::{Deck, Slide};

use super::autoplay::{AutoPlay, Ticker};
use super::fullscreen::{FullScreen, FullScreenError, FullScreenRequest};
use super::keys::{Command, Key};
use super::renderer::{self, SlideView};
use super::shell::{EXIT_ROUTE, Notice, Shell};
use super::state::{Cursor, PresentationState};

/// What a key press did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyOutcome {
    pub command: Option<Command>,
    pub prevent_default: bool,
}

/// Navigation, auto-play and full-screen state of one mounted presentation.
///
/// The controller owns its ticker: the timer is cancelled whenever auto-play
/// turns off and when the controller is dropped. Full-screen status follows
/// the platform: it changes only through [`Controller::full_screen_changed`].
pub struct Controller<F: FullScreen, T: Ticker, S: Shell> {
    deck: Deck,
    cursor: Cursor,
    auto_play: AutoPlay,
    full_screen: bool,
    display: F,
    ticker: T,
    shell: S,
}

impl<F: FullScreen, T: Ticker, S: Shell> Controller<F, T, S> {
    pub fn new(deck: Deck, period: Duration, display: F, ticker: T, shell: S) -> Self {
        let cursor = Cursor::new(deck.len());
        Self {
            deck,
            cursor,
            auto_play: AutoPlay::new(period),
            full_screen: false,
            display,
            ticker,
            shell,
        }
    }

    pub fn state(&self) -> PresentationState {
        PresentationState {
            current_index: self.cursor.index(),
            is_auto_play: self.auto_play.is_enabled(),
            is_full_screen: self.full_screen,
        }
    }

    pub fn total(&self) -> usize {
        self.cursor.total().get()
    }

    pub fn progress_percent(&self) -> u8 {
        self.cursor.percent()
    }

    pub fn current_slide(&self) -> &Slide {
        // the cursor never leaves the deck
        &self.deck.slides()[self.cursor.index()]
    }

    pub fn render(&self) -> SlideView {
        renderer::render(self.current_slide(), self.cursor.index(), self.total())
    }

    pub fn next(&mut self) {
        self.cursor.next();
    }

    pub fn previous(&mut self) {
        self.cursor.previous();
    }

    pub fn jump_to(&mut self, index: usize) {
        if !self.cursor.jump_to(index) && index >= self.total() {
            log::debug!("Ignoring jump to slide {index} of {}", self.total());
        }
    }

    pub fn first(&mut self) {
        self.cursor.first();
    }

    pub fn last(&mut self) {
        self.cursor.last();
    }

    pub fn toggle_auto_play(&mut self) {
        self.auto_play.toggle(&mut self.ticker);
    }

    /// Back to the first slide with auto-play off. Full-screen is untouched.
    pub fn reset(&mut self) {
        self.cursor.first();
        self.auto_play.set(false, &mut self.ticker);
    }

    pub fn toggle_full_screen(&mut self) {
        self.request_full_screen(FullScreenRequest::toggle_from(self.full_screen));
    }

    /// Leave full-screen if active, otherwise leave the presentation.
    pub fn exit(&mut self) {
        if self.full_screen {
            self.request_full_screen(FullScreenRequest::Exit);
        } else {
            self.shell.navigate(EXIT_ROUTE);
        }
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Next => self.next(),
            Command::Previous => self.previous(),
            Command::JumpTo(index) => self.jump_to(index),
            Command::First => self.first(),
            Command::Last => self.last(),
            Command::ToggleAutoPlay => self.toggle_auto_play(),
            Command::ToggleFullScreen => self.toggle_full_screen(),
            Command::Reset => self.reset(),
            Command::Exit => self.exit(),
        }
    }

    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        let command = Command::for_key(key);
        if let Some(command) = command {
            self.apply(command);
        }
        KeyOutcome {
            command,
            prevent_default: key.prevents_default(),
        }
    }

    /// Timer callback. Ticks from a cancelled or restarted timer are dropped.
    pub fn tick(&mut self, generation: u64) {
        if self.auto_play.accepts(generation) {
            self.cursor.next();
        } else {
            log::trace!("Dropping stale auto-play tick (generation {generation})");
        }
    }

    /// Platform notification that full-screen status changed.
    pub fn full_screen_changed(&mut self, active: bool) {
        self.full_screen = active;
    }

    /// Platform notification that a full-screen request failed.
    pub fn full_screen_failed(&mut self, error: FullScreenError) {
        log::warn!("Full-screen request failed: {error}");
        self.shell
            .notify(Notice::warning(format!("Could not change full-screen mode: {error}")));
    }

    fn request_full_screen(&mut self, request: FullScreenRequest) {
        log::debug!("Requesting full-screen {}", request.verb());
        if let Err(error) = request.issue(&mut self.display) {
            self.full_screen_failed(error);
        }
    }

    pub fn shell(&self) -> &S {
        &self.shell
    }

    pub fn display(&self) -> &F {
        &self.display
    }

    pub fn ticker(&self) -> &T {
        &self.ticker
    }
}

impl<F: FullScreen, T: Ticker, S: Shell> Drop for Controller<F, T, S> {
    fn drop(&mut self) {
        self.ticker.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::slide::{SlideContent, SlideKind, SlideRecord};
    use crate::presentation::autoplay::AUTOPLAY_PERIOD;

    #[derive(Default)]
    struct Display {
        requests: Vec<FullScreenRequest>,
        refuse: Option<FullScreenError>,
    }

    impl FullScreen for Display {
        fn request_enter(&mut self) -> Result<(), FullScreenError> {
            self.requests.push(FullScreenRequest::Enter);
            self.refuse.clone().map_or(Ok(()), Err)
        }
        fn request_exit(&mut self) -> Result<(), FullScreenError> {
            self.requests.push(FullScreenRequest::Exit);
            self.refuse.clone().map_or(Ok(()), Err)
        }
    }

    #[derive(Default)]
    struct Timer {
        running: Option<u64>,
    }

    impl Ticker for Timer {
        fn start(&mut self, _period: Duration, generation: u64) {
            self.running = Some(generation);
        }
        fn cancel(&mut self) {
            self.running = None;
        }
    }

    #[derive(Default)]
    struct Host {
        routes: Vec<String>,
        notices: Vec<Notice>,
    }

    impl Shell for Host {
        fn navigate(&mut self, route: &str) {
            self.routes.push(route.to_string());
        }
        fn notify(&mut self, notice: Notice) {
            self.notices.push(notice);
        }
    }

    fn deck(n: u32) -> Deck {
        let records = (1..=n)
            .map(|id| SlideRecord {
                id,
                title: format!("Slide {id}"),
                subtitle: None,
                content: SlideContent::Text(format!("body {id}")),
                image: None,
                source_page: String::new(),
                kind: SlideKind::Content,
                stats: None,
                process_steps: None,
            })
            .collect();
        Deck::from_records(records).unwrap()
    }

    fn controller(n: u32) -> Controller<Display, Timer, Host> {
        Controller::new(deck(n), AUTOPLAY_PERIOD, Display::default(), Timer::default(), Host::default())
    }

    #[test]
    fn starts_at_initial_state() {
        let c = controller(4);
        assert_eq!(c.state(), PresentationState::default());
        assert_eq!(c.progress_percent(), 25);
        assert_eq!(c.current_slide().id, 1);
    }

    #[test]
    fn renders_current_slide() {
        let mut c = controller(3);
        c.last();
        let view = c.render();
        assert_eq!(view.title, "Slide 3");
        assert_eq!(view.position, 3);
        assert_eq!(view.total, 3);
    }

    #[test]
    fn navigation_wraps() {
        let mut c = controller(3);
        c.previous();
        assert_eq!(c.state().current_index, 2);
        c.next();
        assert_eq!(c.state().current_index, 0);
    }

    #[test]
    fn jump_out_of_range_keeps_index() {
        let mut c = controller(3);
        c.jump_to(1);
        c.jump_to(3);
        assert_eq!(c.state().current_index, 1);
    }

    #[test]
    fn auto_play_tick_advances_only_current_generation() {
        let mut c = controller(5);
        c.toggle_auto_play();
        let generation = c.ticker().running.unwrap();
        c.tick(generation);
        assert_eq!(c.state().current_index, 1);

        c.toggle_auto_play();
        assert!(c.ticker().running.is_none());
        c.tick(generation);
        assert_eq!(c.state().current_index, 1);
    }

    #[test]
    fn reset_stops_auto_play_keeps_full_screen() {
        let mut c = controller(5);
        c.last();
        c.toggle_auto_play();
        c.full_screen_changed(true);
        c.reset();
        let state = c.state();
        assert_eq!(state.current_index, 0);
        assert!(!state.is_auto_play);
        assert!(state.is_full_screen);
        assert!(c.ticker().running.is_none());
    }

    #[test]
    fn full_screen_waits_for_platform() {
        let mut c = controller(2);
        c.toggle_full_screen();
        assert_eq!(c.display().requests, vec![FullScreenRequest::Enter]);
        assert!(!c.state().is_full_screen);
        c.full_screen_changed(true);
        assert!(c.state().is_full_screen);

        c.toggle_full_screen();
        assert_eq!(c.display().requests.last(), Some(&FullScreenRequest::Exit));
    }

    #[test]
    fn rejected_full_screen_notifies_once() {
        let mut c = controller(3);
        c.next();
        c.toggle_auto_play();
        c.display.refuse = Some(FullScreenError::Denied("Permissions check failed".into()));
        let before = c.state();

        c.toggle_full_screen();

        assert_eq!(c.state(), before);
        assert!(!c.state().is_full_screen);
        assert_eq!(c.shell().notices.len(), 1);
    }

    #[test]
    fn escape_leaves_full_screen_before_presentation() {
        let mut c = controller(2);
        c.full_screen_changed(true);
        let outcome = c.handle_key(Key::Escape);
        assert_eq!(outcome.command, Some(Command::Exit));
        assert_eq!(c.display().requests, vec![FullScreenRequest::Exit]);
        assert!(c.shell().routes.is_empty());

        c.full_screen_changed(false);
        c.handle_key(Key::Escape);
        assert_eq!(c.shell().routes, vec![EXIT_ROUTE.to_string()]);
    }

    #[test]
    fn keys_drive_navigation() {
        let mut c = controller(4);
        assert!(c.handle_key(Key::Space).prevent_default);
        assert_eq!(c.state().current_index, 1);
        c.handle_key(Key::End);
        assert_eq!(c.state().current_index, 3);
        c.handle_key(Key::ArrowRight);
        assert_eq!(c.state().current_index, 0);
        c.handle_key(Key::ArrowLeft);
        assert_eq!(c.state().current_index, 3);
        c.handle_key(Key::Home);
        assert_eq!(c.state().current_index, 0);
        let outcome = c.handle_key(Key::Char('x'));
        assert_eq!(outcome.command, None);
        assert!(!outcome.prevent_default);
    }
}
