use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Default time between automatic advances.
pub const AUTOPLAY_PERIOD: Duration = Duration::from_secs(5);

/// Schedules periodic ticks for one presentation view. Each tick carries the
/// generation it was started with so stale ticks can be told apart.
pub trait Ticker {
    fn start(&mut self, period: Duration, generation: u64);
    fn cancel(&mut self);
}

/// Auto-play flag plus the generation of the currently scheduled ticker.
#[derive(Debug, Clone)]
pub struct AutoPlay {
    enabled: bool,
    generation: u64,
    period: Duration,
}

impl AutoPlay {
    pub fn new(period: Duration) -> Self {
        Self {
            enabled: false,
            generation: 0,
            period,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn toggle<T: Ticker>(&mut self, ticker: &mut T) {
        self.set(!self.enabled, ticker);
    }

    /// Every transition invalidates outstanding ticks; no-op when unchanged.
    pub fn set<T: Ticker>(&mut self, enabled: bool, ticker: &mut T) {
        if enabled == self.enabled {
            return;
        }
        self.enabled = enabled;
        self.generation += 1;
        if enabled {
            ticker.start(self.period, self.generation);
        } else {
            ticker.cancel();
        }
    }

    /// True when a tick from `generation` should advance the deck.
    pub fn accepts(&self, generation: u64) -> bool {
        self.enabled && generation == self.generation
    }
}

/// Event produced by [`IntervalTicker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub generation: u64,
}

/// Ticker backed by a spawned tokio interval. The task is aborted on
/// `cancel`, on restart and on drop.
pub struct IntervalTicker {
    events: mpsc::UnboundedSender<Tick>,
    task: Option<JoinHandle<()>>,
}

impl IntervalTicker {
    pub fn new(events: mpsc::UnboundedSender<Tick>) -> Self {
        Self { events, task: None }
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }
}

impl Ticker for IntervalTicker {
    fn start(&mut self, period: Duration, generation: u64) {
        self.cancel();
        let events = self.events.clone();
        self.task = Some(actix_web::rt::spawn(async move {
            let start = tokio::time::Instant::now() + period;
            let mut interval = tokio::time::interval_at(start, period);
            loop {
                interval.tick().await;
                if events.send(Tick { generation }).is_err() {
                    break;
                }
            }
        }));
        log::debug!("Auto-play timer started (generation {generation}, every {period:?})");
    }

    fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            log::debug!("Auto-play timer cancelled");
        }
    }
}

impl Drop for IntervalTicker {
    fn drop(&mut self) {
        self.cancel();
    }
}
