//! Clock refresher - keeps every displayed clock current
//!
//! Displays register explicitly and receive a fresh [`TimeSnapshot`] on
//! every tick. At most one update cycle runs at a time: starting a cycle
//! stops the previous one, and each cycle is named by the
//! [`RefreshHandle`] returned from [`ClockRefresher::start`].

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::{TimeSnapshot, WorldClock};

/// Shortest interval a cycle will run at
pub const MIN_REFRESH_INTERVAL: Duration = Duration::from_millis(10);

/// A place that shows one country's clock
pub trait ClockDisplay: Send + Sync {
    /// Country whose clock this display shows
    fn country(&self) -> &str;

    /// Write an updated time/date
    fn show(&self, snapshot: &TimeSnapshot);
}

/// Registry key for a subscribed display
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// Names one update cycle; required to stop it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RefreshHandle {
    generation: u64,
}

impl RefreshHandle {
    #[inline]
    pub fn generation(self) -> u64 {
        self.generation
    }
}

/// Refresher configuration
#[derive(Clone, Debug)]
pub struct RefresherConfig {
    /// Time between updates
    pub interval: Duration,
}

impl Default for RefresherConfig {
    fn default() -> Self {
        RefresherConfig {
            interval: Duration::from_secs(1),
        }
    }
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    entries: Vec<(SubscriptionId, Arc<dyn ClockDisplay>)>,
}

impl Registry {
    fn displays(&self) -> Vec<Arc<dyn ClockDisplay>> {
        self.entries.iter().map(|(_, d)| Arc::clone(d)).collect()
    }
}

struct ActiveCycle {
    handle: RefreshHandle,
    task: JoinHandle<()>,
}

/// Owns the subscription registry and the single update cycle
pub struct ClockRefresher {
    clock: Arc<WorldClock>,
    registry: Arc<Mutex<Registry>>,
    config: RefresherConfig,
    active: Option<ActiveCycle>,
    generation: u64,
    /// Generation of the running cycle, 0 when stopped
    live: Arc<AtomicU64>,
    ticks: Arc<AtomicU64>,
}

impl ClockRefresher {
    /// Create a refresher with the default one-second interval
    pub fn new(clock: WorldClock) -> Self {
        Self::with_config(clock, RefresherConfig::default())
    }

    pub fn with_config(clock: WorldClock, config: RefresherConfig) -> Self {
        ClockRefresher {
            clock: Arc::new(clock),
            registry: Arc::new(Mutex::new(Registry::default())),
            config,
            active: None,
            generation: 0,
            live: Arc::new(AtomicU64::new(0)),
            ticks: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn clock(&self) -> &WorldClock {
        &self.clock
    }

    pub fn config(&self) -> &RefresherConfig {
        &self.config
    }

    /// Register a display for updates
    pub fn subscribe(&self, display: Arc<dyn ClockDisplay>) -> SubscriptionId {
        let mut registry = self.registry.lock();
        let id = SubscriptionId(registry.next_id);
        registry.next_id += 1;
        registry.entries.push((id, display));
        id
    }

    /// Remove one display; returns false if it was not registered
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut registry = self.registry.lock();
        let before = registry.entries.len();
        registry.entries.retain(|(entry, _)| *entry != id);
        registry.entries.len() != before
    }

    /// Drop every subscription
    pub fn clear_subscriptions(&self) {
        self.registry.lock().entries.clear();
    }

    pub fn subscription_count(&self) -> usize {
        self.registry.lock().entries.len()
    }

    /// Update every subscribed display once, immediately.
    /// Returns the number of displays written.
    pub fn refresh_now(&self) -> usize {
        refresh_all(&self.clock, &self.registry, || true)
    }

    /// Start the update cycle, stopping any cycle already running.
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self) -> RefreshHandle {
        self.stop_active();

        self.generation += 1;
        let handle = RefreshHandle {
            generation: self.generation,
        };

        let clock = Arc::clone(&self.clock);
        let registry = Arc::clone(&self.registry);
        let ticks = Arc::clone(&self.ticks);
        let live = Arc::clone(&self.live);
        let generation = handle.generation;
        live.store(generation, Ordering::SeqCst);
        let period = self.config.interval.max(MIN_REFRESH_INTERVAL);

        let task = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                // A stopped cycle may still be mid-tick until its next await
                if live.load(Ordering::SeqCst) != generation {
                    break;
                }
                refresh_all(&clock, &registry, || live.load(Ordering::SeqCst) == generation);
                ticks.fetch_add(1, Ordering::Relaxed);
            }
        });

        tracing::debug!(generation = handle.generation, ?period, "clock refresh started");
        self.active = Some(ActiveCycle { handle, task });
        handle
    }

    /// Stop the cycle named by `handle`. A handle for a cycle that was
    /// already replaced or stopped is ignored and returns false.
    pub fn stop(&mut self, handle: RefreshHandle) -> bool {
        if self.active_handle() != Some(handle) {
            return false;
        }
        self.stop_active()
    }

    /// Stop whichever cycle is running
    pub fn stop_active(&mut self) -> bool {
        match self.active.take() {
            Some(cycle) => {
                self.live.store(0, Ordering::SeqCst);
                cycle.task.abort();
                tracing::debug!(generation = cycle.handle.generation, "clock refresh stopped");
                true
            }
            None => false,
        }
    }

    /// Stop the cycle and drop all subscriptions
    pub fn reset(&mut self) {
        self.stop_active();
        self.clear_subscriptions();
    }

    pub fn is_active(&self) -> bool {
        self.active
            .as_ref()
            .map(|cycle| !cycle.task.is_finished())
            .unwrap_or(false)
    }

    pub fn active_handle(&self) -> Option<RefreshHandle> {
        self.active.as_ref().map(|cycle| cycle.handle)
    }

    /// Ticks completed by all cycles so far
    pub fn ticks(&self) -> u64 {
        self.ticks.load(Ordering::Relaxed)
    }
}

impl Drop for ClockRefresher {
    fn drop(&mut self) {
        self.stop_active();
    }
}

/// Write each registered display while `current` holds. The registry lock
/// is released before any display is written.
fn refresh_all<F>(clock: &WorldClock, registry: &Mutex<Registry>, current: F) -> usize
where
    F: Fn() -> bool,
{
    let displays = registry.lock().displays();
    let mut written = 0;
    for display in &displays {
        if !current() {
            break;
        }
        display.show(&clock.current_time(display.country()));
        written += 1;
    }
    written
}
