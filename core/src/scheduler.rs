//! Countdown refresh scheduler
//!
//! A background task that ticks at a fixed cadence and, every Nth tick,
//! posts a [`SchedulerEvent::Refresh`] to the task that owns the registry.
//! It never touches the registry itself; the receiver re-sorts and redraws.
//!
//! Shutdown is cooperative: [`CountdownScheduler::shutdown`] clears a flag
//! that the task checks once per tick, then waits for it to finish. That
//! takes at most one tick.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use bosswatch_types::AppConfig;
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::task::JoinHandle;

/// Messages posted to the owning task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerEvent {
    /// Time to re-sort and redraw. `tick` is the tick count that fired it.
    Refresh { tick: u64 },
}

/// Cadence rule: fires on ticks N, 2N, 3N, ...
#[derive(Debug, Clone, Copy)]
pub struct TickCounter {
    every: u64,
    ticks: u64,
}

impl TickCounter {
    /// `every` of zero is treated as one.
    pub fn new(every: u32) -> Self {
        Self {
            every: u64::from(every.max(1)),
            ticks: 0,
        }
    }

    /// Advance one tick. Returns true when a refresh is due.
    pub fn tick(&mut self) -> bool {
        self.ticks += 1;
        self.ticks % self.every == 0
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulerConfig {
    pub tick: Duration,
    pub refresh_every: u32,
}

impl From<&AppConfig> for SchedulerConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            tick: Duration::from_millis(config.tick_millis.max(1)),
            refresh_every: config.refresh_every_ticks,
        }
    }
}

/// Handle to the running scheduler task
pub struct CountdownScheduler {
    running: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

impl CountdownScheduler {
    /// Spawn the tick loop on the current tokio runtime.
    pub fn spawn(config: SchedulerConfig, tx: mpsc::Sender<SchedulerEvent>) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&running);
        let handle = tokio::spawn(run(config, flag, tx));
        Self { running, handle }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst) && !self.handle.is_finished()
    }

    /// Stop ticking and wait for the task to exit.
    pub async fn shutdown(self) {
        self.running.store(false, Ordering::SeqCst);
        if let Err(e) = self.handle.await {
            tracing::warn!(error = %e, "Countdown scheduler task failed");
        }
    }
}

async fn run(config: SchedulerConfig, running: Arc<AtomicBool>, tx: mpsc::Sender<SchedulerEvent>) {
    let mut counter = TickCounter::new(config.refresh_every);
    tracing::info!(
        tick_ms = config.tick.as_millis() as u64,
        refresh_every = config.refresh_every,
        "Countdown scheduler started"
    );

    loop {
        tokio::time::sleep(config.tick).await;
        if !running.load(Ordering::SeqCst) {
            break;
        }
        if !counter.tick() {
            continue;
        }

        let tick = counter.ticks();
        match tx.try_send(SchedulerEvent::Refresh { tick }) {
            Ok(()) => tracing::trace!(tick, "Refresh requested"),
            // A refresh is already queued; the owner will catch up
            Err(TrySendError::Full(_)) => tracing::debug!(tick, "Refresh skipped, owner busy"),
            Err(TrySendError::Closed(_)) => {
                tracing::debug!("Refresh receiver dropped");
                break;
            }
        }
    }

    tracing::info!(ticks = counter.ticks(), "Countdown scheduler stopped");
}
