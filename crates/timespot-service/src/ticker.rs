//! Drives the one-second clock tick and the slower data refresh.

use std::future::Future;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

/// What the ticker fired for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// Re-derive every displayed clock.
    Tick,
    /// Refetch time data from the source.
    Refresh,
}

/// Two fixed-period timers sharing one shutdown signal.
#[derive(Debug, Clone, Copy)]
pub struct ClockTicker {
    tick: Duration,
    refresh: Duration,
}

/// Timer periods are never shorter than this; tokio rejects a zero period.
const MIN_PERIOD: Duration = Duration::from_millis(1);

impl ClockTicker {
    #[must_use]
    pub fn new(tick: Duration, refresh: Duration) -> Self {
        Self {
            tick: tick.max(MIN_PERIOD),
            refresh: refresh.max(MIN_PERIOD),
        }
    }

    /// ## Summary
    /// Calls `on_event` for every tick and refresh until `shutdown` turns
    /// `true` or its sender is dropped.
    ///
    /// Neither timer fires immediately. Missed ticks are skipped rather than
    /// replayed so a slow handler never causes a burst.
    pub async fn run<F, Fut>(self, mut shutdown: watch::Receiver<bool>, mut on_event: F)
    where
        F: FnMut(TickEvent) -> Fut,
        Fut: Future<Output = ()>,
    {
        let start = Instant::now();
        let mut tick = interval_at(start + self.tick, self.tick);
        tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut refresh = interval_at(start + self.refresh, self.refresh);
        refresh.set_missed_tick_behavior(MissedTickBehavior::Skip);

        tracing::debug!(tick = ?self.tick, refresh = ?self.refresh, "Clock ticker started");
        loop {
            tokio::select! {
                _ = tick.tick() => on_event(TickEvent::Tick).await,
                _ = refresh.tick() => on_event(TickEvent::Refresh).await,
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }
        tracing::debug!("Clock ticker stopped");
    }
}
