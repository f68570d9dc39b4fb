//! # Timer ViewModel
//!
//! Owns the stopwatch model plus the display reading of the clock, and
//! queues [`ViewEvent`]s describing what changed. Views never touch the
//! model directly; they read the derived values exposed here.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::stopwatch::clock::Clock;
use crate::stopwatch::events::ViewEvent;
use crate::stopwatch::model::{Stopwatch, TimerPhase};

/// One row of the rendered lap list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LapEntry {
    /// Ordinal counting down from the most recent lap.
    pub number: usize,
    pub duration: Duration,
}

/// View model for the lap timer.
pub struct TimerViewModel {
    stopwatch: Stopwatch,
    clock: Arc<dyn Clock>,
    /// Reading all derived values are rendered against. Refreshed by every
    /// command and tick so a frame is internally consistent.
    now: Instant,
    pending_view_events: Vec<ViewEvent>,
}

impl TimerViewModel {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        let now = clock.now();
        Self {
            stopwatch: Stopwatch::new(),
            clock,
            now,
            pending_view_events: Vec::new(),
        }
    }

    /// Start a fresh session. No-op unless idle.
    pub fn start(&mut self) -> bool {
        let now = self.refresh_now();
        let changed = self.stopwatch.start(now);
        if changed {
            tracing::debug!("timer started");
            self.queue_phase_change_events();
        }
        changed
    }

    /// Pause the running session. No-op unless running.
    pub fn pause(&mut self) -> bool {
        let now = self.refresh_now();
        let changed = self.stopwatch.pause(now);
        if changed {
            tracing::debug!(total = ?self.stopwatch.total_elapsed(now), "timer paused");
            self.queue_phase_change_events();
        }
        changed
    }

    /// Resume the paused session. No-op unless paused.
    pub fn resume(&mut self) -> bool {
        let now = self.refresh_now();
        let changed = self.stopwatch.resume(now);
        if changed {
            tracing::debug!("timer resumed");
            self.queue_phase_change_events();
        }
        changed
    }

    /// Bank the in-progress lap. Returns the banked duration when running.
    pub fn lap(&mut self) -> Option<Duration> {
        let now = self.refresh_now();
        let banked = self.stopwatch.lap(now);
        if let Some(duration) = banked {
            tracing::debug!(?duration, lap = self.stopwatch.lap_count(), "lap banked");
            self.pending_view_events.push(ViewEvent::TimePanelUpdateRequired);
            self.pending_view_events.push(ViewEvent::LapListUpdateRequired);
        }
        banked
    }

    /// Clear the session. No-op unless paused with time on the clock.
    pub fn reset(&mut self) -> bool {
        let now = self.refresh_now();
        let changed = self.stopwatch.reset(now);
        if changed {
            tracing::debug!("timer reset");
            self.pending_view_events.push(ViewEvent::FullRedrawRequired);
        }
        changed
    }

    /// Advance the display reading. While running this queues a time-panel
    /// repaint; otherwise the displays are static and nothing is queued.
    pub fn on_tick(&mut self) {
        self.refresh_now();
        if self.stopwatch.is_running() {
            self.pending_view_events.push(ViewEvent::TimePanelUpdateRequired);
        }
    }

    pub fn phase(&self) -> TimerPhase {
        self.stopwatch.phase()
    }

    pub fn is_running(&self) -> bool {
        self.stopwatch.is_running()
    }

    pub fn total_elapsed(&self) -> Duration {
        self.stopwatch.total_elapsed(self.now)
    }

    pub fn current_lap_elapsed(&self) -> Duration {
        self.stopwatch.current_lap_elapsed(self.now)
    }

    pub fn lap_count(&self) -> usize {
        self.stopwatch.lap_count()
    }

    /// Rendered lap rows, newest first with countdown ordinals.
    pub fn lap_entries(&self) -> Vec<LapEntry> {
        let count = self.stopwatch.lap_count();
        self.stopwatch
            .laps()
            .iter()
            .enumerate()
            .map(|(index, &duration)| LapEntry {
                number: count - index,
                duration,
            })
            .collect()
    }

    /// Drain the queued render hints.
    pub fn collect_pending_view_events(&mut self) -> Vec<ViewEvent> {
        std::mem::take(&mut self.pending_view_events)
    }

    fn refresh_now(&mut self) -> Instant {
        let now = self.clock.now();
        self.now = now;
        now
    }

    fn queue_phase_change_events(&mut self) {
        self.pending_view_events.push(ViewEvent::TimePanelUpdateRequired);
        self.pending_view_events.push(ViewEvent::ControlBarUpdateRequired);
        self.pending_view_events.push(ViewEvent::StatusBarUpdateRequired);
    }
}
