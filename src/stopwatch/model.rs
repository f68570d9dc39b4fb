//! # Stopwatch Model
//!
//! The elapsed-time accounting state machine. Running time accumulates in
//! closed segments plus one open segment, so the clock is only ever read at
//! command boundaries and ticks, never stored as wall-clock totals.
//!
//! Every operation takes the caller's monotonic reading instead of reading a
//! clock itself, which keeps the whole machine deterministic under test. An
//! operation whose precondition does not hold leaves the state untouched,
//! mirroring controls that render disabled in the view.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Lifecycle phase derived from the stored state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    /// Nothing on the clock; only Start is meaningful.
    Idle,
    /// Time is accumulating.
    Running,
    /// Time on the clock but not accumulating.
    Paused,
}

/// Lap-timer state.
///
/// `segment_start` does double duty: while running it is the reading when
/// the open segment began, and while paused it holds the reading taken at
/// the most recent pause. Keeping the pause reading lets the in-progress lap
/// display freeze at `segment_start - lap_segment_start` and lets resume
/// rebuild the lap clock without a dedicated field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stopwatch {
    running: bool,
    segment_start: Option<Instant>,
    accumulated: Duration,
    lap_segment_start: Option<Instant>,
    laps: VecDeque<Duration>,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self {
            running: false,
            segment_start: None,
            accumulated: Duration::ZERO,
            lap_segment_start: None,
            laps: VecDeque::new(),
        }
    }

    /// Begin a fresh session. No-op unless idle.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.running || !self.total_elapsed(now).is_zero() {
            return false;
        }
        self.segment_start = Some(now);
        self.lap_segment_start = Some(now);
        self.running = true;
        true
    }

    /// Stop accumulating. Banks the open segment and keeps the pause reading
    /// in `segment_start` so lap display stays frozen. No-op unless running.
    pub fn pause(&mut self, now: Instant) -> bool {
        if !self.running {
            return false;
        }
        let Some(segment_start) = self.segment_start else {
            return false;
        };
        self.accumulated += now.saturating_duration_since(segment_start);
        self.segment_start = Some(now);
        self.running = false;
        true
    }

    /// Continue a paused session. Rolls `lap_segment_start` forward so the
    /// in-progress lap resumes with exactly the time it showed at pause.
    /// No-op unless paused with time on the clock.
    pub fn resume(&mut self, now: Instant) -> bool {
        if self.running || self.total_elapsed(now).is_zero() {
            return false;
        }
        let (Some(paused_at), Some(lap_start)) = (self.segment_start, self.lap_segment_start) else {
            return false;
        };
        let frozen_lap = paused_at.saturating_duration_since(lap_start);
        self.lap_segment_start = Some(now.checked_sub(frozen_lap).unwrap_or(now));
        self.segment_start = Some(now);
        self.running = true;
        true
    }

    /// Bank the in-progress lap and open the next one at the same reading.
    /// Returns the banked duration, or `None` when not running.
    pub fn lap(&mut self, now: Instant) -> Option<Duration> {
        if !self.running {
            return None;
        }
        let lap_start = self.lap_segment_start?;
        let banked = now.saturating_duration_since(lap_start);
        self.laps.push_front(banked);
        self.lap_segment_start = Some(now);
        Some(banked)
    }

    /// Restore the initial state. Permitted only while paused with time on
    /// the clock; a running session must pause first.
    pub fn reset(&mut self, now: Instant) -> bool {
        if self.running || self.total_elapsed(now).is_zero() {
            return false;
        }
        *self = Self::new();
        true
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn phase(&self) -> TimerPhase {
        if self.running {
            TimerPhase::Running
        } else if self.accumulated.is_zero() {
            TimerPhase::Idle
        } else {
            TimerPhase::Paused
        }
    }

    /// Accumulated time across all segments, including the open one.
    pub fn total_elapsed(&self, now: Instant) -> Duration {
        match (self.running, self.segment_start) {
            (true, Some(segment_start)) => {
                self.accumulated + now.saturating_duration_since(segment_start)
            }
            _ => self.accumulated,
        }
    }

    /// Time on the in-progress lap: live while running, frozen at the pause
    /// reading while paused, zero before the first start.
    pub fn current_lap_elapsed(&self, now: Instant) -> Duration {
        let Some(lap_start) = self.lap_segment_start else {
            return Duration::ZERO;
        };
        if self.running {
            now.saturating_duration_since(lap_start)
        } else {
            self.segment_start
                .map(|paused_at| paused_at.saturating_duration_since(lap_start))
                .unwrap_or(Duration::ZERO)
        }
    }

    /// Completed laps, newest first.
    pub fn laps(&self) -> &VecDeque<Duration> {
        &self.laps
    }

    pub fn lap_count(&self) -> usize {
        self.laps.len()
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}
