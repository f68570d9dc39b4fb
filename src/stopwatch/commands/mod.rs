//! # Command Dispatch
//!
//! Translates key events into timer requests. Commands are stateless: each
//! one inspects the key and a snapshot of the timer phase, and the registry
//! gives the event to the first command that declares itself relevant. The
//! controller applies the resulting [`CommandEvent`]s to the view model.

mod app;
mod registry;
mod timer;

pub use app::QuitCommand;
pub use registry::CommandRegistry;
pub use timer::{LapCommand, ResetCommand, ToggleCommand, LAP_KEY, RESET_KEY, TOGGLE_KEY};

use anyhow::Result;
use crossterm::event::KeyEvent;

use crate::stopwatch::model::TimerPhase;
use crate::stopwatch::view_model::TimerViewModel;

/// Immutable view of the state commands may consult.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerSnapshot {
    pub phase: TimerPhase,
}

impl TimerSnapshot {
    pub fn from_view_model(view_model: &TimerViewModel) -> Self {
        Self {
            phase: view_model.phase(),
        }
    }
}

/// Requests produced by commands for the controller to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandEvent {
    StartRequested,
    PauseRequested,
    ResumeRequested,
    LapRequested,
    ResetRequested,
    QuitRequested,
}

/// A keyboard-dispatchable command.
pub trait Command: Send + Sync {
    /// Whether this command wants the event in the current state.
    fn is_relevant(&self, snapshot: &TimerSnapshot, event: &KeyEvent) -> bool;

    /// Translate the event into requests for the controller.
    fn process(&self, event: &KeyEvent, snapshot: &TimerSnapshot) -> Result<Vec<CommandEvent>>;

    /// Name used in dispatch logging.
    fn name(&self) -> &'static str;
}
