//! # Timer Commands
//!
//! The three timer shortcuts. The toggle command folds Start, Pause and
//! Resume onto a single key by reading the current phase; lap and reset only
//! claim their key in the phase where the operation is permitted, so an
//! out-of-phase press falls through the registry untouched.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::stopwatch::commands::{Command, CommandEvent, TimerSnapshot};
use crate::stopwatch::model::TimerPhase;

/// Space: Start when idle, Pause when running, Resume when paused.
pub const TOGGLE_KEY: KeyCode = KeyCode::Char(' ');
/// `l`: bank the in-progress lap.
pub const LAP_KEY: KeyCode = KeyCode::Char('l');
/// `r`: clear the paused session.
pub const RESET_KEY: KeyCode = KeyCode::Char('r');

/// Phase-dependent Start/Pause/Resume on the toggle key.
pub struct ToggleCommand;

impl Command for ToggleCommand {
    fn is_relevant(&self, _snapshot: &TimerSnapshot, event: &KeyEvent) -> bool {
        event.code == TOGGLE_KEY && event.modifiers == KeyModifiers::NONE
    }

    fn process(&self, _event: &KeyEvent, snapshot: &TimerSnapshot) -> Result<Vec<CommandEvent>> {
        let requested = match snapshot.phase {
            TimerPhase::Idle => CommandEvent::StartRequested,
            TimerPhase::Running => CommandEvent::PauseRequested,
            TimerPhase::Paused => CommandEvent::ResumeRequested,
        };
        Ok(vec![requested])
    }

    fn name(&self) -> &'static str {
        "Toggle"
    }
}

/// Bank a lap while the timer runs.
pub struct LapCommand;

impl Command for LapCommand {
    fn is_relevant(&self, snapshot: &TimerSnapshot, event: &KeyEvent) -> bool {
        snapshot.phase == TimerPhase::Running
            && event.code == LAP_KEY
            && event.modifiers == KeyModifiers::NONE
    }

    fn process(&self, _event: &KeyEvent, _snapshot: &TimerSnapshot) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::LapRequested])
    }

    fn name(&self) -> &'static str {
        "Lap"
    }
}

/// Clear the session while paused.
pub struct ResetCommand;

impl Command for ResetCommand {
    fn is_relevant(&self, snapshot: &TimerSnapshot, event: &KeyEvent) -> bool {
        snapshot.phase == TimerPhase::Paused
            && event.code == RESET_KEY
            && event.modifiers == KeyModifiers::NONE
    }

    fn process(&self, _event: &KeyEvent, _snapshot: &TimerSnapshot) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::ResetRequested])
    }

    fn name(&self) -> &'static str {
        "Reset"
    }
}
