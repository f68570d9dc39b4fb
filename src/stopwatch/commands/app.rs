//! # Application Commands
//!
//! Commands that manage the application itself rather than the timer.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::stopwatch::commands::{Command, CommandEvent, TimerSnapshot};

/// `q` or Ctrl+C: leave the application in any phase.
pub struct QuitCommand;

impl Command for QuitCommand {
    fn is_relevant(&self, _snapshot: &TimerSnapshot, event: &KeyEvent) -> bool {
        let quit_key = event.code == KeyCode::Char('q') && event.modifiers == KeyModifiers::NONE;
        let interrupt = event.code == KeyCode::Char('c')
            && event.modifiers.contains(KeyModifiers::CONTROL);
        quit_key || interrupt
    }

    fn process(&self, _event: &KeyEvent, _snapshot: &TimerSnapshot) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::QuitRequested])
    }

    fn name(&self) -> &'static str {
        "Quit"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stopwatch::model::TimerPhase;

    fn snapshot() -> TimerSnapshot {
        TimerSnapshot {
            phase: TimerPhase::Running,
        }
    }

    #[test]
    fn quit_should_claim_q_and_ctrl_c() {
        let command = QuitCommand;

        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(command.is_relevant(&snapshot(), &q));
        assert!(command.is_relevant(&snapshot(), &ctrl_c));
        assert_eq!(
            command.process(&q, &snapshot()).unwrap(),
            vec![CommandEvent::QuitRequested]
        );
    }

    #[test]
    fn quit_should_ignore_plain_c() {
        let command = QuitCommand;
        let plain_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        assert!(!command.is_relevant(&snapshot(), &plain_c));
    }
}
