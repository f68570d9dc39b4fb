//! # Command Registry
//!
//! Routes key events to the first relevant command. Only initial key presses
//! dispatch; repeat and release events from the terminal are dropped here so
//! a held key fires its command exactly once.

use std::sync::Arc;

use anyhow::Result;
use crossterm::event::{KeyEvent, KeyEventKind};

use crate::stopwatch::commands::{
    Command, CommandEvent, LapCommand, QuitCommand, ResetCommand, TimerSnapshot, ToggleCommand,
};

type CommandArc = Arc<dyn Command>;

/// Registry of the commands available to the event loop.
pub struct CommandRegistry {
    commands: Vec<CommandArc>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            commands: Vec::new(),
        };
        registry.register_default_commands();
        registry
    }

    fn register_default_commands(&mut self) {
        self.add_command(Arc::new(ToggleCommand));
        self.add_command(Arc::new(LapCommand));
        self.add_command(Arc::new(ResetCommand));
        self.add_command(Arc::new(QuitCommand));
    }

    pub fn add_command(&mut self, command: CommandArc) {
        self.commands.push(command);
    }

    /// Process one key event into command events.
    pub fn process_event(&self, event: KeyEvent, snapshot: &TimerSnapshot) -> Result<Vec<CommandEvent>> {
        if event.kind != KeyEventKind::Press {
            tracing::trace!(?event, "ignoring non-press key event");
            return Ok(Vec::new());
        }

        for command in &self.commands {
            if command.is_relevant(snapshot, &event) {
                tracing::debug!(
                    command = command.name(),
                    phase = ?snapshot.phase,
                    key = ?event.code,
                    "dispatching key event"
                );
                return command.process(&event, snapshot);
            }
        }

        tracing::trace!(key = ?event.code, "no relevant command");
        Ok(Vec::new())
    }

    pub fn command_count(&self) -> usize {
        self.commands.len()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
