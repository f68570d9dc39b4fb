//! # Mock I/O for Tests
//!
//! Pre-programmed input streams and a render stream that records everything
//! the renderer asked for, so controller behavior is assertable without a
//! real terminal.

use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::Event;

use super::{EventStream, RenderStream, TerminalSize};

/// Event stream replaying a fixed queue.
///
/// `poll` reports ready while events remain and a timeout afterwards, so a
/// drained queue turns every loop iteration into a tick. Scripts that drive
/// the full event loop must therefore end with a quit key.
pub struct MockEventStream {
    events: VecDeque<Event>,
}

impl MockEventStream {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn push_event(&mut self, event: Event) {
        self.events.push_back(event);
    }
}

impl EventStream for MockEventStream {
    fn poll(&mut self, _timeout: Duration) -> Result<bool> {
        Ok(!self.events.is_empty())
    }

    fn read(&mut self) -> Result<Event> {
        self.events
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("mock event stream has no events queued"))
    }
}

/// Terminal-state call recorded by [`MockRenderStream`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderCommand {
    ClearScreen,
    MoveCursor(u16, u16),
    HideCursor,
    ShowCursor,
    EnterAlternateScreen,
    LeaveAlternateScreen,
    EnableRawMode,
    DisableRawMode,
    EnableMouseCapture,
    DisableMouseCapture,
}

type Shared<T> = Arc<Mutex<T>>;

/// Render stream that records commands and buffers written text.
///
/// State is behind shared handles so a [`recorder`](MockRenderStream::recorder)
/// taken before the stream moves into the controller can still inspect it.
pub struct MockRenderStream {
    commands: Shared<Vec<RenderCommand>>,
    buffer: Shared<Vec<u8>>,
    size: TerminalSize,
}

impl MockRenderStream {
    pub fn new() -> Self {
        Self::with_size((80, 24))
    }

    pub fn with_size(size: TerminalSize) -> Self {
        Self {
            commands: Arc::new(Mutex::new(Vec::new())),
            buffer: Arc::new(Mutex::new(Vec::new())),
            size,
        }
    }

    /// Inspection handle that outlives the stream.
    pub fn recorder(&self) -> MockRenderRecorder {
        MockRenderRecorder {
            commands: Arc::clone(&self.commands),
            buffer: Arc::clone(&self.buffer),
        }
    }

    fn record(&self, command: RenderCommand) {
        self.commands.lock().unwrap().push(command);
    }
}

impl Default for MockRenderStream {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for MockRenderStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl RenderStream for MockRenderStream {
    fn clear_screen(&mut self) -> Result<()> {
        self.record(RenderCommand::ClearScreen);
        Ok(())
    }

    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        self.record(RenderCommand::MoveCursor(x, y));
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<()> {
        self.record(RenderCommand::HideCursor);
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<()> {
        self.record(RenderCommand::ShowCursor);
        Ok(())
    }

    fn get_size(&self) -> Result<TerminalSize> {
        Ok(self.size)
    }

    fn enter_alternate_screen(&mut self) -> Result<()> {
        self.record(RenderCommand::EnterAlternateScreen);
        Ok(())
    }

    fn leave_alternate_screen(&mut self) -> Result<()> {
        self.record(RenderCommand::LeaveAlternateScreen);
        Ok(())
    }

    fn enable_raw_mode(&mut self) -> Result<()> {
        self.record(RenderCommand::EnableRawMode);
        Ok(())
    }

    fn disable_raw_mode(&mut self) -> Result<()> {
        self.record(RenderCommand::DisableRawMode);
        Ok(())
    }

    fn enable_mouse_capture(&mut self) -> Result<()> {
        self.record(RenderCommand::EnableMouseCapture);
        Ok(())
    }

    fn disable_mouse_capture(&mut self) -> Result<()> {
        self.record(RenderCommand::DisableMouseCapture);
        Ok(())
    }
}

/// Handle for asserting on what a [`MockRenderStream`] saw.
#[derive(Clone)]
pub struct MockRenderRecorder {
    commands: Shared<Vec<RenderCommand>>,
    buffer: Shared<Vec<u8>>,
}

impl MockRenderRecorder {
    pub fn commands(&self) -> Vec<RenderCommand> {
        self.commands.lock().unwrap().clone()
    }

    pub fn has_command(&self, command: &RenderCommand) -> bool {
        self.commands.lock().unwrap().contains(command)
    }

    /// Everything written through the stream, lossily decoded. Styled output
    /// keeps its escape sequences; substring assertions still work.
    pub fn buffer_string(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock().unwrap()).to_string()
    }

    /// Forget recorded history, usually right before the render under test.
    pub fn clear(&self) {
        self.commands.lock().unwrap().clear();
        self.buffer.lock().unwrap().clear();
    }
}
