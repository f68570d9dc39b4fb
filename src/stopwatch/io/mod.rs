//! # I/O Abstraction Layer
//!
//! Trait seams between the controller and the terminal. Production code runs
//! on crossterm through [`terminal`]; tests inject the pre-programmed streams
//! in [`mock`] and assert on what was rendered.

pub mod mock;
pub mod terminal;

pub use mock::{MockEventStream, MockRenderRecorder, MockRenderStream, RenderCommand};
pub use terminal::{TerminalEventStream, TerminalRenderStream};

use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::Event;

/// Terminal size as (width, height).
pub type TerminalSize = (u16, u16);

/// Source of input events.
pub trait EventStream: Send {
    /// True when an event is ready within the timeout. A `false` return is
    /// the event loop's clock tick.
    fn poll(&mut self, timeout: Duration) -> Result<bool>;

    /// Read the next event. Call only after `poll` returned true.
    fn read(&mut self) -> Result<Event>;
}

/// Terminal output surface.
///
/// Styled text goes through the [`Write`] impl, which crossterm commands
/// queue into; the explicit methods cover the terminal state the renderer
/// manages around that text.
pub trait RenderStream: Write + Send {
    fn clear_screen(&mut self) -> Result<()>;
    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()>;
    fn hide_cursor(&mut self) -> Result<()>;
    fn show_cursor(&mut self) -> Result<()>;
    fn get_size(&self) -> Result<TerminalSize>;
    fn enter_alternate_screen(&mut self) -> Result<()>;
    fn leave_alternate_screen(&mut self) -> Result<()>;
    fn enable_raw_mode(&mut self) -> Result<()>;
    fn disable_raw_mode(&mut self) -> Result<()>;
    fn enable_mouse_capture(&mut self) -> Result<()>;
    fn disable_mouse_capture(&mut self) -> Result<()>;
}
