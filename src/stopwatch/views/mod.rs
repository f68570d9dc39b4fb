//! # Views Module
//!
//! Presentation layer: panel layout, button geometry and the terminal
//! renderer. Views read the view model and never mutate it.

pub mod layout;
pub mod renderer;

pub use layout::{ButtonSpan, ControlButton};
pub use renderer::{TerminalRenderer, ViewRenderer};
