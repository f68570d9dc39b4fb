//! # Lapline - Terminal Lap Timer
//!
//! A single-screen stopwatch with lap banking, driven from the keyboard or
//! the mouse. Built with clean MVVM architecture for maintainability and
//! testability.
//!
//! ## Architecture
//!
//! This application follows the Model-View-ViewModel (MVVM) pattern:
//!
//! ```text
//! ┌─────────────┐    Events    ┌──────────────┐    Updates   ┌─────────┐
//! │    View     │◄─────────────│  ViewModel   │◄─────────────│  Model  │
//! │             │              │              │              │         │
//! │ - Terminal  │              │ - Derived    │              │ - Time  │
//! │ - Rendering │              │   Readings   │              │   Math  │
//! │ - Input     │              │ - Render     │              │ - Laps  │
//! └─────────────┘              │   Hints      │              └─────────┘
//!                              └──────────────┘
//!                                      ▲
//!                                      │ Commands
//!                                      ▼
//!                               ┌──────────────┐
//!                               │  Controller  │
//!                               │              │
//!                               │ - Input      │
//!                               │   Mapping    │
//!                               │ - Event Loop │
//!                               └──────────────┘
//! ```

pub mod cmd_args;
pub mod config;
pub mod stopwatch;

// Re-export main types for easy access
pub use stopwatch::*;
