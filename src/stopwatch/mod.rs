//! # MVVM Architecture Implementation
//!
//! The lap timer as Model-View-ViewModel:
//!
//! - [`model`] owns elapsed-time accounting and knows nothing about screens
//!   or clocks
//! - [`view_model`] binds the model to a [`clock::Clock`] and queues
//!   [`events::ViewEvent`]s describing what changed
//! - [`views`] paint panels from view-model readings
//! - [`commands`] translate key presses into requests
//! - [`controller`] runs the event loop over the [`io`] trait seams
//!
//! Everything above the model is replaceable in tests through the traits in
//! [`io`] and [`clock`].

pub mod clock;
pub mod commands;
pub mod controller;
pub mod events;
pub mod format;
pub mod io;
pub mod model;
pub mod view_model;
pub mod views;

pub use clock::{Clock, ManualClock, SystemClock};
pub use commands::{Command, CommandEvent, CommandRegistry, TimerSnapshot};
pub use controller::AppController;
pub use events::ViewEvent;
pub use model::{Stopwatch, TimerPhase};
pub use view_model::{LapEntry, TimerViewModel};
