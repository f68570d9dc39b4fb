//! # View Events
//!
//! Render-granularity hints emitted by the view model. The controller drains
//! the queue after every command and tick, deduplicates it, and repaints only
//! the panels that changed.

/// Events indicating which parts of the screen need repainting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    /// Everything repaints, e.g. after a resize or a reset.
    FullRedrawRequired,
    /// The total and current-lap displays changed.
    TimePanelUpdateRequired,
    /// Button enablement changed with the timer phase.
    ControlBarUpdateRequired,
    /// A lap was banked or the list was cleared.
    LapListUpdateRequired,
    /// The phase badge or key hints changed.
    StatusBarUpdateRequired,
}
