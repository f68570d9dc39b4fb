//! # Screen Layout
//!
//! Fixed row positions and control-button geometry. Pointer hit-testing and
//! the renderer both read the button spans from here, so a click can never
//! land on anything other than what was painted.

use crate::stopwatch::model::TimerPhase;

/// Left margin shared by every panel.
pub const MARGIN: u16 = 2;

pub const TITLE_ROW: u16 = 0;
pub const TOTAL_ROW: u16 = 2;
pub const LAP_ROW: u16 = 3;
pub const CONTROL_ROW: u16 = 5;
pub const LAP_HEADER_ROW: u16 = 7;
pub const LAP_LIST_START_ROW: u16 = 8;

/// Columns between rendered buttons.
const BUTTON_GAP: u16 = 2;

/// The five timer controls, in rendered order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlButton {
    Start,
    Pause,
    Resume,
    Lap,
    Reset,
}

impl ControlButton {
    pub const ALL: [ControlButton; 5] = [
        ControlButton::Start,
        ControlButton::Pause,
        ControlButton::Resume,
        ControlButton::Lap,
        ControlButton::Reset,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ControlButton::Start => "Start",
            ControlButton::Pause => "Pause",
            ControlButton::Resume => "Resume",
            ControlButton::Lap => "Lap",
            ControlButton::Reset => "Reset",
        }
    }

    /// Whether the control is live in the given phase. Matches the command
    /// preconditions, so a disabled button's click is always a no-op anyway.
    pub fn is_enabled(self, phase: TimerPhase) -> bool {
        match self {
            ControlButton::Start => phase == TimerPhase::Idle,
            ControlButton::Pause | ControlButton::Lap => phase == TimerPhase::Running,
            ControlButton::Resume | ControlButton::Reset => phase == TimerPhase::Paused,
        }
    }

    /// Rendered text, e.g. `"[ Start ]"`.
    pub fn text(self) -> String {
        format!("[ {} ]", self.label())
    }
}

/// Column span of one rendered button on the control row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonSpan {
    pub button: ControlButton,
    pub start_col: u16,
    /// First column past the button.
    pub end_col: u16,
}

/// Spans for all five buttons, left to right.
pub fn control_button_spans() -> Vec<ButtonSpan> {
    let mut spans = Vec::with_capacity(ControlButton::ALL.len());
    let mut col = MARGIN;
    for button in ControlButton::ALL {
        let width = button.text().chars().count() as u16;
        spans.push(ButtonSpan {
            button,
            start_col: col,
            end_col: col + width,
        });
        col += width + BUTTON_GAP;
    }
    spans
}

/// Map a pointer position to the control button under it.
pub fn hit_test(column: u16, row: u16) -> Option<ControlButton> {
    if row != CONTROL_ROW {
        return None;
    }
    control_button_spans()
        .iter()
        .find(|span| span.start_col <= column && column < span.end_col)
        .map(|span| span.button)
}
