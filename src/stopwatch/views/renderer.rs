//! # Terminal Renderer
//!
//! Paints the four panels onto an injected [`RenderStream`]. Each panel can
//! repaint on its own so a tick only rewrites the two time values, and rows
//! are cleared to end-of-line after printing so shorter text never leaves
//! stale characters behind.

use anyhow::Result;
use crossterm::execute;
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{Clear, ClearType};

use crate::stopwatch::format::{format_lap_row, format_seconds};
use crate::stopwatch::io::RenderStream;
use crate::stopwatch::model::TimerPhase;
use crate::stopwatch::view_model::TimerViewModel;
use crate::stopwatch::views::layout;

macro_rules! execute_term {
    ($($arg:expr),* $(,)?) => {
        execute!($($arg),*).map_err(anyhow::Error::from)
    };
}

/// Rendering operations the controller drives.
pub trait ViewRenderer {
    /// Put the terminal into raw alternate-screen mode with mouse capture.
    fn initialize(&mut self) -> Result<()>;

    /// Repaint everything from a blank screen.
    fn render_full(&mut self, view_model: &TimerViewModel) -> Result<()>;

    fn render_time_panel(&mut self, view_model: &TimerViewModel) -> Result<()>;
    fn render_control_bar(&mut self, view_model: &TimerViewModel) -> Result<()>;
    fn render_lap_list(&mut self, view_model: &TimerViewModel) -> Result<()>;
    fn render_status_bar(&mut self, view_model: &TimerViewModel) -> Result<()>;

    /// Track a terminal resize; the caller follows with a full render.
    fn update_size(&mut self, width: u16, height: u16);

    /// Restore the terminal for the shell.
    fn cleanup(&mut self) -> Result<()>;
}

/// Renderer over an injected render stream.
pub struct TerminalRenderer<RS: RenderStream> {
    render_stream: RS,
    terminal_size: (u16, u16),
}

impl<RS: RenderStream> TerminalRenderer<RS> {
    pub fn with_render_stream(render_stream: RS) -> Result<Self> {
        let terminal_size = render_stream.get_size()?;
        Ok(Self {
            render_stream,
            terminal_size,
        })
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    fn print_at(&mut self, x: u16, y: u16, text: &str) -> Result<()> {
        self.render_stream.move_cursor(x, y)?;
        execute_term!(self.render_stream, Print(text))
    }

    fn print_dim_at(&mut self, x: u16, y: u16, text: &str) -> Result<()> {
        self.render_stream.move_cursor(x, y)?;
        execute_term!(
            self.render_stream,
            SetAttribute(Attribute::Dim),
            Print(text),
            SetAttribute(Attribute::Reset)
        )
    }

    fn print_line_at(&mut self, x: u16, y: u16, text: &str) -> Result<()> {
        self.render_stream.move_cursor(x, y)?;
        execute_term!(
            self.render_stream,
            Print(text),
            Clear(ClearType::UntilNewLine)
        )
    }

    fn print_dim_line_at(&mut self, x: u16, y: u16, text: &str) -> Result<()> {
        self.render_stream.move_cursor(x, y)?;
        execute_term!(
            self.render_stream,
            SetAttribute(Attribute::Dim),
            Print(text),
            SetAttribute(Attribute::Reset),
            Clear(ClearType::UntilNewLine)
        )
    }

    fn clear_row(&mut self, y: u16) -> Result<()> {
        self.render_stream.move_cursor(0, y)?;
        execute_term!(self.render_stream, Clear(ClearType::UntilNewLine))
    }
}

impl<RS: RenderStream> ViewRenderer for TerminalRenderer<RS> {
    fn initialize(&mut self) -> Result<()> {
        self.render_stream.enable_raw_mode()?;
        self.render_stream.enter_alternate_screen()?;
        self.render_stream.enable_mouse_capture()?;
        self.render_stream.hide_cursor()?;
        self.render_stream.clear_screen()
    }

    fn render_full(&mut self, view_model: &TimerViewModel) -> Result<()> {
        self.render_stream.clear_screen()?;
        let title = format!("lapline v{}", env!("CARGO_PKG_VERSION"));
        self.print_dim_at(layout::MARGIN, layout::TITLE_ROW, &title)?;
        self.render_time_panel(view_model)?;
        self.render_control_bar(view_model)?;
        self.render_lap_list(view_model)?;
        self.render_status_bar(view_model)
    }

    fn render_time_panel(&mut self, view_model: &TimerViewModel) -> Result<()> {
        let total = format!("{:>10}", format_seconds(view_model.total_elapsed()));
        let lap = format!("{:>10}", format_seconds(view_model.current_lap_elapsed()));

        self.render_stream.move_cursor(layout::MARGIN, layout::TOTAL_ROW)?;
        execute_term!(
            self.render_stream,
            SetAttribute(Attribute::Dim),
            Print("total  "),
            SetAttribute(Attribute::Reset),
            Print(total),
            Clear(ClearType::UntilNewLine)
        )?;

        self.render_stream.move_cursor(layout::MARGIN, layout::LAP_ROW)?;
        execute_term!(
            self.render_stream,
            SetAttribute(Attribute::Dim),
            Print("lap    "),
            SetAttribute(Attribute::Reset),
            Print(lap),
            Clear(ClearType::UntilNewLine)
        )
    }

    fn render_control_bar(&mut self, view_model: &TimerViewModel) -> Result<()> {
        let phase = view_model.phase();
        self.clear_row(layout::CONTROL_ROW)?;
        for span in layout::control_button_spans() {
            let text = span.button.text();
            if span.button.is_enabled(phase) {
                self.print_at(span.start_col, layout::CONTROL_ROW, &text)?;
            } else {
                self.print_dim_at(span.start_col, layout::CONTROL_ROW, &text)?;
            }
        }
        Ok(())
    }

    fn render_lap_list(&mut self, view_model: &TimerViewModel) -> Result<()> {
        let (_, height) = self.terminal_size;
        let status_row = height.saturating_sub(1);
        if layout::LAP_HEADER_ROW >= status_row {
            // Terminal too short for the list.
            return Ok(());
        }
        self.print_dim_line_at(layout::MARGIN, layout::LAP_HEADER_ROW, "laps")?;

        let available = status_row.saturating_sub(layout::LAP_LIST_START_ROW) as usize;
        let entries = view_model.lap_entries();

        // (text, dim) rows to paint, oldest hidden behind a summary row when
        // the list outgrows the space.
        let mut lines: Vec<(String, bool)> = Vec::new();
        if entries.is_empty() {
            lines.push(("no laps recorded".to_string(), true));
        } else if entries.len() <= available {
            for entry in &entries {
                lines.push((format_lap_row(entry.number, entry.duration), false));
            }
        } else {
            let visible = available.saturating_sub(1);
            for entry in entries.iter().take(visible) {
                lines.push((format_lap_row(entry.number, entry.duration), false));
            }
            let hidden = entries.len() - visible;
            lines.push((format!("+ {} earlier laps", hidden), true));
        }

        for offset in 0..available {
            let row = layout::LAP_LIST_START_ROW + offset as u16;
            match lines.get(offset) {
                Some((text, true)) => self.print_dim_line_at(layout::MARGIN, row, text)?,
                Some((text, false)) => self.print_line_at(layout::MARGIN, row, text)?,
                None => self.clear_row(row)?,
            }
        }
        Ok(())
    }

    fn render_status_bar(&mut self, view_model: &TimerViewModel) -> Result<()> {
        let (width, height) = self.terminal_size;
        let row = height.saturating_sub(1);
        let label = match view_model.phase() {
            TimerPhase::Idle => "idle",
            TimerPhase::Running => "running",
            TimerPhase::Paused => "paused",
        };
        let hints = "space start/pause/resume   l lap   r reset   q quit";
        let line: String = format!(" {:<8} {}", label, hints)
            .chars()
            .take(width as usize)
            .collect();
        let padded = format!("{:<width$}", line, width = width as usize);

        self.render_stream.move_cursor(0, row)?;
        execute_term!(
            self.render_stream,
            SetAttribute(Attribute::Reverse),
            Print(padded),
            SetAttribute(Attribute::Reset)
        )
    }

    fn update_size(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
    }

    fn cleanup(&mut self) -> Result<()> {
        self.render_stream.show_cursor()?;
        self.render_stream.disable_mouse_capture()?;
        self.render_stream.leave_alternate_screen()?;
        self.render_stream.disable_raw_mode()
    }
}
