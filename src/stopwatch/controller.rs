//! # Application Controller
//!
//! Wires the MVVM pieces together and runs the event loop. The poll timeout
//! doubles as the clock tick: a short interval keeps the displays live while
//! the timer runs, and a long one parks the loop while it does not, so an
//! idle or paused timer schedules no work beyond waiting for input.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use crate::cmd_args::CommandLineArgs;
use crate::config;
use crate::stopwatch::clock::Clock;
use crate::stopwatch::commands::{CommandEvent, CommandRegistry, TimerSnapshot};
use crate::stopwatch::events::ViewEvent;
use crate::stopwatch::io::{EventStream, RenderStream};
use crate::stopwatch::view_model::TimerViewModel;
use crate::stopwatch::views::{layout, ControlButton, TerminalRenderer, ViewRenderer};

/// Orchestrates input, commands, the view model and rendering.
pub struct AppController<ES: EventStream, RS: RenderStream> {
    view_model: TimerViewModel,
    view_renderer: TerminalRenderer<RS>,
    command_registry: CommandRegistry,
    event_stream: ES,
    tick_interval: Duration,
    should_quit: bool,
}

impl<ES: EventStream, RS: RenderStream> AppController<ES, RS> {
    /// Create a controller with injected I/O streams and clock.
    pub fn with_io_streams(
        cmd_args: CommandLineArgs,
        event_stream: ES,
        render_stream: RS,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        let view_model = TimerViewModel::new(clock);
        let view_renderer = TerminalRenderer::with_render_stream(render_stream)?;
        let command_registry = CommandRegistry::new();
        let tick_ms = cmd_args
            .tick_rate_ms()
            .map(config::clamp_tick_interval_ms)
            .unwrap_or_else(config::tick_interval_ms);
        let tick_interval = Duration::from_millis(tick_ms);
        tracing::debug!(?tick_interval, "controller ready");

        Ok(Self {
            view_model,
            view_renderer,
            command_registry,
            event_stream,
            tick_interval,
            should_quit: false,
        })
    }

    /// Run the main application loop until a quit command.
    pub async fn run(&mut self) -> Result<()> {
        self.view_renderer.initialize()?;
        self.view_renderer.render_full(&self.view_model)?;
        tracing::info!("event loop started");

        while !self.should_quit {
            let timeout = if self.view_model.is_running() {
                self.tick_interval
            } else {
                config::idle_poll_interval()
            };

            if self.event_stream.poll(timeout)? {
                match self.event_stream.read()? {
                    Event::Key(key_event) => self.process_key_event(key_event)?,
                    Event::Mouse(mouse_event) => self.process_mouse_event(mouse_event)?,
                    Event::Resize(width, height) => self.process_resize(width, height)?,
                    _ => {}
                }
            } else {
                self.handle_tick()?;
            }
        }

        tracing::info!("event loop finished");
        self.view_renderer.cleanup()
    }

    /// Feed one key event through the command registry.
    pub fn process_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        let snapshot = TimerSnapshot::from_view_model(&self.view_model);
        let command_events = self.command_registry.process_event(key_event, &snapshot)?;
        for command_event in command_events {
            self.apply_command_event(command_event);
        }
        self.render_pending()
    }

    /// Feed one mouse event. A left press on a control button dispatches the
    /// same request as its key; everything else is ignored.
    pub fn process_mouse_event(&mut self, mouse_event: MouseEvent) -> Result<()> {
        if mouse_event.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(());
        }
        let Some(button) = layout::hit_test(mouse_event.column, mouse_event.row) else {
            return Ok(());
        };
        tracing::debug!(?button, "control button clicked");

        let command_event = match button {
            ControlButton::Start => CommandEvent::StartRequested,
            ControlButton::Pause => CommandEvent::PauseRequested,
            ControlButton::Resume => CommandEvent::ResumeRequested,
            ControlButton::Lap => CommandEvent::LapRequested,
            ControlButton::Reset => CommandEvent::ResetRequested,
        };
        self.apply_command_event(command_event);
        self.render_pending()
    }

    /// Track a resize and repaint everything against the new geometry.
    pub fn process_resize(&mut self, width: u16, height: u16) -> Result<()> {
        tracing::debug!(width, height, "terminal resized");
        self.view_renderer.update_size(width, height);
        self.view_renderer.render_full(&self.view_model)
    }

    /// Advance the display clock. Repaints the time panel while running.
    pub fn handle_tick(&mut self) -> Result<()> {
        self.view_model.on_tick();
        self.render_pending()
    }

    fn apply_command_event(&mut self, command_event: CommandEvent) {
        match command_event {
            CommandEvent::StartRequested => {
                self.view_model.start();
            }
            CommandEvent::PauseRequested => {
                self.view_model.pause();
            }
            CommandEvent::ResumeRequested => {
                self.view_model.resume();
            }
            CommandEvent::LapRequested => {
                self.view_model.lap();
            }
            CommandEvent::ResetRequested => {
                self.view_model.reset();
            }
            CommandEvent::QuitRequested => {
                tracing::info!("quit requested");
                self.should_quit = true;
            }
        }
    }

    /// Drain queued view events and repaint each affected panel once.
    fn render_pending(&mut self) -> Result<()> {
        let view_events = self.view_model.collect_pending_view_events();
        if view_events.is_empty() {
            return Ok(());
        }

        let mut time_panel = false;
        let mut control_bar = false;
        let mut lap_list = false;
        let mut status_bar = false;
        for view_event in view_events {
            match view_event {
                ViewEvent::FullRedrawRequired => {
                    return self.view_renderer.render_full(&self.view_model);
                }
                ViewEvent::TimePanelUpdateRequired => time_panel = true,
                ViewEvent::ControlBarUpdateRequired => control_bar = true,
                ViewEvent::LapListUpdateRequired => lap_list = true,
                ViewEvent::StatusBarUpdateRequired => status_bar = true,
            }
        }

        if time_panel {
            self.view_renderer.render_time_panel(&self.view_model)?;
        }
        if control_bar {
            self.view_renderer.render_control_bar(&self.view_model)?;
        }
        if lap_list {
            self.view_renderer.render_lap_list(&self.view_model)?;
        }
        if status_bar {
            self.view_renderer.render_status_bar(&self.view_model)?;
        }
        Ok(())
    }

    pub fn view_model(&self) -> &TimerViewModel {
        &self.view_model
    }

    pub fn view_model_mut(&mut self) -> &mut TimerViewModel {
        &mut self.view_model
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stopwatch::clock::ManualClock;
    use crate::stopwatch::io::{MockEventStream, MockRenderRecorder, MockRenderStream};
    use crate::stopwatch::model::TimerPhase;
    use crossterm::event::{KeyCode, KeyModifiers};

    type TestController = AppController<MockEventStream, MockRenderStream>;

    fn controller() -> (TestController, Arc<ManualClock>, MockRenderRecorder) {
        let clock = Arc::new(ManualClock::new());
        let render_stream = MockRenderStream::new();
        let recorder = render_stream.recorder();
        let cmd_args = CommandLineArgs::parse_from(["lapline"]);
        let controller = AppController::with_io_streams(
            cmd_args,
            MockEventStream::empty(),
            render_stream,
            clock.clone() as Arc<dyn Clock>,
        )
        .unwrap();
        (controller, clock, recorder)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn toggle_key_should_walk_start_pause_resume() {
        let (mut controller, clock, _recorder) = controller();

        controller.process_key_event(press(KeyCode::Char(' '))).unwrap();
        assert_eq!(controller.view_model().phase(), TimerPhase::Running);

        clock.advance_ms(1000);
        controller.process_key_event(press(KeyCode::Char(' '))).unwrap();
        assert_eq!(controller.view_model().phase(), TimerPhase::Paused);
        assert_eq!(
            controller.view_model().total_elapsed(),
            Duration::from_millis(1000)
        );

        clock.advance_ms(1000);
        controller.process_key_event(press(KeyCode::Char(' '))).unwrap();
        assert_eq!(controller.view_model().phase(), TimerPhase::Running);
    }

    #[test]
    fn tick_should_repaint_the_time_panel_while_running() {
        let (mut controller, clock, recorder) = controller();

        controller.process_key_event(press(KeyCode::Char(' '))).unwrap();
        clock.advance_ms(120);

        recorder.clear();
        controller.handle_tick().unwrap();
        assert!(recorder.buffer_string().contains("0.12"));
    }

    #[test]
    fn tick_should_paint_nothing_while_idle() {
        let (mut controller, clock, recorder) = controller();

        clock.advance_ms(500);
        recorder.clear();
        controller.handle_tick().unwrap();
        assert!(recorder.buffer_string().is_empty());
        assert!(recorder.commands().is_empty());
    }

    #[test]
    fn quit_key_should_flag_the_loop_to_stop() {
        let (mut controller, _clock, _recorder) = controller();

        assert!(!controller.should_quit());
        controller.process_key_event(press(KeyCode::Char('q'))).unwrap();
        assert!(controller.should_quit());
    }

    #[test]
    fn resize_should_trigger_a_full_repaint() {
        let (mut controller, _clock, recorder) = controller();

        recorder.clear();
        controller.process_resize(100, 30).unwrap();
        assert!(recorder.buffer_string().contains("lapline v"));
        assert_eq!(controller.view_renderer.terminal_size(), (100, 30));
    }
}
