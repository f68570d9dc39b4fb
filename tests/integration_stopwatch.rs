//! End-to-end controller scenarios driven through the mock I/O streams and
//! the hand-advanced clock. These exercise the same seams production uses;
//! only the terminal and the clock are replaced.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use lapline::cmd_args::CommandLineArgs;
use lapline::stopwatch::clock::{Clock, ManualClock};
use lapline::stopwatch::io::{
    MockEventStream, MockRenderRecorder, MockRenderStream, RenderCommand,
};
use lapline::stopwatch::model::TimerPhase;
use lapline::stopwatch::views::layout::{self, ControlButton};
use lapline::AppController;

type TestController = AppController<MockEventStream, MockRenderStream>;

fn controller_with_events(
    events: Vec<Event>,
) -> (TestController, Arc<ManualClock>, MockRenderRecorder) {
    let clock = Arc::new(ManualClock::new());
    let render_stream = MockRenderStream::new();
    let recorder = render_stream.recorder();
    let cmd_args = CommandLineArgs::parse_from(["lapline"]);
    let controller = AppController::with_io_streams(
        cmd_args,
        MockEventStream::new(events),
        render_stream,
        clock.clone() as Arc<dyn Clock>,
    )
    .expect("controller construction");
    (controller, clock, recorder)
}

fn controller() -> (TestController, Arc<ManualClock>, MockRenderRecorder) {
    controller_with_events(Vec::new())
}

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn left_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn button_center(button: ControlButton) -> (u16, u16) {
    let span = layout::control_button_spans()
        .into_iter()
        .find(|span| span.button == button)
        .expect("button span");
    ((span.start_col + span.end_col) / 2, layout::CONTROL_ROW)
}

#[test]
fn pausing_freezes_the_total_and_resuming_continues_it() {
    let (mut controller, clock, _recorder) = controller();

    controller.process_key_event(press(KeyCode::Char(' '))).unwrap();
    clock.advance_ms(1000);
    controller.process_key_event(press(KeyCode::Char(' '))).unwrap();

    assert_eq!(controller.view_model().phase(), TimerPhase::Paused);
    assert_eq!(
        controller.view_model().total_elapsed(),
        Duration::from_millis(1000)
    );

    clock.advance_ms(1000);
    controller.process_key_event(press(KeyCode::Char(' '))).unwrap();
    clock.advance_ms(1500);
    controller.process_key_event(press(KeyCode::Char(' '))).unwrap();

    assert_eq!(
        controller.view_model().total_elapsed(),
        Duration::from_millis(2500)
    );
}

#[test]
fn laps_bank_newest_first_and_restart_the_lap_clock() {
    let (mut controller, clock, recorder) = controller();

    controller.process_key_event(press(KeyCode::Char(' '))).unwrap();
    clock.advance_ms(800);
    controller.process_key_event(press(KeyCode::Char('l'))).unwrap();
    clock.advance_ms(1200);
    controller.process_key_event(press(KeyCode::Char('l'))).unwrap();

    let entries = controller.view_model().lap_entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].number, 2);
    assert_eq!(entries[0].duration, Duration::from_millis(1200));
    assert_eq!(entries[1].number, 1);
    assert_eq!(entries[1].duration, Duration::from_millis(800));
    assert_eq!(
        controller.view_model().current_lap_elapsed(),
        Duration::ZERO
    );

    let screen = recorder.buffer_string();
    assert!(screen.contains("Lap   2"));
    assert!(screen.contains("1.20"));
}

#[test]
fn start_is_rejected_while_paused_even_from_the_start_button() {
    let (mut controller, clock, recorder) = controller();

    controller.process_key_event(press(KeyCode::Char(' '))).unwrap();
    clock.advance_ms(500);
    controller.process_key_event(press(KeyCode::Char(' '))).unwrap();
    assert_eq!(controller.view_model().phase(), TimerPhase::Paused);

    // A rejected command changes nothing and repaints nothing.
    recorder.clear();
    let (column, row) = button_center(ControlButton::Start);
    controller.process_mouse_event(left_click(column, row)).unwrap();

    assert_eq!(controller.view_model().phase(), TimerPhase::Paused);
    assert_eq!(
        controller.view_model().total_elapsed(),
        Duration::from_millis(500)
    );
    assert!(recorder.commands().is_empty());
    assert!(recorder.buffer_string().is_empty());
}

#[test]
fn reset_requires_a_paused_timer_with_time_on_the_clock() {
    let (mut controller, clock, recorder) = controller();

    // Reset while idle falls through.
    controller.process_key_event(press(KeyCode::Char('r'))).unwrap();
    assert_eq!(controller.view_model().phase(), TimerPhase::Idle);

    controller.process_key_event(press(KeyCode::Char(' '))).unwrap();
    clock.advance_ms(700);

    // Reset while running falls through too.
    controller.process_key_event(press(KeyCode::Char('r'))).unwrap();
    assert_eq!(controller.view_model().phase(), TimerPhase::Running);

    controller.process_key_event(press(KeyCode::Char(' '))).unwrap();
    recorder.clear();
    controller.process_key_event(press(KeyCode::Char('r'))).unwrap();

    assert_eq!(controller.view_model().phase(), TimerPhase::Idle);
    assert_eq!(controller.view_model().total_elapsed(), Duration::ZERO);
    assert_eq!(controller.view_model().lap_count(), 0);
    // Reset repaints the whole screen, laps included.
    assert!(recorder.has_command(&RenderCommand::ClearScreen));
    assert!(recorder.buffer_string().contains("no laps recorded"));
}

#[test]
fn held_keys_fire_their_command_exactly_once() {
    let (mut controller, _clock, _recorder) = controller();

    let repeat =
        KeyEvent::new_with_kind(KeyCode::Char(' '), KeyModifiers::NONE, KeyEventKind::Repeat);
    controller.process_key_event(repeat).unwrap();
    assert_eq!(controller.view_model().phase(), TimerPhase::Idle);

    controller.process_key_event(press(KeyCode::Char(' '))).unwrap();
    assert_eq!(controller.view_model().phase(), TimerPhase::Running);

    // A stream of repeats while running must not pause.
    for _ in 0..5 {
        let repeat = KeyEvent::new_with_kind(
            KeyCode::Char(' '),
            KeyModifiers::NONE,
            KeyEventKind::Repeat,
        );
        controller.process_key_event(repeat).unwrap();
    }
    assert_eq!(controller.view_model().phase(), TimerPhase::Running);
}

#[test]
fn clicking_buttons_drives_the_same_transitions_as_keys() {
    let (mut controller, clock, _recorder) = controller();

    let (column, row) = button_center(ControlButton::Start);
    controller.process_mouse_event(left_click(column, row)).unwrap();
    assert_eq!(controller.view_model().phase(), TimerPhase::Running);

    clock.advance_ms(900);
    let (column, row) = button_center(ControlButton::Lap);
    controller.process_mouse_event(left_click(column, row)).unwrap();
    assert_eq!(controller.view_model().lap_count(), 1);

    let (column, row) = button_center(ControlButton::Pause);
    controller.process_mouse_event(left_click(column, row)).unwrap();
    assert_eq!(controller.view_model().phase(), TimerPhase::Paused);

    let (column, row) = button_center(ControlButton::Reset);
    controller.process_mouse_event(left_click(column, row)).unwrap();
    assert_eq!(controller.view_model().phase(), TimerPhase::Idle);
}

#[test]
fn clicks_outside_the_buttons_are_ignored() {
    let (mut controller, _clock, recorder) = controller();

    recorder.clear();
    // Off-row click and a click in the gap between buttons.
    controller.process_mouse_event(left_click(3, 0)).unwrap();
    let gap_column = layout::control_button_spans()[0].end_col;
    controller
        .process_mouse_event(left_click(gap_column, layout::CONTROL_ROW))
        .unwrap();
    // Right button presses never dispatch.
    let (column, row) = button_center(ControlButton::Start);
    let right_click = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Right),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    };
    controller.process_mouse_event(right_click).unwrap();

    assert_eq!(controller.view_model().phase(), TimerPhase::Idle);
    assert!(recorder.commands().is_empty());
}

#[test]
fn ticks_repaint_only_while_the_timer_runs() {
    let (mut controller, clock, recorder) = controller();

    recorder.clear();
    controller.handle_tick().unwrap();
    assert!(recorder.buffer_string().is_empty());

    controller.process_key_event(press(KeyCode::Char(' '))).unwrap();
    clock.advance_ms(340);
    recorder.clear();
    controller.handle_tick().unwrap();
    assert!(recorder.buffer_string().contains("0.34"));

    controller.process_key_event(press(KeyCode::Char(' '))).unwrap();
    clock.advance_ms(1000);
    recorder.clear();
    controller.handle_tick().unwrap();
    assert!(recorder.buffer_string().is_empty());
}

#[tokio::test]
async fn run_drives_a_whole_session_and_restores_the_terminal() {
    let events = vec![
        Event::Key(press(KeyCode::Char(' '))),
        Event::Key(press(KeyCode::Char('l'))),
        Event::Key(press(KeyCode::Char(' '))),
        Event::Key(press(KeyCode::Char('q'))),
    ];
    let (mut controller, _clock, recorder) = controller_with_events(events);

    controller.run().await.unwrap();

    assert!(controller.should_quit());
    assert_eq!(controller.view_model().phase(), TimerPhase::Paused);
    assert_eq!(controller.view_model().lap_count(), 1);

    let commands = recorder.commands();
    assert_eq!(commands.first(), Some(&RenderCommand::EnableRawMode));
    assert_eq!(commands.last(), Some(&RenderCommand::DisableRawMode));
    assert!(recorder.has_command(&RenderCommand::EnterAlternateScreen));
    assert!(recorder.has_command(&RenderCommand::LeaveAlternateScreen));
    assert!(recorder.has_command(&RenderCommand::EnableMouseCapture));
    assert!(recorder.has_command(&RenderCommand::DisableMouseCapture));
    assert!(recorder.has_command(&RenderCommand::HideCursor));
    assert!(recorder.has_command(&RenderCommand::ShowCursor));
}

#[tokio::test]
async fn run_repaints_on_resize_without_losing_state() {
    let events = vec![
        Event::Key(press(KeyCode::Char(' '))),
        Event::Resize(100, 30),
        Event::Key(press(KeyCode::Char('q'))),
    ];
    let (mut controller, _clock, recorder) = controller_with_events(events);

    controller.run().await.unwrap();

    assert_eq!(controller.view_model().phase(), TimerPhase::Running);
    // Initial paint plus the resize repaint both clear the screen.
    let clears = recorder
        .commands()
        .iter()
        .filter(|command| **command == RenderCommand::ClearScreen)
        .count();
    assert!(clears >= 2);
}
