//! Input handling for the native player.
//!
//! This module handles keyboard and mouse input events, dispatching
//! them to the appropriate handlers and returning control flow signals.

mod keyboard;
mod mouse;

pub use keyboard::handle_key_event;
pub use mouse::handle_mouse_event;

use crossterm::event::{Event, KeyEventKind};

use crate::player::state::{InputResult, PlayerView, ViewState};

/// Handle any input event, dispatching to the appropriate handler.
///
/// # Arguments
/// * `event` - The crossterm event to handle
/// * `view` - Terminal layout state (resized and toggled in place)
/// * `player` - Current player projection
/// * `skip_step` - Seconds moved by a skip key
pub fn handle_event(
    event: Event,
    view: &mut ViewState,
    player: &PlayerView,
    skip_step: f64,
) -> InputResult {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => {
            handle_key_event(key, view, skip_step, player.total_duration)
        }
        Event::Mouse(mouse) => handle_mouse_event(mouse, view, player),
        Event::Resize(new_cols, new_rows) => {
            view.handle_resize(new_cols, new_rows);
            InputResult::Continue
        }
        _ => InputResult::Continue, // Ignore focus events, etc.
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::state::{PlayerState, TransportCommand};
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    fn idle_view() -> PlayerView {
        PlayerView {
            state: PlayerState::Idle,
            playhead: 0.0,
            total_duration: 0.0,
            local_time: 0.0,
            scene_label: None,
            placeholder: Some("No scenes"),
            media_playing: false,
            strip: Vec::new(),
            boundaries: Vec::new(),
        }
    }

    #[test]
    fn resize_updates_view_state() {
        let mut view = ViewState::new(80, 24);
        view.needs_render = false;

        let result = handle_event(Event::Resize(100, 30), &mut view, &idle_view(), 5.0);

        assert_eq!(result, InputResult::Continue);
        assert_eq!((view.term_cols, view.term_rows), (100, 30));
        assert!(view.needs_render);
    }

    #[test]
    fn key_press_is_dispatched() {
        let mut view = ViewState::new(80, 24);
        let event = Event::Key(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE));

        assert_eq!(
            handle_event(event, &mut view, &idle_view(), 5.0),
            InputResult::Transport(TransportCommand::TogglePlay)
        );
    }

    #[test]
    fn key_release_is_ignored() {
        let mut view = ViewState::new(80, 24);
        let event = Event::Key(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });

        assert_eq!(
            handle_event(event, &mut view, &idle_view(), 5.0),
            InputResult::Continue
        );
    }

    #[test]
    fn focus_events_are_ignored() {
        let mut view = ViewState::new(80, 24);
        assert_eq!(
            handle_event(Event::FocusGained, &mut view, &idle_view(), 5.0),
            InputResult::Continue
        );
    }
}
