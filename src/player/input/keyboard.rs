//! Keyboard input handling for the native player.
//!
//! Maps key presses to transport commands and layout toggles.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::player::state::{InputResult, TransportCommand, ViewState};

/// Fraction of the total duration jumped by Shift+arrow.
const COARSE_SKIP_FRACTION: f64 = 0.05;

/// Handle a keyboard event.
///
/// Layout toggles are applied to `view` directly; everything that
/// affects playback is returned as a transport command.
pub fn handle_key_event(
    key: KeyEvent,
    view: &mut ViewState,
    skip_step: f64,
    total_duration: f64,
) -> InputResult {
    match key.code {
        // === Quit ===
        KeyCode::Char('q') => InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Quit,
        KeyCode::Esc => {
            if view.fullscreen {
                view.toggle_fullscreen();
                InputResult::ToggleFullscreen
            } else {
                InputResult::Quit
            }
        }

        // === Layout ===
        KeyCode::Char('f') => {
            view.toggle_fullscreen();
            InputResult::ToggleFullscreen
        }

        // === Playback ===
        KeyCode::Char(' ') | KeyCode::Char('k') => transport(TransportCommand::TogglePlay),

        // === Seeking ===
        KeyCode::Left => transport(TransportCommand::Skip(-step_for(
            key.modifiers,
            skip_step,
            total_duration,
        ))),
        KeyCode::Right => transport(TransportCommand::Skip(step_for(
            key.modifiers,
            skip_step,
            total_duration,
        ))),
        KeyCode::Char('<') | KeyCode::Char(',') => transport(TransportCommand::Skip(-skip_step)),
        KeyCode::Char('>') | KeyCode::Char('.') => transport(TransportCommand::Skip(skip_step)),
        KeyCode::Home => transport(TransportCommand::SeekStart),
        KeyCode::End => transport(TransportCommand::SeekEnd),

        // === Scene jumps ===
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as u32 - '1' as u32;
            transport(TransportCommand::JumpToScene(index))
        }

        _ => InputResult::Continue,
    }
}

fn transport(command: TransportCommand) -> InputResult {
    InputResult::Transport(command)
}

/// Skip distance for an arrow key: Shift jumps a fraction of the timeline.
fn step_for(modifiers: KeyModifiers, skip_step: f64, total_duration: f64) -> f64 {
    if modifiers.contains(KeyModifiers::SHIFT) && total_duration > 0.0 {
        total_duration * COARSE_SKIP_FRACTION
    } else {
        skip_step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn press(code: KeyCode) -> InputResult {
        let mut view = ViewState::new(80, 24);
        handle_key_event(key(code), &mut view, 5.0, 200.0)
    }

    #[test]
    fn space_toggles_play() {
        assert_eq!(
            press(KeyCode::Char(' ')),
            InputResult::Transport(TransportCommand::TogglePlay)
        );
    }

    #[test]
    fn arrows_skip_by_step() {
        assert_eq!(
            press(KeyCode::Left),
            InputResult::Transport(TransportCommand::Skip(-5.0))
        );
        assert_eq!(
            press(KeyCode::Right),
            InputResult::Transport(TransportCommand::Skip(5.0))
        );
        assert_eq!(
            press(KeyCode::Char(',')),
            InputResult::Transport(TransportCommand::Skip(-5.0))
        );
        assert_eq!(
            press(KeyCode::Char('.')),
            InputResult::Transport(TransportCommand::Skip(5.0))
        );
    }

    #[test]
    fn shift_arrow_skips_fraction_of_total() {
        let mut view = ViewState::new(80, 24);
        let result = handle_key_event(
            KeyEvent::new(KeyCode::Right, KeyModifiers::SHIFT),
            &mut view,
            5.0,
            200.0,
        );
        assert_eq!(result, InputResult::Transport(TransportCommand::Skip(10.0)));
    }

    #[test]
    fn shift_arrow_without_content_uses_step() {
        let mut view = ViewState::new(80, 24);
        let result = handle_key_event(
            KeyEvent::new(KeyCode::Left, KeyModifiers::SHIFT),
            &mut view,
            5.0,
            0.0,
        );
        assert_eq!(result, InputResult::Transport(TransportCommand::Skip(-5.0)));
    }

    #[test]
    fn home_and_end_seek() {
        assert_eq!(
            press(KeyCode::Home),
            InputResult::Transport(TransportCommand::SeekStart)
        );
        assert_eq!(
            press(KeyCode::End),
            InputResult::Transport(TransportCommand::SeekEnd)
        );
    }

    #[test]
    fn digits_jump_to_scene() {
        assert_eq!(
            press(KeyCode::Char('1')),
            InputResult::Transport(TransportCommand::JumpToScene(0))
        );
        assert_eq!(
            press(KeyCode::Char('9')),
            InputResult::Transport(TransportCommand::JumpToScene(8))
        );
        assert_eq!(press(KeyCode::Char('0')), InputResult::Continue);
    }

    #[test]
    fn quit_keys() {
        assert_eq!(press(KeyCode::Char('q')), InputResult::Quit);
        assert_eq!(press(KeyCode::Esc), InputResult::Quit);

        let mut view = ViewState::new(80, 24);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(
            handle_key_event(ctrl_c, &mut view, 5.0, 10.0),
            InputResult::Quit
        );
    }

    #[test]
    fn esc_leaves_fullscreen_before_quitting() {
        let mut view = ViewState::new(80, 24);
        handle_key_event(key(KeyCode::Char('f')), &mut view, 5.0, 10.0);
        assert!(view.fullscreen);

        let result = handle_key_event(key(KeyCode::Esc), &mut view, 5.0, 10.0);
        assert_eq!(result, InputResult::ToggleFullscreen);
        assert!(!view.fullscreen);

        let result = handle_key_event(key(KeyCode::Esc), &mut view, 5.0, 10.0);
        assert_eq!(result, InputResult::Quit);
    }

    #[test]
    fn unknown_key_continues() {
        assert_eq!(press(KeyCode::Char('z')), InputResult::Continue);
    }
}
