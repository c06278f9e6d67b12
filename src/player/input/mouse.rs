//! Mouse input handling for the native player.
//!
//! Handles click-to-seek on the progress bar and click-to-jump on the
//! scene strip.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::player::render::{entry_at_column, time_at_column, STRIP_ROW};
use crate::player::state::{InputResult, PlayerView, TransportCommand, ViewState};

/// Handle a mouse event.
///
/// Currently handles:
/// - Left click or drag on the progress bar to seek to that position
/// - Left click on a scene strip entry to jump to that scene
pub fn handle_mouse_event(mouse: MouseEvent, view: &ViewState, player: &PlayerView) -> InputResult {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left) => {}
        _ => return InputResult::Continue,
    }

    if mouse.row == view.progress_row() {
        if player.total_duration <= 0.0 {
            return InputResult::Continue;
        }
        return match time_at_column(mouse.column, view.progress_bar_width(), player.total_duration)
        {
            Some(time) => InputResult::Transport(TransportCommand::Seek(time)),
            None => InputResult::Continue,
        };
    }

    let is_click = matches!(mouse.kind, MouseEventKind::Down(_));
    if is_click && !view.fullscreen && mouse.row == STRIP_ROW {
        if let Some(i) = entry_at_column(mouse.column, player.strip.len()) {
            let index = player.strip[i].index;
            return InputResult::Transport(TransportCommand::JumpToScene(index));
        }
    }

    InputResult::Continue
}
