//! Status bar rendering for the player.
//!
//! Displays playback state, the active scene and keyboard shortcuts.

use std::io::Write;

use anyhow::Result;

use crate::player::state::{PlayerState, PlayerView};

/// State icon and its visible width.
pub fn state_icon(state: PlayerState) -> &'static str {
    match state {
        PlayerState::Idle => "■ ",
        PlayerState::ActivePaused => "▶ ",
        PlayerState::ActivePlaying => "⏸ ",
        PlayerState::Ended => "↺ ",
    }
}

/// Text describing what the screen shows right now.
pub fn scene_text(view: &PlayerView) -> String {
    if let Some(label) = &view.scene_label {
        label.clone()
    } else if let Some(placeholder) = view.placeholder {
        placeholder.to_string()
    } else {
        "End".to_string()
    }
}

/// Render a separator line.
pub fn render_separator_line(out: &mut impl Write, width: u16, row: u16) -> Result<()> {
    let mut output = String::with_capacity(width as usize * 3 + 20);
    output.push_str(&format!("\x1b[{};1H\x1b[90m", row + 1));
    output.push_str(&"─".repeat(width as usize));
    output.push_str("\x1b[0m");
    write!(out, "{}", output)?;
    Ok(())
}

/// Render the status/controls bar.
pub fn render_status_bar(
    out: &mut impl Write,
    width: u16,
    row: u16,
    view: &PlayerView,
    fullscreen: bool,
) -> Result<()> {
    const WHITE: &str = "\x1b[97m";
    const DARK_GREY: &str = "\x1b[90m";
    const YELLOW: &str = "\x1b[33m";
    const CYAN: &str = "\x1b[36m";
    const RESET: &str = "\x1b[0m";

    let mut output = String::with_capacity(256);
    let mut visible_len: usize = 0;

    output.push_str(&format!("\x1b[{};1H", row + 1));

    output.push_str(WHITE);
    output.push(' ');
    output.push_str(state_icon(view.state));
    output.push(' ');
    visible_len += 4;

    let scene = truncate(&scene_text(view), 32);
    visible_len += scene.chars().count() + 1;
    output.push_str(&scene);
    output.push(' ');

    if view.state.is_playing() && !view.media_playing {
        output.push_str(YELLOW);
        output.push_str("[buffering] ");
        visible_len += 12;
    }

    let play_action = if view.state.is_playing() {
        ":pause "
    } else {
        ":play "
    };
    let hints: [(&str, &str); 5] = [
        ("space", play_action),
        ("←→", ":skip "),
        ("1-9", ":scene "),
        ("f", if fullscreen { ":exit fs " } else { ":fs " }),
        ("q", ":quit"),
    ];

    output.push_str(DARK_GREY);
    output.push_str("│ ");
    visible_len += 2;
    for (key, action) in hints {
        output.push_str(CYAN);
        output.push_str(key);
        output.push_str(DARK_GREY);
        output.push_str(action);
        visible_len += key.chars().count() + action.len();
    }

    let padding = (width as usize).saturating_sub(visible_len);
    output.push_str(&" ".repeat(padding));

    output.push_str(RESET);
    write!(out, "{}", output)?;

    Ok(())
}

/// Truncate to `max` characters, marking the cut with an ellipsis.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
