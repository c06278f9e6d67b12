//! Scene panel rendering for the native player.
//!
//! The terminal stands in for the video surface: the panel shows the
//! active scene label and its local clock centered in the free area, or
//! a placeholder when nothing is playable.

use std::io::Write;

use anyhow::Result;

use crate::player::render::progress::format_time;
use crate::player::render::status::{scene_text, truncate};
use crate::player::state::{PlayerState, PlayerView};

/// Lines shown in the panel, top to bottom.
pub fn panel_lines(view: &PlayerView) -> Vec<String> {
    let mut lines = vec![scene_text(view)];
    match view.state {
        PlayerState::Idle => {}
        PlayerState::Ended => lines.push("Finished".to_string()),
        _ => lines.push(format!(
            "{}  ({} in scene)",
            format_time(view.playhead),
            format_time(view.local_time)
        )),
    }
    lines
}

/// Render the scene panel.
///
/// # Arguments
/// * `out` - Writer for the terminal
/// * `first_row` - First row of the panel area (0-indexed)
/// * `rows` - Number of rows available
/// * `cols` - Terminal width
/// * `view` - Current player projection
pub fn render_viewport(
    out: &mut impl Write,
    first_row: u16,
    rows: u16,
    cols: u16,
    view: &PlayerView,
) -> Result<()> {
    let lines = panel_lines(view);
    let mut output = String::with_capacity((rows as usize) * (cols as usize));

    // Clear the whole area first so stale text does not linger
    for row in first_row..first_row + rows {
        output.push_str(&format!("\x1b[{};1H\x1b[2K", row + 1));
    }

    let top = first_row + rows.saturating_sub(lines.len() as u16) / 2;
    for (i, line) in lines.iter().enumerate() {
        let row = top + i as u16;
        if row >= first_row + rows {
            break;
        }
        let text = truncate(line, cols as usize);
        let pad = (cols as usize).saturating_sub(text.chars().count()) / 2;
        let style = if i == 0 { "\x1b[1;97m" } else { "\x1b[90m" };
        output.push_str(&format!(
            "\x1b[{};{}H{}{}\x1b[0m",
            row + 1,
            pad + 1,
            style,
            text
        ));
    }

    write!(out, "{}", output)?;
    Ok(())
}
