//! Rendering components for the native player.
//!
//! This module contains all the UI rendering functions for the player:
//! title line, scene strip, scene panel, progress bar and status bar.

mod progress;
mod status;
mod strip;
mod viewport;

pub use progress::{build_progress_bar_chars, format_time, render_progress_bar, time_at_column};
pub use status::{render_separator_line, render_status_bar, scene_text, state_icon, truncate};
pub use strip::{entry_at_column, render_strip, STRIP_ROW};
pub use viewport::{panel_lines, render_viewport};

use std::io::Write;

use anyhow::Result;

use crate::player::state::{PlayerView, ViewState};

/// Render the title line at the top of the screen.
pub fn render_title(out: &mut impl Write, width: u16, title: &str) -> Result<()> {
    let text = truncate(title, (width as usize).saturating_sub(2));
    write!(out, "\x1b[1;1H\x1b[2K \x1b[1;36m{}\x1b[0m", text)?;
    Ok(())
}

/// Render a complete frame.
///
/// Fullscreen hides the title and the scene strip, giving the panel the
/// whole area above the bottom chrome.
pub fn render_frame(
    out: &mut impl Write,
    layout: &ViewState,
    view: &PlayerView,
    title: &str,
) -> Result<()> {
    let cols = layout.term_cols;
    let rows = layout.term_rows;
    let chrome_top = if layout.fullscreen { 0 } else { STRIP_ROW + 1 };

    if !layout.fullscreen {
        render_title(out, cols, title)?;
        render_strip(out, cols, &view.strip)?;
    }

    let panel_rows = rows.saturating_sub(ViewState::STATUS_LINES + chrome_top);
    render_viewport(out, chrome_top, panel_rows, cols, view)?;

    if rows >= ViewState::STATUS_LINES {
        render_separator_line(out, cols, rows - ViewState::STATUS_LINES)?;
        render_progress_bar(
            out,
            cols,
            layout.progress_row(),
            view.playhead,
            view.total_duration,
            &view.boundaries,
        )?;
        render_status_bar(out, cols, rows - 1, view, layout.fullscreen)?;
    }

    out.flush()?;
    Ok(())
}
