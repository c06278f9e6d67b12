//! Scene strip rendering.
//!
//! One numbered cell per scene in index order, coloured by generation
//! status, with the scene holding the playhead highlighted.

use std::io::Write;

use anyhow::Result;

use crate::player::state::StripEntry;
use crate::scene::SceneStatus;

/// Row the strip is drawn on (0-indexed)
pub const STRIP_ROW: u16 = 1;
/// First column of the strip
const STRIP_START_COL: u16 = 1;
/// Cell width including the gap after it
const CELL_WIDTH: u16 = 4;

/// Find the strip entry under a column.
///
/// Gaps between cells and columns past the last entry return None.
pub fn entry_at_column(column: u16, count: usize) -> Option<usize> {
    if column < STRIP_START_COL {
        return None;
    }
    let offset = column - STRIP_START_COL;
    if offset % CELL_WIDTH == CELL_WIDTH - 1 {
        return None;
    }
    let i = (offset / CELL_WIDTH) as usize;
    (i < count).then_some(i)
}

fn status_color(status: SceneStatus) -> &'static str {
    if status.is_ready() {
        "\x1b[32m"
    } else if matches!(status, SceneStatus::Planned) {
        "\x1b[90m"
    } else if status.is_pending() {
        "\x1b[33m"
    } else {
        "\x1b[31m"
    }
}

/// Scene number centred in a cell, numbered from one.
fn cell_label(index: u32) -> String {
    format!("{:^3}", index + 1)
}

/// Render the scene strip at `STRIP_ROW`.
pub fn render_strip(out: &mut impl Write, width: u16, entries: &[StripEntry]) -> Result<()> {
    let mut output = String::with_capacity(width as usize * 4);
    output.push_str(&format!("\x1b[{};1H\x1b[2K ", STRIP_ROW + 1));

    let mut visible_len = STRIP_START_COL as usize;
    for entry in entries {
        if visible_len + CELL_WIDTH as usize > width as usize {
            output.push_str("\x1b[90m…");
            break;
        }
        if entry.active {
            output.push_str("\x1b[7m");
        }
        output.push_str(status_color(entry.status));
        output.push_str(&cell_label(entry.index));
        output.push_str("\x1b[0m ");
        visible_len += CELL_WIDTH as usize;
    }

    output.push_str("\x1b[0m");
    write!(out, "{}", output)?;
    Ok(())
}
