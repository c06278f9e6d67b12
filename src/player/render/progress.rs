//! Progress bar rendering for the player.
//!
//! Displays the global playhead with segment boundary ticks.

use std::io::Write;

use anyhow::Result;

/// Glyph for the playhead
pub const PLAYHEAD: char = '⏺';
/// Glyph for a boundary between two segments
pub const BOUNDARY: char = '┃';

/// Format seconds as `m:ss` (minutes unpadded, seconds floored).
///
/// Negative and NaN inputs format as `0:00`.
pub fn format_time(seconds: f64) -> String {
    let total_secs = if seconds.is_finite() && seconds > 0.0 {
        seconds as u64
    } else {
        0
    };
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

/// Build the progress bar character array.
///
/// # Arguments
/// * `bar_width` - Width of the bar in characters
/// * `current_time` - Global playhead
/// * `total_duration` - Total timeline duration
/// * `boundaries` - Global start offsets of segments after the first
///
/// # Returns
/// A tuple of (bar_chars, filled_count).
pub fn build_progress_bar_chars(
    bar_width: usize,
    current_time: f64,
    total_duration: f64,
    boundaries: &[f64],
) -> (Vec<char>, usize) {
    let progress = if total_duration > 0.0 {
        (current_time / total_duration).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let filled = (bar_width as f64 * progress) as usize;

    let mut bar: Vec<char> = vec!['─'; bar_width];

    if filled < bar_width {
        bar[filled] = PLAYHEAD;
    }

    if total_duration > 0.0 {
        for &boundary in boundaries {
            let pos = ((boundary / total_duration) * bar_width as f64) as usize;
            if pos < bar_width && bar[pos] != PLAYHEAD {
                bar[pos] = BOUNDARY;
            }
        }
    }

    (bar, filled)
}

/// Render the progress bar with segment boundaries.
///
/// # Arguments
/// * `out` - Writer for the terminal
/// * `width` - Terminal width
/// * `row` - Row to render at (0-indexed)
/// * `current_time` - Global playhead
/// * `total_duration` - Total timeline duration
/// * `boundaries` - Segment boundary offsets
pub fn render_progress_bar(
    out: &mut impl Write,
    width: u16,
    row: u16,
    current_time: f64,
    total_duration: f64,
    boundaries: &[f64],
) -> Result<()> {
    let bar_width = (width as usize).saturating_sub(14); // Padding and time display
    let (bar, filled) =
        build_progress_bar_chars(bar_width, current_time, total_duration, boundaries);

    let time_display = format!(
        " {}/{}",
        format_time(current_time),
        format_time(total_duration)
    );

    let mut output = String::with_capacity(width as usize * 4);
    output.push_str(&format!("\x1b[{};1H", row + 1));
    output.push_str("\x1b[48;5;236m ");

    const GREEN: &str = "\x1b[32m";
    const YELLOW: &str = "\x1b[33m";
    const WHITE: &str = "\x1b[97m";
    const DARK_GREY: &str = "\x1b[90m";
    const GREY: &str = "\x1b[37m";

    output.push_str(GREEN);
    for (i, &c) in bar.iter().enumerate() {
        if i < filled {
            if c == BOUNDARY {
                output.push_str(YELLOW);
                output.push(c);
                output.push_str(GREEN);
            } else {
                output.push('━');
            }
        } else if i == filled {
            output.push_str(WHITE);
            output.push(c);
        } else if c == BOUNDARY {
            output.push_str(YELLOW);
            output.push(c);
        } else {
            output.push_str(DARK_GREY);
            output.push(c);
        }
    }

    output.push_str(GREY);
    output.push_str(&time_display);

    let used_width = 1 + bar_width + time_display.len();
    let remaining = (width as usize).saturating_sub(used_width);
    output.push_str(&" ".repeat(remaining));

    output.push_str("\x1b[0m");
    write!(out, "{}", output)?;

    Ok(())
}

/// Map a click column on the progress bar to a global time.
///
/// The bar starts at column 1. Returns None outside the bar.
pub fn time_at_column(column: u16, bar_width: usize, total_duration: f64) -> Option<f64> {
    let bar_start = 1u16;
    if bar_width == 0 || column < bar_start || column >= bar_start + bar_width as u16 {
        return None;
    }
    let ratio = (column - bar_start) as f64 / bar_width as f64;
    Some((ratio * total_duration).clamp(0.0, total_duration))
}
