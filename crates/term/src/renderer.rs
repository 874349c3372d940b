//! Frame encoding: turns a screen into one buffer of terminal commands.
//!
//! Every frame is a full repaint. Rows are positioned with explicit cursor
//! moves instead of `\n`, because raw mode does not return the carriage on a
//! line feed.

use anyhow::Result;

use crossterm::{
    cursor,
    style::Print,
    terminal::{self, ClearType},
    QueueableCommand,
};

use crate::screen::Screen;

/// Encode a full-frame repaint into `out`.
///
/// The hint, when present, goes on the row just below the grid and the rest
/// of that line is cleared. This builds a sequence of crossterm commands
/// without writing to stdout.
pub fn encode_frame_into(screen: &Screen, hint: Option<&str>, out: &mut Vec<u8>) -> Result<()> {
    let mut line = String::with_capacity(screen.width() as usize);
    for (y, row) in screen.rows().enumerate() {
        line.clear();
        line.extend(row.iter());
        out.queue(cursor::MoveTo(0, y as u16))?;
        out.queue(Print(&line))?;
    }

    if let Some(hint) = hint {
        out.queue(cursor::MoveTo(0, screen.height()))?;
        out.queue(Print(hint))?;
        out.queue(terminal::Clear(ClearType::UntilNewLine))?;
    }
    Ok(())
}

/// Plain-text form of a frame: newline-terminated rows, then the hint line.
pub fn frame_text(screen: &Screen, hint: Option<&str>) -> String {
    let mut out = screen.compose();
    if let Some(hint) = hint {
        out.push_str(hint);
        out.push('\n');
    }
    out
}
