//! Terminal surface: the capability set the game loop talks to.
//!
//! The loop only needs to poll a key without blocking, clear, position the
//! cursor, present a frame, and sleep. [`CrosstermSurface`] drives a real
//! terminal (crossterm picks the Windows console or Unix termios backend);
//! [`HeadlessSurface`] replays scripted keys and records what was drawn.

use std::collections::VecDeque;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use anyhow::Result;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    terminal::{self, ClearType},
    QueueableCommand,
};

use crate::renderer::{encode_frame_into, frame_text};
use crate::screen::Screen;

pub trait TerminalSurface {
    /// Non-blocking: is a key event ready to read?
    fn key_available(&mut self) -> Result<bool>;

    /// Consume one pending event. Non-key events yield `None`.
    fn read_key(&mut self) -> Result<Option<KeyEvent>>;

    fn clear_screen(&mut self) -> Result<()>;

    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()>;

    /// Emit a full frame in one flush.
    fn present(&mut self, screen: &Screen, hint: Option<&str>) -> Result<()>;

    fn sleep(&mut self, ms: u64);

    /// Poll, then consume only if something is there.
    fn poll_key(&mut self) -> Result<Option<KeyEvent>> {
        if self.key_available()? {
            self.read_key()
        } else {
            Ok(None)
        }
    }
}

pub struct CrosstermSurface {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl CrosstermSurface {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(8 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.buf.queue(terminal::Clear(ClearType::All))?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Current terminal size, if the terminal reports one.
    pub fn size(&self) -> Option<(u16, u16)> {
        terminal::size().ok()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for CrosstermSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalSurface for CrosstermSurface {
    fn key_available(&mut self) -> Result<bool> {
        Ok(event::poll(Duration::ZERO)?)
    }

    fn read_key(&mut self) -> Result<Option<KeyEvent>> {
        match event::read()? {
            Event::Key(key) => Ok(Some(key)),
            _ => Ok(None),
        }
    }

    fn clear_screen(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(terminal::Clear(ClearType::All))?;
        self.buf.queue(cursor::MoveTo(0, 0))?;
        self.flush_buf()
    }

    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        self.buf.clear();
        self.buf.queue(cursor::MoveTo(x, y))?;
        self.flush_buf()
    }

    fn present(&mut self, screen: &Screen, hint: Option<&str>) -> Result<()> {
        self.buf.clear();
        encode_frame_into(screen, hint, &mut self.buf)?;
        self.flush_buf()
    }

    fn sleep(&mut self, ms: u64) {
        thread::sleep(Duration::from_millis(ms));
    }
}

/// In-memory surface for tests and benchmarks.
///
/// Each entry of the key script answers one poll: `Some(key)` delivers a key,
/// `None` is an idle poll. An exhausted script polls idle forever. Sleeps are
/// recorded, never performed.
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    script: VecDeque<Option<KeyEvent>>,
    frames: Vec<String>,
    keep_frames: bool,
    frame_count: u64,
    clears: u32,
    cursor: (u16, u16),
    slept_ms: u64,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self {
            keep_frames: true,
            ..Self::default()
        }
    }

    /// Count frames without keeping their text.
    pub fn discard_frames(mut self) -> Self {
        self.keep_frames = false;
        self
    }

    pub fn push_key(&mut self, key: KeyEvent) -> &mut Self {
        self.script.push_back(Some(key));
        self
    }

    pub fn push_char(&mut self, ch: char) -> &mut Self {
        self.push_key(KeyEvent::from(KeyCode::Char(ch)))
    }

    pub fn push_idle(&mut self, polls: usize) -> &mut Self {
        self.script.extend(std::iter::repeat(None).take(polls));
        self
    }

    pub fn pending_polls(&self) -> usize {
        self.script.len()
    }

    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn clears(&self) -> u32 {
        self.clears
    }

    pub fn cursor(&self) -> (u16, u16) {
        self.cursor
    }

    pub fn slept_ms(&self) -> u64 {
        self.slept_ms
    }
}

impl TerminalSurface for HeadlessSurface {
    fn key_available(&mut self) -> Result<bool> {
        match self.script.front() {
            Some(Some(_)) => Ok(true),
            Some(None) => {
                self.script.pop_front();
                Ok(false)
            }
            None => Ok(false),
        }
    }

    fn read_key(&mut self) -> Result<Option<KeyEvent>> {
        Ok(self.script.pop_front().flatten())
    }

    fn clear_screen(&mut self) -> Result<()> {
        self.clears += 1;
        self.cursor = (0, 0);
        Ok(())
    }

    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        self.cursor = (x, y);
        Ok(())
    }

    fn present(&mut self, screen: &Screen, hint: Option<&str>) -> Result<()> {
        self.frame_count += 1;
        if self.keep_frames {
            self.frames.push(frame_text(screen, hint));
        }
        Ok(())
    }

    fn sleep(&mut self, ms: u64) {
        self.slept_ms += ms;
    }
}
