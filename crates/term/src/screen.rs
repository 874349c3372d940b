//! Screen: the fixed-size character grid composed each frame.

use crate::core::Canvas;

/// W x H grid of characters.
///
/// Always holds exactly `height` rows of exactly `width` characters. Writes
/// outside the grid are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    width: u16,
    height: u16,
    cells: Vec<char>,
}

impl Screen {
    /// Blank (space-filled) screen.
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![' '; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: i32, y: i32) -> Option<char> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: i32, y: i32, ch: char) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = ch;
        }
    }

    /// Write `s` so that it is centered on the middle column.
    ///
    /// Starts at `width / 2 - len / 2`; text that overhangs either edge is clipped.
    pub fn put_str_centered(&mut self, y: i32, s: &str) {
        let len = s.chars().count() as i32;
        let x = self.width as i32 / 2 - len / 2;
        self.put_str(x, y, s);
    }

    pub fn fill_row(&mut self, y: i32, ch: char) {
        for x in 0..self.width as i32 {
            self.set(x, y, ch);
        }
    }

    pub fn row(&self, y: u16) -> Option<&[char]> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * (self.width as usize);
        Some(&self.cells[start..start + self.width as usize])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> + '_ {
        // `max(1)` keeps `chunks` valid for a zero-width screen (which has no cells).
        self.cells.chunks(self.width.max(1) as usize)
    }

    pub fn row_string(&self, y: u16) -> Option<String> {
        self.row(y).map(|r| r.iter().collect())
    }

    /// Append the frame as newline-terminated rows.
    pub fn compose_into(&self, out: &mut String) {
        out.reserve((self.width as usize + 1) * self.height as usize);
        for row in self.rows() {
            out.extend(row.iter());
            out.push('\n');
        }
    }

    pub fn compose(&self) -> String {
        let mut out = String::new();
        self.compose_into(&mut out);
        out
    }

    /// Whether any row contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.rows()
            .any(|r| r.iter().collect::<String>().contains(needle))
    }
}

impl Canvas for Screen {
    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }

    fn put_char(&mut self, x: i32, y: i32, ch: char) {
        self.set(x, y, ch);
    }
}
