//! Drawing seam between entities and whatever grid they are stamped onto.
//!
//! Entities know their own glyphs; the grid (see `trex_run_term::Screen`)
//! owns bounds. Writes outside the grid must be dropped silently.

pub trait Canvas {
    fn width(&self) -> u16;
    fn height(&self) -> u16;

    /// Write one cell. Out-of-range coordinates are ignored.
    fn put_char(&mut self, x: i32, y: i32, ch: char);

    fn put_str(&mut self, x: i32, y: i32, s: &str) {
        for (i, ch) in s.chars().enumerate() {
            self.put_char(x + i as i32, y, ch);
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Canvas;

    /// Minimal grid used by the entity tests.
    pub struct Grid {
        pub w: u16,
        pub h: u16,
        pub rows: Vec<Vec<char>>,
    }

    impl Grid {
        pub fn new(w: u16, h: u16) -> Self {
            Self {
                w,
                h,
                rows: vec![vec!['.'; w as usize]; h as usize],
            }
        }

        pub fn row(&self, y: usize) -> String {
            self.rows[y].iter().collect()
        }
    }

    impl Canvas for Grid {
        fn width(&self) -> u16 {
            self.w
        }

        fn height(&self) -> u16 {
            self.h
        }

        fn put_char(&mut self, x: i32, y: i32, ch: char) {
            if x < 0 || y < 0 || x >= self.w as i32 || y >= self.h as i32 {
                return;
            }
            self.rows[y as usize][x as usize] = ch;
        }
    }
}
