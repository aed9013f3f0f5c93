//! # Text-mode screen
//!
//! A character grid over a buffer of 16-bit cells laid out row-major, the way
//! VGA text memory is. Each cell holds the character in its low byte and an
//! [`Attribute`] in its high byte.
//!
//! Output follows a teletype model:
//!
//! * printable bytes land at the cursor, which then advances;
//! * reaching the end of a row wraps to the start of the next one;
//! * moving past the last row scrolls everything up by one row and clears the
//!   vacated bottom row;
//! * `\n` starts a new line, `\r` returns to column 0, `\t` becomes
//!   [`TAB_WIDTH`] spaces and NUL is shown as a space.

use crate::{Attribute, Color, ConsoleSink, SCREEN_HEIGHT, SCREEN_WIDTH, TAB_WIDTH};

/// The value of an empty cell: a space, black on black.
pub const BLANK_CELL: u16 = 0x0020;

#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
pub enum ScreenError {
    #[error("screen dimensions must be non-zero (got {width}x{height})")]
    ZeroSize { width: usize, height: usize },
    #[error("cell buffer holds {available} cells, {width}x{height} needs {needed}")]
    BufferTooSmall {
        width: usize,
        height: usize,
        needed: usize,
        available: usize,
    },
}

/// Cursor position as (column, row).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct Position {
    pub column: usize,
    pub row: usize,
}

impl Position {
    /// Linear cell index on a screen `width` columns wide.
    #[inline]
    #[must_use]
    pub const fn index(self, width: usize) -> usize {
        self.row * width + self.column
    }
}

pub struct TextScreen<'a> {
    cells: &'a mut [u16],
    width: usize,
    height: usize,
    cursor: Position,
}

impl<'a> TextScreen<'a> {
    /// Wrap `cells` as a `width` x `height` grid.
    ///
    /// The buffer contents are left alone; call [`clear`](Self::clear) for a
    /// blank screen. Cells past `width * height` are never touched.
    pub fn new(cells: &'a mut [u16], width: usize, height: usize) -> Result<Self, ScreenError> {
        if width == 0 || height == 0 {
            return Err(ScreenError::ZeroSize { width, height });
        }
        let needed = width.saturating_mul(height);
        if cells.len() < needed {
            return Err(ScreenError::BufferTooSmall {
                width,
                height,
                needed,
                available: cells.len(),
            });
        }
        Ok(Self {
            cells: &mut cells[..needed],
            width,
            height,
            cursor: Position::default(),
        })
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub const fn cursor(&self) -> Position {
        self.cursor
    }

    /// The raw value of the cell at (`column`, `row`), if on screen.
    #[must_use]
    pub fn cell(&self, column: usize, row: usize) -> Option<u16> {
        if column >= self.width || row >= self.height {
            return None;
        }
        self.cells.get(row * self.width + column).copied()
    }

    /// The characters of `row`, without attributes.
    pub fn row_text(&self, row: usize) -> impl Iterator<Item = u8> + '_ {
        let start = row.min(self.height) * self.width;
        let end = if row < self.height { start + self.width } else { start };
        self.cells[start..end].iter().map(|&c| c.to_le_bytes()[0])
    }

    /// Blank every cell and home the cursor.
    pub fn clear(&mut self) {
        self.cells.fill(BLANK_CELL);
        self.cursor = Position::default();
    }

    /// Move every row up by one and blank the bottom row.
    ///
    /// The cursor moves up with the text, stopping at row 0.
    pub fn scroll(&mut self) {
        let width = self.width;
        self.cells.copy_within(width.., 0);
        let last_row = (self.height - 1) * width;
        self.cells[last_row..].fill(BLANK_CELL);
        self.cursor.row = self.cursor.row.saturating_sub(1);
    }

    /// Interpret one byte.
    pub fn put_byte(&mut self, byte: u8, foreground: Color, background: Color) {
        let attr = Attribute::with_colors(foreground, background);
        match byte {
            b'\n' => self.new_line(),
            b'\r' => self.cursor.column = 0,
            b'\t' => {
                for _ in 0..TAB_WIDTH {
                    self.put_cell(attr.cell(b' '));
                }
            }
            0 => self.put_cell(attr.cell(b' ')),
            ch => self.put_cell(attr.cell(ch)),
        }
    }

    fn put_cell(&mut self, value: u16) {
        let index = self.cursor.index(self.width);
        self.cells[index] = value;
        self.cursor.column += 1;
        if self.cursor.column >= self.width {
            self.new_line();
        }
    }

    fn new_line(&mut self) {
        self.cursor.column = 0;
        self.cursor.row += 1;
        if self.cursor.row >= self.height {
            self.scroll();
            self.cursor.row = self.height - 1;
        }
    }
}

impl TextScreen<'static> {
    /// The 80x25 VGA text buffer.
    ///
    /// # Safety
    /// [`VGA_TEXT_BUFFER`](crate::VGA_TEXT_BUFFER) must be mapped and writable,
    /// the adapter must be in a text mode, and no other reference to that
    /// memory may exist for as long as the returned screen lives.
    #[allow(unsafe_code)]
    #[must_use]
    pub unsafe fn vga() -> Self {
        let base = core::ptr::with_exposed_provenance_mut::<u16>(crate::VGA_TEXT_BUFFER);
        // SAFETY: the caller guarantees exclusive access to the mapped buffer.
        let cells = unsafe { core::slice::from_raw_parts_mut(base, SCREEN_WIDTH * SCREEN_HEIGHT) };
        Self {
            cells,
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            cursor: Position::default(),
        }
    }
}

impl ConsoleSink for TextScreen<'_> {
    fn write(&mut self, bytes: &[u8], foreground: Color, background: Color) {
        for &b in bytes {
            self.put_byte(b, foreground, background);
        }
    }
}

impl core::fmt::Debug for TextScreen<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TextScreen")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(screen: &TextScreen<'_>, row: usize) -> String {
        screen.row_text(row).map(char::from).collect()
    }

    #[test]
    fn rejects_bad_geometry() {
        let mut cells = [0u16; 8];
        assert_eq!(
            TextScreen::new(&mut cells, 0, 2).unwrap_err(),
            ScreenError::ZeroSize { width: 0, height: 2 }
        );
        assert_eq!(
            TextScreen::new(&mut cells, 3, 3).unwrap_err(),
            ScreenError::BufferTooSmall {
                width: 3,
                height: 3,
                needed: 9,
                available: 8
            }
        );
    }

    #[test]
    fn writes_advance_the_cursor() {
        let mut cells = [0u16; 8 * 3];
        let mut screen = TextScreen::new(&mut cells, 8, 3).unwrap();
        screen.clear();
        screen.write(b"hi", Color::Yellow, Color::Blue);
        assert_eq!(screen.cursor(), Position { column: 2, row: 0 });
        assert_eq!(screen.cell(0, 0), Some(0x1E68));
        assert_eq!(screen.cell(1, 0), Some(0x1E69));
        assert_eq!(screen.cell(2, 0), Some(BLANK_CELL));
    }

    #[test]
    fn control_bytes() {
        let mut cells = [0u16; 8 * 3];
        let mut screen = TextScreen::new(&mut cells, 8, 3).unwrap();
        screen.clear();
        screen.write_plain(b"ab\rc\n\tx\0y");
        assert_eq!(text(&screen, 0), "cb      ");
        assert_eq!(text(&screen, 1), "    x y ");
        assert_eq!(screen.cursor(), Position { column: 7, row: 1 });
    }

    #[test]
    fn wraps_at_the_last_column() {
        let mut cells = [0u16; 4 * 3];
        let mut screen = TextScreen::new(&mut cells, 4, 3).unwrap();
        screen.clear();
        screen.write_plain(b"abcdef");
        assert_eq!(text(&screen, 0), "abcd");
        assert_eq!(text(&screen, 1), "ef  ");
        assert_eq!(screen.cursor(), Position { column: 2, row: 1 });
    }

    #[test]
    fn scrolls_and_clears_the_bottom_row() {
        let mut cells = [0u16; 4 * 2];
        let mut screen = TextScreen::new(&mut cells, 4, 2).unwrap();
        screen.clear();
        screen.write_plain(b"one\ntwo\nsix");
        assert_eq!(text(&screen, 0), "two ");
        assert_eq!(text(&screen, 1), "six ");
        assert_eq!(screen.cursor(), Position { column: 3, row: 1 });
    }

    #[test]
    fn filling_the_last_cell_scrolls_immediately() {
        let mut cells = [0u16; 2 * 2];
        let mut screen = TextScreen::new(&mut cells, 2, 2).unwrap();
        screen.clear();
        screen.write_plain(b"abcd");
        assert_eq!(text(&screen, 0), "cd");
        assert_eq!(text(&screen, 1), "  ");
        assert_eq!(screen.cursor(), Position { column: 0, row: 1 });
    }

    #[test]
    fn clear_homes_the_cursor() {
        let mut cells = [0u16; 4 * 2];
        let mut screen = TextScreen::new(&mut cells, 4, 2).unwrap();
        screen.write_plain(b"xyz");
        screen.clear();
        assert_eq!(screen.cursor(), Position::default());
        assert!((0..4).all(|c| screen.cell(c, 0) == Some(BLANK_CELL)));
        assert_eq!(screen.cell(4, 0), None);
    }
}
