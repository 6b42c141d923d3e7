//! Index-based cursors over the book and page sequences.
//!
//! Cursors never hold references into the catalog. They store positions and
//! take the current sequence length as an argument, so a catalog reload can
//! never leave them dangling; the caller rebuilds a page cursor after every
//! `open_book`.

use core::ops::Range;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    Backward,
    Forward,
}

/// Current book plus the first row of the visible book-list window.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BookCursor {
    current: usize,
    scroll_offset: usize,
    visible_rows: usize,
}

impl BookCursor {
    pub const fn new(visible_rows: usize) -> Self {
        Self {
            current: 0,
            scroll_offset: 0,
            visible_rows: if visible_rows == 0 { 1 } else { visible_rows },
        }
    }

    pub const fn current(&self) -> usize {
        self.current
    }

    pub const fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub const fn visible_rows(&self) -> usize {
        self.visible_rows
    }

    /// Moves to the neighbouring book, wrapping at both ends.
    ///
    /// Returns `false` without touching anything when fewer than two books
    /// exist.
    pub fn advance(&mut self, direction: Direction, book_count: usize) -> bool {
        if book_count < 2 {
            return false;
        }

        self.current = match direction {
            Direction::Forward => rotate_forward(self.current, book_count),
            Direction::Backward => rotate_backward(self.current, book_count),
        };
        self.rescroll(book_count);
        true
    }

    /// Points the cursor at `index` (clamped to the sequence).
    pub fn select(&mut self, index: usize, book_count: usize) {
        self.current = index.min(book_count.saturating_sub(1));
        self.rescroll(book_count);
    }

    /// Book indices shown in the home-view window.
    pub fn visible_range(&self, book_count: usize) -> Range<usize> {
        let start = self.scroll_offset.min(book_count);
        let end = start.saturating_add(self.visible_rows).min(book_count);
        start..end
    }

    /// Shifts the window the minimal amount that keeps `current` visible.
    fn rescroll(&mut self, book_count: usize) {
        if self.current < self.scroll_offset {
            self.scroll_offset = self.current;
        } else if self.current >= self.scroll_offset + self.visible_rows {
            self.scroll_offset = self.current + 1 - self.visible_rows;
        }

        let max_offset = book_count.saturating_sub(self.visible_rows);
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }
}

/// Position inside the page sequence of the open book.
///
/// Only exists while a book with at least one page is open.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PageCursor {
    index: usize,
    total: usize,
}

impl PageCursor {
    /// Cursor on the head page, or `None` for an empty sequence.
    pub const fn first(total: usize) -> Option<Self> {
        if total == 0 {
            None
        } else {
            Some(Self { index: 0, total })
        }
    }

    pub const fn index(&self) -> usize {
        self.index
    }

    /// 1-based page number.
    pub const fn number(&self) -> usize {
        self.index + 1
    }

    pub const fn total(&self) -> usize {
        self.total
    }

    /// Steps one page; a boundary is a no-op rather than a wrap.
    pub fn advance(&mut self, direction: Direction) -> bool {
        match direction {
            Direction::Forward if self.index + 1 < self.total => {
                self.index += 1;
                true
            }
            Direction::Backward if self.index > 0 => {
                self.index -= 1;
                true
            }
            _ => false,
        }
    }

    /// Jumps to the 1-based page `number`, clamped to `1..=total`.
    pub fn jump_to(&mut self, number: u32) {
        self.index = clamp_page_number(number, self.total) - 1;
    }
}

/// Clamps a 1-based page number into `1..=total` (`total` of zero maps to 1).
pub fn clamp_page_number(number: u32, total: usize) -> usize {
    let number = usize::try_from(number).unwrap_or(usize::MAX);
    number.clamp(1, total.max(1))
}

fn rotate_forward(current: usize, total: usize) -> usize {
    if total == 0 { 0 } else { (current + 1) % total }
}

fn rotate_backward(current: usize, total: usize) -> usize {
    if total == 0 {
        0
    } else if current == 0 {
        total - 1
    } else {
        current - 1
    }
}
