//! Active-item navigation state for menu-like collections.
//!
//! `ActiveItemState` tracks which row of a collection is active and which
//! window of rows is scrolled into view. Navigation wraps at both ends and
//! can skip rows a caller-supplied predicate marks as non-interactive
//! (disabled menu entries).

/// Tracks the active row and scroll offset for a menu-like collection.
pub struct ActiveItemState {
    cursor: usize,
    offset: usize,
    count: usize,
    visible: usize,
}

impl ActiveItemState {
    pub fn new(count: usize, visible: usize) -> Self {
        Self {
            cursor: 0,
            offset: 0,
            count,
            visible,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
    pub fn offset(&self) -> usize {
        self.offset
    }
    pub fn count(&self) -> usize {
        self.count
    }
    pub fn visible(&self) -> usize {
        self.visible
    }

    /// Replace the row count, clamping the cursor and scroll window.
    pub fn set_count(&mut self, count: usize) {
        self.count = count;
        if self.count == 0 {
            self.cursor = 0;
            self.offset = 0;
        } else if self.cursor >= self.count {
            self.cursor = self.count - 1;
        }
        self.ensure_visible();
    }

    /// Resize the scroll window.
    pub fn set_visible(&mut self, visible: usize) {
        self.visible = visible;
        self.ensure_visible();
    }

    /// Move up one row, wrapping from the first row to the last.
    pub fn move_up(&mut self) {
        if self.count == 0 {
            return;
        }
        self.cursor = if self.cursor == 0 {
            self.count - 1
        } else {
            self.cursor - 1
        };
        self.ensure_visible();
    }

    /// Move down one row, wrapping from the last row to the first.
    pub fn move_down(&mut self) {
        if self.count == 0 {
            return;
        }
        self.cursor = if self.cursor + 1 >= self.count {
            0
        } else {
            self.cursor + 1
        };
        self.ensure_visible();
    }

    /// Move up to the nearest row for which `enabled` returns true,
    /// wrapping. The cursor stays put if no row is enabled.
    pub fn move_up_where(&mut self, enabled: impl Fn(usize) -> bool) {
        self.step_where(enabled, |s| s.move_up());
    }

    /// Move down to the nearest row for which `enabled` returns true,
    /// wrapping. The cursor stays put if no row is enabled.
    pub fn move_down_where(&mut self, enabled: impl Fn(usize) -> bool) {
        self.step_where(enabled, |s| s.move_down());
    }

    fn step_where(&mut self, enabled: impl Fn(usize) -> bool, step: impl Fn(&mut Self)) {
        if self.count == 0 {
            return;
        }
        let start = self.cursor;
        step(self);
        // Wrapping means we are back at the start after `count` steps.
        while !enabled(self.cursor) && self.cursor != start {
            step(self);
        }
        if !enabled(self.cursor) {
            self.cursor = start;
            self.ensure_visible();
        }
    }

    /// Place the cursor on the first row for which `enabled` returns true.
    /// Falls back to row 0 when every row is disabled.
    pub fn select_first_where(&mut self, enabled: impl Fn(usize) -> bool) {
        if self.count == 0 {
            return;
        }
        self.cursor = (0..self.count).find(|&i| enabled(i)).unwrap_or(0);
        self.ensure_visible();
    }

    pub fn home(&mut self) {
        self.cursor = 0;
        self.ensure_visible();
    }

    pub fn end(&mut self) {
        if self.count > 0 {
            self.cursor = self.count - 1;
        }
        self.ensure_visible();
    }

    /// Place the cursor on `index`, clamped to the row count.
    pub fn select(&mut self, index: usize) {
        if self.count == 0 {
            return;
        }
        self.cursor = index.min(self.count - 1);
        self.ensure_visible();
    }

    fn ensure_visible(&mut self) {
        if self.count == 0 || self.visible == 0 {
            return;
        }
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + self.visible {
            self.offset = self.cursor + 1 - self.visible;
        }
    }
}
