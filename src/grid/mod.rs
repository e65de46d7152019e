// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gridsketch-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gridsketch and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Fixed-size character grid plus its text form.
//!
//! A grid is the unit every other module works against: detection reads it, repair writes into a
//! private clone of it, rendering stamps widgets onto it. All coordinate access is total:
//! reads outside the grid return a space and writes outside the grid are dropped.

use std::fmt;

use crate::model::Rect;

/// The character stored in an empty cell.
pub const BLANK: char = ' ';

/// A `width × height` buffer of characters with a verbatim leading comment block.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<char>,
    comments: Vec<String>,
}

impl Grid {
    /// Creates a grid filled with spaces.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![BLANK; width.saturating_mul(height)],
            comments: Vec::new(),
        }
    }

    /// Parses the serialized form.
    ///
    /// Leading lines whose first non-space character is `#` become comments and are not rendered
    /// into cells. The comment block ends at the first line that is not a comment. The remaining
    /// lines map 1:1 to rows; the grid is sized to the larger of the given minimum and the
    /// content extent.
    pub fn from_text(text: &str, min_width: usize, min_height: usize) -> Self {
        let mut lines = text.lines().peekable();

        let mut comments = Vec::<String>::new();
        while let Some(line) = lines.peek() {
            if !line.trim_start().starts_with('#') {
                break;
            }
            comments.push((*line).to_owned());
            lines.next();
        }

        let rows = lines.map(|line| line.chars().collect::<Vec<_>>()).collect::<Vec<_>>();
        let content_width = rows.iter().map(Vec::len).max().unwrap_or(0);

        let mut grid = Self::new(min_width.max(content_width), min_height.max(rows.len()));
        grid.comments = comments;
        for (row, chars) in rows.iter().enumerate() {
            for (col, ch) in chars.iter().enumerate() {
                grid.set(col, row, *ch);
            }
        }

        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, col: usize, row: usize) -> bool {
        col < self.width && row < self.height
    }

    /// Comment lines captured from the head of the source text, verbatim.
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    pub fn set_comments(&mut self, comments: Vec<String>) {
        self.comments = comments;
    }

    /// Returns the character at `(col, row)`, or a space when out of bounds.
    pub fn get(&self, col: usize, row: usize) -> char {
        match self.index_of(col, row) {
            Some(idx) => self.cells[idx],
            None => BLANK,
        }
    }

    /// Like [`Grid::get`] but addressed by a signed offset from `(col, row)`.
    ///
    /// Offsets that step off the top or left edge read as blank.
    pub fn get_offset(&self, col: usize, row: usize, dc: isize, dr: isize) -> char {
        match (col.checked_add_signed(dc), row.checked_add_signed(dr)) {
            (Some(col), Some(row)) => self.get(col, row),
            _ => BLANK,
        }
    }

    pub fn is_blank(&self, col: usize, row: usize) -> bool {
        self.get(col, row) == BLANK
    }

    /// Sets the character at `(col, row)`. Out-of-bounds writes are ignored.
    pub fn set(&mut self, col: usize, row: usize, ch: char) {
        if let Some(idx) = self.index_of(col, row) {
            self.cells[idx] = ch;
        }
    }

    /// Writes `text` left-to-right starting at `(col, row)`, clipped at the grid edge.
    pub fn write_str(&mut self, col: usize, row: usize, text: &str) {
        for (offset, ch) in text.chars().enumerate() {
            let Some(col) = col.checked_add(offset) else {
                break;
            };
            if col >= self.width {
                break;
            }
            self.set(col, row, ch);
        }
    }

    /// Fills the part of `rect` that lies inside the grid with `ch`.
    pub fn fill_rect(&mut self, rect: Rect, ch: char) {
        let max_col = rect.right().min(self.width);
        let max_row = rect.bottom().min(self.height);
        for row in rect.row..max_row {
            for col in rect.col..max_col {
                self.set(col, row, ch);
            }
        }
    }

    pub fn clear_rect(&mut self, rect: Rect) {
        self.fill_rect(rect, BLANK);
    }

    /// Returns row `row` as a string, untrimmed. Out-of-range rows are empty.
    pub fn row_text(&self, row: usize) -> String {
        if row >= self.height {
            return String::new();
        }
        let start = row * self.width;
        self.cells[start..start + self.width].iter().collect()
    }

    /// Serializes the grid.
    ///
    /// Comments come first, then each row with trailing spaces stripped. Trailing blank rows are
    /// dropped. The output always ends with exactly one newline, so a blank grid is `"\n"`.
    pub fn to_text(&self) -> String {
        let mut lines = self.comments.clone();

        let mut rows = Vec::<String>::with_capacity(self.height);
        for row in 0..self.height {
            rows.push(self.row_text(row).trim_end_matches(BLANK).to_owned());
        }
        while matches!(rows.last(), Some(line) if line.is_empty()) {
            rows.pop();
        }
        lines.extend(rows);

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    fn index_of(&self, col: usize, row: usize) -> Option<usize> {
        if !self.in_bounds(col, row) {
            return None;
        }
        Some((row * self.width) + col)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
