// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gridsketch-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gridsketch and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Stamping widgets onto a grid.
//!
//! Rendering is the inverse of detection: every widget drawn here is recognized again by the
//! built-in plugins (single-word text and box labels aside, which split into one text widget per
//! word). Renderers never read neighbouring cells; callers clear the footprint first when
//! overwriting.

use std::fmt;

use crate::grid::{Grid, BLANK};
use crate::model::{LineDirection, Rect, Widget};

pub const UNICODE_BOX_HORIZONTAL: char = '─';
pub const UNICODE_BOX_VERTICAL: char = '│';
pub const UNICODE_BOX_TOP_LEFT: char = '┌';
pub const UNICODE_BOX_TOP_RIGHT: char = '┐';
pub const UNICODE_BOX_BOTTOM_LEFT: char = '└';
pub const UNICODE_BOX_BOTTOM_RIGHT: char = '┘';

pub const BUTTON_OPEN: &str = "[ ";
pub const BUTTON_CLOSE: &str = " ]";

/// Smallest box that still has an interior.
pub const BOX_MIN_SIZE: usize = 3;

pub fn line_glyph(direction: LineDirection) -> char {
    match direction {
        LineDirection::Horizontal => UNICODE_BOX_HORIZONTAL,
        LineDirection::Vertical => UNICODE_BOX_VERTICAL,
    }
}

/// The glyph a box outline expects at `(col, row)`, or `None` for interior/outside cells.
pub fn box_glyph_at(rect: &Rect, col: usize, row: usize) -> Option<char> {
    if rect.is_empty() || !rect.contains(col, row) {
        return None;
    }

    let last_col = rect.right() - 1;
    let last_row = rect.bottom() - 1;
    let glyph = match (col == rect.col, col == last_col, row == rect.row, row == last_row) {
        (true, _, true, _) => UNICODE_BOX_TOP_LEFT,
        (_, true, true, _) => UNICODE_BOX_TOP_RIGHT,
        (true, _, _, true) => UNICODE_BOX_BOTTOM_LEFT,
        (_, true, _, true) => UNICODE_BOX_BOTTOM_RIGHT,
        (_, _, true, _) | (_, _, _, true) => UNICODE_BOX_HORIZONTAL,
        (true, _, _, _) | (_, true, _, _) => UNICODE_BOX_VERTICAL,
        _ => return None,
    };
    Some(glyph)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    EmptyRect { rect: Rect },
    BoxTooSmall { rect: Rect },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyRect { rect } => write!(f, "widget rect has no area: {rect}"),
            Self::BoxTooSmall { rect } => write!(
                f,
                "box rect {rect} is smaller than {BOX_MIN_SIZE}x{BOX_MIN_SIZE}"
            ),
        }
    }
}

impl std::error::Error for RenderError {}

/// Stamps `widget`'s canonical pattern onto `grid`.
///
/// Cells outside the grid are clipped. Widget data that detection could never have produced
/// (an empty rect, a box under 3×3) is rejected before anything is written.
pub fn render_widget(grid: &mut Grid, widget: &Widget) -> Result<(), RenderError> {
    let rect = widget.rect();
    if rect.is_empty() {
        return Err(RenderError::EmptyRect { rect });
    }

    match widget {
        Widget::Box { rect, label } => {
            if rect.width < BOX_MIN_SIZE || rect.height < BOX_MIN_SIZE {
                return Err(RenderError::BoxTooSmall { rect: *rect });
            }
            render_box(grid, rect, label.as_deref());
        }
        Widget::Button { rect, label } => render_button(grid, rect, label),
        Widget::Line { rect, direction } => render_line(grid, rect, *direction),
        Widget::Text { rect, content } => grid.write_str(rect.col, rect.row, content),
    }

    Ok(())
}

/// Blanks the cells `widget` occupies.
///
/// For boxes only the outline is cleared so that widgets drawn inside survive.
pub fn erase_widget(grid: &mut Grid, widget: &Widget) {
    match widget {
        Widget::Box { rect, .. } => {
            for (col, row) in rect.border_cells() {
                grid.set(col, row, BLANK);
            }
        }
        _ => grid.clear_rect(widget.rect()),
    }
}

fn render_box(grid: &mut Grid, rect: &Rect, label: Option<&str>) {
    for (col, row) in rect.border_cells() {
        if let Some(glyph) = box_glyph_at(rect, col, row) {
            grid.set(col, row, glyph);
        }
    }

    let Some(label) = label else {
        return;
    };

    let inner = rect.width - 2;
    let label = label.chars().take(inner).collect::<String>();
    let len = label.chars().count();
    let col = rect.col + 1 + (inner - len) / 2;
    let row = rect.row + rect.height / 2;
    grid.write_str(col, row, &label);
}

fn render_button(grid: &mut Grid, rect: &Rect, label: &str) {
    let len = label.chars().count();
    let min_width = len + BUTTON_OPEN.len() + BUTTON_CLOSE.len();
    let padding = rect.width.max(min_width) - min_width;
    let left = padding / 2;
    let right = padding - left;

    let mut text = String::with_capacity(min_width + padding);
    text.push_str(BUTTON_OPEN);
    text.extend(std::iter::repeat(BLANK).take(left));
    text.push_str(label);
    text.extend(std::iter::repeat(BLANK).take(right));
    text.push_str(BUTTON_CLOSE);
    grid.write_str(rect.col, rect.row, &text);
}

fn render_line(grid: &mut Grid, rect: &Rect, direction: LineDirection) {
    let glyph = line_glyph(direction);
    match direction {
        LineDirection::Horizontal => {
            for col in rect.col..rect.right() {
                grid.set(col, rect.row, glyph);
            }
        }
        LineDirection::Vertical => {
            for row in rect.row..rect.bottom() {
                grid.set(rect.col, row, glyph);
            }
        }
    }
}
