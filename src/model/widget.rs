// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gridsketch-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gridsketch and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use smol_str::SmolStr;

/// A grid cell address, `(col, row)`.
pub type Cell = (usize, usize);

/// A half-open rectangle: columns `[col, col + width)`, rows `[row, row + height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rect {
    pub col: usize,
    pub row: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    pub const fn new(col: usize, row: usize, width: usize, height: usize) -> Self {
        Self {
            col,
            row,
            width,
            height,
        }
    }

    /// First column past the right edge.
    pub fn right(&self) -> usize {
        self.col.saturating_add(self.width)
    }

    /// First row past the bottom edge.
    pub fn bottom(&self) -> usize {
        self.row.saturating_add(self.height)
    }

    pub fn area(&self) -> usize {
        self.width.saturating_mul(self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn contains(&self, col: usize, row: usize) -> bool {
        col >= self.col && col < self.right() && row >= self.row && row < self.bottom()
    }

    /// True when `other` lies inside `self` without touching any of its four sides.
    pub fn strictly_contains(&self, other: &Rect) -> bool {
        other.col > self.col
            && other.row > self.row
            && other.right() < self.right()
            && other.bottom() < self.bottom()
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.col < other.right()
            && other.col < self.right()
            && self.row < other.bottom()
            && other.row < self.bottom()
    }

    /// Every cell of the rect, row-major.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (self.row..self.bottom()).flat_map(move |row| (self.col..self.right()).map(move |col| (col, row)))
    }

    /// The outline cells (top and bottom rows, left and right columns), each once.
    pub fn border_cells(&self) -> Vec<Cell> {
        if self.is_empty() {
            return Vec::new();
        }

        let last_col = self.right() - 1;
        let last_row = self.bottom() - 1;
        let mut cells = Vec::<Cell>::with_capacity(2 * (self.width + self.height));
        for col in self.col..self.right() {
            cells.push((col, self.row));
        }
        for row in (self.row + 1)..last_row {
            cells.push((self.col, row));
            if last_col != self.col {
                cells.push((last_col, row));
            }
        }
        if last_row != self.row {
            for col in self.col..self.right() {
                cells.push((col, last_row));
            }
        }
        cells
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{} {}x{}", self.col, self.row, self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineDirection {
    Horizontal,
    Vertical,
}

impl LineDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WidgetKind {
    Box,
    Button,
    Line,
    Text,
}

impl WidgetKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Box => "box",
            Self::Button => "button",
            Self::Line => "line",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recognized (or to-be-rendered) visual element.
///
/// Widgets are values: editing operations return a modified copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Widget {
    /// A `┌─┐ │ │ └─┘` outline. The label is only used when rendering; detection never sets it.
    Box { rect: Rect, label: Option<SmolStr> },
    Button { rect: Rect, label: SmolStr },
    Line { rect: Rect, direction: LineDirection },
    Text { rect: Rect, content: SmolStr },
}

impl Widget {
    pub fn boxed(rect: Rect) -> Self {
        Self::Box { rect, label: None }
    }

    pub fn labeled_box(rect: Rect, label: impl Into<SmolStr>) -> Self {
        Self::Box {
            rect,
            label: Some(label.into()),
        }
    }

    /// A button sized to fit `label` exactly: `[ label ]`.
    pub fn button(col: usize, row: usize, label: impl Into<SmolStr>) -> Self {
        let label = label.into();
        let width = label.chars().count() + 4;
        Self::Button {
            rect: Rect::new(col, row, width, 1),
            label,
        }
    }

    pub fn hline(col: usize, row: usize, len: usize) -> Self {
        Self::Line {
            rect: Rect::new(col, row, len, 1),
            direction: LineDirection::Horizontal,
        }
    }

    pub fn vline(col: usize, row: usize, len: usize) -> Self {
        Self::Line {
            rect: Rect::new(col, row, 1, len),
            direction: LineDirection::Vertical,
        }
    }

    pub fn text(col: usize, row: usize, content: impl Into<SmolStr>) -> Self {
        let content = content.into();
        let width = content.chars().count();
        Self::Text {
            rect: Rect::new(col, row, width, 1),
            content,
        }
    }

    pub fn kind(&self) -> WidgetKind {
        match self {
            Self::Box { .. } => WidgetKind::Box,
            Self::Button { .. } => WidgetKind::Button,
            Self::Line { .. } => WidgetKind::Line,
            Self::Text { .. } => WidgetKind::Text,
        }
    }

    pub fn rect(&self) -> Rect {
        match self {
            Self::Box { rect, .. }
            | Self::Button { rect, .. }
            | Self::Line { rect, .. }
            | Self::Text { rect, .. } => *rect,
        }
    }

    /// Button label, box label, or text content.
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Box { label, .. } => label.as_deref(),
            Self::Button { label, .. } => Some(label.as_str()),
            Self::Text { content, .. } => Some(content.as_str()),
            Self::Line { .. } => None,
        }
    }

    pub fn with_rect(&self, rect: Rect) -> Self {
        let mut out = self.clone();
        match &mut out {
            Self::Box { rect: r, .. }
            | Self::Button { rect: r, .. }
            | Self::Line { rect: r, .. }
            | Self::Text { rect: r, .. } => *r = rect,
        }
        out
    }

    pub fn moved_to(&self, col: usize, row: usize) -> Self {
        let rect = self.rect();
        self.with_rect(Rect { col, row, ..rect })
    }

    /// Replaces the label (box, button) or content (text).
    ///
    /// Buttons and text are resized to fit the new value; boxes and lines keep their rect.
    /// Lines have no label and are returned unchanged.
    pub fn with_label(&self, label: impl Into<SmolStr>) -> Self {
        let label = label.into();
        match self {
            Self::Box { rect, .. } => Self::labeled_box(*rect, label),
            Self::Button { rect, .. } => Self::button(rect.col, rect.row, label),
            Self::Text { rect, .. } => Self::text(rect.col, rect.row, label),
            Self::Line { .. } => self.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{LineDirection, Rect, Widget, WidgetKind};

    #[test]
    fn strict_containment_excludes_touching_sides() {
        let outer = Rect::new(0, 0, 10, 5);
        assert!(outer.strictly_contains(&Rect::new(1, 1, 8, 3)));
        assert!(!outer.strictly_contains(&Rect::new(0, 1, 3, 1)));
        assert!(!outer.strictly_contains(&Rect::new(1, 1, 9, 1)));
        assert!(!outer.strictly_contains(&Rect::new(1, 4, 2, 1)));
        assert!(!outer.strictly_contains(&outer));
    }

    #[test]
    fn intersects_is_half_open() {
        let a = Rect::new(0, 0, 3, 3);
        assert!(a.intersects(&Rect::new(2, 2, 3, 3)));
        assert!(!a.intersects(&Rect::new(3, 0, 1, 1)));
        assert!(!a.intersects(&Rect::new(0, 0, 0, 4)));
    }

    #[test]
    fn border_cells_cover_outline_once() {
        let rect = Rect::new(1, 1, 4, 3);
        let cells = rect.border_cells();
        assert_eq!(cells.len(), 10);
        assert!(!cells.contains(&(2, 2)));
        assert!(cells.contains(&(4, 3)));

        assert_eq!(Rect::new(0, 0, 1, 1).border_cells(), vec![(0, 0)]);
        assert_eq!(Rect::new(0, 0, 3, 1).border_cells().len(), 3);
    }

    #[test]
    fn constructors_derive_rect_from_content() {
        assert_eq!(Widget::button(2, 1, "OK").rect(), Rect::new(2, 1, 6, 1));
        assert_eq!(Widget::text(0, 0, "héllo").rect(), Rect::new(0, 0, 5, 1));
        assert_eq!(Widget::vline(3, 0, 4).rect(), Rect::new(3, 0, 1, 4));
        assert_eq!(Widget::hline(0, 0, 4).kind(), WidgetKind::Line);
    }

    #[test]
    fn edits_return_modified_copies() {
        let button = Widget::button(0, 0, "OK");
        let renamed = button.with_label("Cancel");
        assert_eq!(button.label(), Some("OK"));
        assert_eq!(renamed.rect(), Rect::new(0, 0, 10, 1));

        let moved = renamed.moved_to(4, 2);
        assert_eq!(moved.rect(), Rect::new(4, 2, 10, 1));

        let line = Widget::hline(0, 0, 3);
        assert_eq!(
            line.with_label("x"),
            Widget::Line {
                rect: Rect::new(0, 0, 3, 1),
                direction: LineDirection::Horizontal
            }
        );
    }
}
