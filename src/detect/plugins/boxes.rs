// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gridsketch-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gridsketch and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;

use crate::detect::{fill_blank_defects, DetectContext, WidgetPlugin};
use crate::grid::{Grid, BLANK};
use crate::model::{Candidate, Cell, Defect, Defects, Rect, Widget};
use crate::render::{
    box_glyph_at, BOX_MIN_SIZE, UNICODE_BOX_BOTTOM_LEFT, UNICODE_BOX_BOTTOM_RIGHT,
    UNICODE_BOX_HORIZONTAL, UNICODE_BOX_TOP_LEFT, UNICODE_BOX_TOP_RIGHT, UNICODE_BOX_VERTICAL,
};

pub const BOX_PRIORITY: u32 = 10;
/// Inferred outlines scoring below this are not proposed.
pub const BOX_MIN_PARTIAL_CONFIDENCE: f64 = 0.5;
/// Subtracted per mismatching cell that holds some other character.
pub const BOX_OCCUPIED_DEFECT_PENALTY: f64 = 0.1;

/// `┌─┐ │ │ └─┘` outlines, at least 3×3.
///
/// Only the outline is claimed, so widgets drawn inside stay detectable.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoxPlugin;

impl WidgetPlugin for BoxPlugin {
    fn name(&self) -> &'static str {
        "box"
    }

    fn priority(&self) -> u32 {
        BOX_PRIORITY
    }

    fn detect(&self, ctx: &DetectContext<'_>) -> Vec<Candidate> {
        let grid = ctx.grid();
        let mut seen = BTreeSet::<Rect>::new();
        let mut outlined = BTreeSet::<Cell>::new();
        let mut candidates = Vec::<Candidate>::new();

        for row in 0..grid.height() {
            for col in 0..grid.width() {
                if grid.get(col, row) != UNICODE_BOX_TOP_LEFT || ctx.is_claimed(col, row) {
                    continue;
                }
                let Some(rect) = trace_outline(grid, col, row) else {
                    continue;
                };
                if !seen.insert(rect) {
                    continue;
                }
                let cells = rect.border_cells();
                outlined.extend(cells.iter().copied());
                candidates.push(Candidate::full(Widget::boxed(rect), cells));
            }
        }

        // Near misses, inferred from corners that no exact outline accounts for.
        for row in 0..grid.height() {
            for col in 0..grid.width() {
                let Some(corner) = Corner::from_glyph(grid.get(col, row)) else {
                    continue;
                };
                if outlined.contains(&(col, row)) || ctx.is_claimed(col, row) {
                    continue;
                }
                let Some(rect) = infer_rect(grid, col, row, corner) else {
                    continue;
                };
                if !seen.insert(rect) {
                    continue;
                }
                if let Some(candidate) = score_outline(grid, rect) {
                    candidates.push(candidate);
                }
            }
        }

        candidates
    }

    fn repair(&self, grid: &mut Grid, candidate: &Candidate) -> bool {
        if !matches!(candidate.widget, Widget::Box { .. }) {
            return false;
        }
        fill_blank_defects(grid, &candidate.defects)
    }
}

/// Follows an exact outline from its top-left corner.
fn trace_outline(grid: &Grid, col: usize, row: usize) -> Option<Rect> {
    let mut right = col + 1;
    while grid.get(right, row) == UNICODE_BOX_HORIZONTAL {
        right += 1;
    }
    if grid.get(right, row) != UNICODE_BOX_TOP_RIGHT || right - col + 1 < BOX_MIN_SIZE {
        return None;
    }

    let mut bottom = row + 1;
    while grid.get(col, bottom) == UNICODE_BOX_VERTICAL {
        bottom += 1;
    }
    if grid.get(col, bottom) != UNICODE_BOX_BOTTOM_LEFT || bottom - row + 1 < BOX_MIN_SIZE {
        return None;
    }

    let rect = Rect::new(col, row, right - col + 1, bottom - row + 1);
    let exact = rect
        .border_cells()
        .into_iter()
        .all(|(c, r)| box_glyph_at(&rect, c, r) == Some(grid.get(c, r)));
    exact.then_some(rect)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            UNICODE_BOX_TOP_LEFT => Some(Self::TopLeft),
            UNICODE_BOX_TOP_RIGHT => Some(Self::TopRight),
            UNICODE_BOX_BOTTOM_LEFT => Some(Self::BottomLeft),
            UNICODE_BOX_BOTTOM_RIGHT => Some(Self::BottomRight),
            _ => None,
        }
    }

    /// Horizontal step toward the opposite side, and the corner expected there.
    fn horizontal(self) -> (isize, char) {
        match self {
            Self::TopLeft => (1, UNICODE_BOX_TOP_RIGHT),
            Self::TopRight => (-1, UNICODE_BOX_TOP_LEFT),
            Self::BottomLeft => (1, UNICODE_BOX_BOTTOM_RIGHT),
            Self::BottomRight => (-1, UNICODE_BOX_BOTTOM_LEFT),
        }
    }

    /// Vertical step toward the opposite side, and the corner expected there.
    fn vertical(self) -> (isize, char) {
        match self {
            Self::TopLeft => (1, UNICODE_BOX_BOTTOM_LEFT),
            Self::TopRight => (1, UNICODE_BOX_BOTTOM_RIGHT),
            Self::BottomLeft => (-1, UNICODE_BOX_TOP_LEFT),
            Self::BottomRight => (-1, UNICODE_BOX_TOP_RIGHT),
        }
    }
}

/// Guesses the full outline a lone corner belongs to from its two adjacent edges.
fn infer_rect(grid: &Grid, col: usize, row: usize, corner: Corner) -> Option<Rect> {
    let (dc, far_h) = corner.horizontal();
    let (dr, far_v) = corner.vertical();

    let across = edge_extent(grid, col, row, (dc, 0), UNICODE_BOX_HORIZONTAL, far_h)?;
    let down = edge_extent(grid, col, row, (0, dr), UNICODE_BOX_VERTICAL, far_v)?;

    let left = if dc > 0 { col } else { col.checked_sub(across)? };
    let top = if dr > 0 { row } else { row.checked_sub(down)? };
    let rect = Rect::new(left, top, across + 1, down + 1);

    if rect.width < BOX_MIN_SIZE || rect.height < BOX_MIN_SIZE {
        return None;
    }
    if rect.right() > grid.width() || rect.bottom() > grid.height() {
        return None;
    }
    Some(rect)
}

/// Distance from `(col, row)` to where the far corner of an edge is, or should be.
///
/// Walks `step` over `edge` glyphs and stops on `far` (the corner is there) or on anything else
/// (the corner is assumed right after the last edge glyph). A single blank cell is bridged when
/// the cell beyond it continues the edge or is the far corner.
fn edge_extent(
    grid: &Grid,
    col: usize,
    row: usize,
    step: (isize, isize),
    edge: char,
    far: char,
) -> Option<usize> {
    let at = |distance: usize| -> char {
        let distance = isize::try_from(distance).unwrap_or(isize::MAX);
        grid.get_offset(
            col,
            row,
            step.0.saturating_mul(distance),
            step.1.saturating_mul(distance),
        )
    };

    let limit = grid.width().max(grid.height());
    let mut gap_used = false;
    let mut last_edge = 0usize;
    let mut distance = 1usize;

    while distance <= limit {
        let ch = at(distance);
        if ch == far {
            return Some(distance);
        }
        if ch == edge {
            last_edge = distance;
        } else if ch == BLANK && !gap_used && matches!(at(distance + 1), c if c == edge || c == far)
        {
            gap_used = true;
        } else {
            break;
        }
        distance += 1;
    }

    (last_edge > 0).then_some(last_edge + 1)
}

fn score_outline(grid: &Grid, rect: Rect) -> Option<Candidate> {
    let cells = rect.border_cells();
    let total = cells.len();

    let mut present = 0usize;
    let mut occupied = 0usize;
    let mut defects = Defects::new();
    for &(col, row) in &cells {
        let Some(expected) = box_glyph_at(&rect, col, row) else {
            continue;
        };
        let actual = grid.get(col, row);
        if actual == expected {
            present += 1;
            continue;
        }

        let part = outline_part(&rect, col, row);
        let description = if actual == BLANK {
            format!("missing {part}")
        } else {
            occupied += 1;
            format!("{part} holds {actual:?}")
        };
        defects.push(Defect::new(col, row, actual, expected, description));
    }

    if defects.is_empty() || total == 0 {
        return None;
    }

    let confidence =
        present as f64 / total as f64 - occupied as f64 * BOX_OCCUPIED_DEFECT_PENALTY;
    if confidence < BOX_MIN_PARTIAL_CONFIDENCE {
        return None;
    }

    Some(Candidate::partial(Widget::boxed(rect), cells, confidence, defects))
}

fn outline_part(rect: &Rect, col: usize, row: usize) -> &'static str {
    let left = col == rect.col;
    let right = col + 1 == rect.right();
    let top = row == rect.row;
    let bottom = row + 1 == rect.bottom();
    match (left, right, top, bottom) {
        (true, _, true, _) => "top-left corner",
        (_, true, true, _) => "top-right corner",
        (true, _, _, true) => "bottom-left corner",
        (_, true, _, true) => "bottom-right corner",
        (_, _, true, _) => "top edge",
        (_, _, _, true) => "bottom edge",
        (true, _, _, _) => "left edge",
        _ => "right edge",
    }
}

#[cfg(test)]
mod tests {
    use super::{edge_extent, infer_rect, BoxPlugin, Corner};
    use crate::detect::{DetectContext, WidgetPlugin};
    use crate::grid::Grid;
    use crate::model::{Rect, Widget};

    fn grid(text: &str) -> Grid {
        Grid::from_text(text, 0, 0)
    }

    #[test]
    fn exact_outline_is_full_confidence() {
        let g = grid("┌──┐\n│  │\n└──┘\n");
        let candidates = BoxPlugin.detect(&DetectContext::new(&g));
        assert_eq!(candidates.len(), 1);
        assert!(candidates[0].is_full());
        assert_eq!(candidates[0].widget, Widget::boxed(Rect::new(0, 0, 4, 3)));
        assert_eq!(candidates[0].cells.len(), 10);
    }

    #[test]
    fn two_wide_outline_is_not_a_box() {
        let g = grid("┌┐\n││\n└┘\n");
        assert!(BoxPlugin.detect(&DetectContext::new(&g)).is_empty());
    }

    #[test]
    fn edge_extent_bridges_one_gap() {
        let g = grid("┌─ ─┐\n");
        assert_eq!(edge_extent(&g, 0, 0, (1, 0), '─', '┐'), Some(4));

        let g = grid("┌─  ─┐\n");
        assert_eq!(edge_extent(&g, 0, 0, (1, 0), '─', '┐'), Some(2));

        let g = grid("┌ ┐\n");
        assert_eq!(edge_extent(&g, 0, 0, (1, 0), '─', '┐'), Some(2));

        let g = grid("┌ \n");
        assert_eq!(edge_extent(&g, 0, 0, (1, 0), '─', '┐'), None);
    }

    #[test]
    fn infers_rect_from_any_corner() {
        let g = grid("┌──┐\n│  │\n└──\n");
        let expected = Some(Rect::new(0, 0, 4, 3));
        assert_eq!(infer_rect(&g, 0, 0, Corner::TopLeft), expected);
        assert_eq!(infer_rect(&g, 3, 0, Corner::TopRight), expected);
        assert_eq!(infer_rect(&g, 0, 2, Corner::BottomLeft), expected);
    }

    #[test]
    fn missing_corner_is_a_partial_candidate() {
        let g = grid("┌──┐\n│  │\n└──\n");
        let candidates = BoxPlugin.detect(&DetectContext::new(&g));
        assert_eq!(candidates.len(), 1);
        let candidate = &candidates[0];
        assert!((candidate.confidence - 0.9).abs() < 1e-9);
        assert_eq!(candidate.defects.len(), 1);
        assert_eq!(candidate.defects[0].cell(), (3, 2));
        assert_eq!(candidate.defects[0].expected, '┘');
        assert_eq!(candidate.defects[0].description, "missing bottom-right corner");
    }

    #[test]
    fn occupied_defects_are_penalised() {
        let g = grid("┌──X\n│  │\n└──┘\n");
        let candidates = BoxPlugin.detect(&DetectContext::new(&g));
        assert_eq!(candidates.len(), 1);
        assert!((candidates[0].confidence - 0.8).abs() < 1e-9);
        assert_eq!(candidates[0].defects[0].actual, 'X');
    }

    #[test]
    fn weak_outlines_are_not_proposed() {
        let g = grid("┌──   \n\n\n      \n");
        assert!(BoxPlugin.detect(&DetectContext::new(&g)).is_empty());
    }

    #[test]
    fn repair_fills_only_blank_cells() {
        let mut g = grid("┌──X\n│  │\n└── \n");
        let candidates = BoxPlugin.detect(&DetectContext::new(&g));
        let candidate = candidates.first().expect("candidate");
        assert_eq!(candidate.defects.len(), 2);
        assert!(BoxPlugin.repair(&mut g, candidate));
        assert_eq!(g.to_text(), "┌──X\n│  │\n└──┘\n");
    }
}
