// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gridsketch-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gridsketch and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;

use smallvec::smallvec;

use crate::detect::{fill_blank_defects, DetectContext, WidgetPlugin};
use crate::grid::Grid;
use crate::model::{Candidate, Cell, Defect, LineDirection, Widget};
use crate::render::line_glyph;

pub const LINE_PRIORITY: u32 = 30;
pub const LINE_GAP_CONFIDENCE: f64 = 0.85;
/// Shorter runs are left to the text plugin.
pub const LINE_MIN_LEN: usize = 2;

const DIRECTIONS: [LineDirection; 2] = [LineDirection::Horizontal, LineDirection::Vertical];

/// Runs of `─` along a row or `│` down a column.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinePlugin;

impl WidgetPlugin for LinePlugin {
    fn name(&self) -> &'static str {
        "line"
    }

    fn priority(&self) -> u32 {
        LINE_PRIORITY
    }

    fn detect(&self, ctx: &DetectContext<'_>) -> Vec<Candidate> {
        let mut taken = BTreeSet::<Cell>::new();
        let mut candidates = Vec::<Candidate>::new();

        for direction in DIRECTIONS {
            candidates.extend(full_runs(ctx, Axis(direction), &mut taken));
        }
        for direction in DIRECTIONS {
            candidates.extend(gap_runs(ctx, Axis(direction)));
        }

        candidates
    }

    fn repair(&self, grid: &mut Grid, candidate: &Candidate) -> bool {
        if !matches!(candidate.widget, Widget::Line { .. }) {
            return false;
        }
        fill_blank_defects(grid, &candidate.defects)
    }
}

/// Maps (lane, position) to grid cells: lanes are rows for horizontal lines and columns for
/// vertical ones.
#[derive(Debug, Clone, Copy)]
struct Axis(LineDirection);

impl Axis {
    fn lanes(self, grid: &Grid) -> usize {
        match self.0 {
            LineDirection::Horizontal => grid.height(),
            LineDirection::Vertical => grid.width(),
        }
    }

    fn len(self, grid: &Grid) -> usize {
        match self.0 {
            LineDirection::Horizontal => grid.width(),
            LineDirection::Vertical => grid.height(),
        }
    }

    fn cell(self, lane: usize, pos: usize) -> Cell {
        match self.0 {
            LineDirection::Horizontal => (pos, lane),
            LineDirection::Vertical => (lane, pos),
        }
    }

    fn widget(self, lane: usize, start: usize, len: usize) -> Widget {
        match self.0 {
            LineDirection::Horizontal => Widget::hline(start, lane, len),
            LineDirection::Vertical => Widget::vline(lane, start, len),
        }
    }

    fn run_cells(self, lane: usize, start: usize, end: usize) -> Vec<Cell> {
        (start..end).map(|pos| self.cell(lane, pos)).collect()
    }
}

/// Holds `glyph` and is not claimed by the shared context.
fn is_free_glyph(ctx: &DetectContext<'_>, (col, row): Cell, glyph: char) -> bool {
    ctx.grid().get(col, row) == glyph && !ctx.is_claimed(col, row)
}

fn full_runs(ctx: &DetectContext<'_>, axis: Axis, taken: &mut BTreeSet<Cell>) -> Vec<Candidate> {
    let grid = ctx.grid();
    let glyph = line_glyph(axis.0);
    let len = axis.len(grid);
    let mut candidates = Vec::<Candidate>::new();

    for lane in 0..axis.lanes(grid) {
        let mut pos = 0usize;
        while pos < len {
            let mut end = pos;
            while end < len
                && is_free_glyph(ctx, axis.cell(lane, end), glyph)
                && !taken.contains(&axis.cell(lane, end))
            {
                end += 1;
            }

            if end - pos >= LINE_MIN_LEN {
                let cells = axis.run_cells(lane, pos, end);
                taken.extend(cells.iter().copied());
                candidates.push(Candidate::full(axis.widget(lane, pos, end - pos), cells));
            }
            pos = end.max(pos + 1);
        }
    }

    candidates
}

/// Single blank cells between two free line glyphs, proposed as one merged line.
fn gap_runs(ctx: &DetectContext<'_>, axis: Axis) -> Vec<Candidate> {
    let grid = ctx.grid();
    let glyph = line_glyph(axis.0);
    let len = axis.len(grid);
    let mut candidates = Vec::<Candidate>::new();

    for lane in 0..axis.lanes(grid) {
        for pos in 1..len.saturating_sub(1) {
            let (col, row) = axis.cell(lane, pos);
            if !grid.is_blank(col, row) || ctx.is_claimed(col, row) {
                continue;
            }
            if !is_free_glyph(ctx, axis.cell(lane, pos - 1), glyph)
                || !is_free_glyph(ctx, axis.cell(lane, pos + 1), glyph)
            {
                continue;
            }

            let mut start = pos - 1;
            while start > 0 && is_free_glyph(ctx, axis.cell(lane, start - 1), glyph) {
                start -= 1;
            }
            let mut end = pos + 2;
            while end < len && is_free_glyph(ctx, axis.cell(lane, end), glyph) {
                end += 1;
            }

            let defect = Defect::new(
                col,
                row,
                grid.get(col, row),
                glyph,
                format!("gap in {} line", axis.0.as_str()),
            );
            candidates.push(Candidate::partial(
                axis.widget(lane, start, end - start),
                axis.run_cells(lane, start, end),
                LINE_GAP_CONFIDENCE,
                smallvec![defect],
            ));
        }
    }

    candidates
}
