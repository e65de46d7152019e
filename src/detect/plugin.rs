// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gridsketch-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gridsketch and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;

use crate::grid::Grid;
use crate::model::{Candidate, Cell, Defect};

/// Read access to the grid being scanned plus the cells already taken by accepted widgets.
///
/// The claim set belongs to one orchestrator run. Plugins only ever see `&DetectContext`, so
/// they can test claims but cannot add to them.
#[derive(Debug, Clone)]
pub struct DetectContext<'g> {
    grid: &'g Grid,
    claimed: BTreeSet<Cell>,
}

impl<'g> DetectContext<'g> {
    pub fn new(grid: &'g Grid) -> Self {
        Self {
            grid,
            claimed: BTreeSet::new(),
        }
    }

    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    pub fn is_claimed(&self, col: usize, row: usize) -> bool {
        self.claimed.contains(&(col, row))
    }

    pub fn any_claimed(&self, cells: &[Cell]) -> bool {
        cells.iter().any(|cell| self.claimed.contains(cell))
    }

    pub fn claim(&mut self, cells: impl IntoIterator<Item = Cell>) {
        self.claimed.extend(cells);
    }

    pub fn claimed_len(&self) -> usize {
        self.claimed.len()
    }
}

/// One widget family: how to find it and how to heal a damaged instance of it.
pub trait WidgetPlugin {
    fn name(&self) -> &'static str;

    /// Scan order key; lower runs first and wins contested cells.
    fn priority(&self) -> u32;

    /// Returns exact matches (confidence 1.0) and, optionally, near misses carrying defects.
    fn detect(&self, ctx: &DetectContext<'_>) -> Vec<Candidate>;

    /// Heals `candidate`'s defects in `grid`, which is a private working copy.
    ///
    /// Must only write into blank cells. Returns `false` when the plugin cannot repair this
    /// candidate, in which case `grid` is left untouched.
    fn repair(&self, grid: &mut Grid, candidate: &Candidate) -> bool {
        let _ = (grid, candidate);
        false
    }
}

/// Writes each defect's expected glyph where the grid is currently blank.
///
/// Occupied cells are left alone and the defect stays unresolved. Returns whether there was
/// anything to repair at all.
pub fn fill_blank_defects(grid: &mut Grid, defects: &[Defect]) -> bool {
    if defects.is_empty() {
        return false;
    }

    for defect in defects {
        if grid.is_blank(defect.col, defect.row) {
            grid.set(defect.col, defect.row, defect.expected);
        }
    }
    true
}
