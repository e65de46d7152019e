// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gridsketch-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gridsketch and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use gridsketch::grid::BLANK;
use gridsketch::{render_widget, Grid, Rect, Widget};

const PANEL_WIDTH: usize = 22;
const PANEL_HEIGHT: usize = 7;
const PANEL_GAP: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SketchParams {
    pub panels_x: usize,
    pub panels_y: usize,
    /// Every n-th panel loses its bottom-right corner and gets a gap in its divider.
    /// `0` keeps every panel intact.
    pub damage_every: usize,
}

impl SketchParams {
    pub const fn new(panels_x: usize, panels_y: usize, damage_every: usize) -> Self {
        Self {
            panels_x,
            panels_y,
            damage_every,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Small,
    MediumDamaged,
    LargeDamaged,
}

impl Case {
    pub const fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::MediumDamaged => "medium_damaged",
            Self::LargeDamaged => "large_damaged",
        }
    }

    pub const fn params(self) -> SketchParams {
        match self {
            Self::Small => SketchParams::new(2, 2, 0),
            Self::MediumDamaged => SketchParams::new(4, 6, 3),
            Self::LargeDamaged => SketchParams::new(8, 16, 2),
        }
    }
}

/// Grid of identical form panels: a box holding a title, two buttons, a divider and a caption.
pub fn sketch(params: SketchParams) -> Grid {
    let width = params.panels_x * (PANEL_WIDTH + PANEL_GAP);
    let height = params.panels_y * (PANEL_HEIGHT + 1);
    let mut grid = Grid::new(width, height);

    let mut index = 0usize;
    for py in 0..params.panels_y {
        for px in 0..params.panels_x {
            let col = px * (PANEL_WIDTH + PANEL_GAP);
            let row = py * (PANEL_HEIGHT + 1);
            let outline = Rect::new(col, row, PANEL_WIDTH, PANEL_HEIGHT);

            for widget in [
                Widget::boxed(outline),
                Widget::text(col + 2, row + 1, format!("Panel_{index:04}")),
                Widget::button(col + 2, row + 2, "OK"),
                Widget::button(col + 9, row + 2, "Cancel"),
                Widget::hline(col + 2, row + 4, PANEL_WIDTH - 4),
                Widget::text(col + 2, row + 5, "caption"),
            ] {
                render_widget(&mut grid, &widget).expect("render panel widget");
            }

            if params.damage_every > 0 && index % params.damage_every == 0 {
                grid.set(outline.right() - 1, outline.bottom() - 1, BLANK);
                grid.set(col + 8, row + 4, BLANK);
            }
            index += 1;
        }
    }

    grid
}

pub fn fixture(case: Case) -> Grid {
    sketch(case.params())
}
