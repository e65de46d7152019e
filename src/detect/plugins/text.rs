// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gridsketch-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gridsketch and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::detect::{DetectContext, WidgetPlugin};
use crate::model::{Candidate, Widget};

pub const TEXT_PRIORITY: u32 = 40;

/// Catch-all: every maximal run of unclaimed, non-blank cells in a row is one text widget.
///
/// Spaces end a run, so `hello world` is two widgets.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextPlugin;

impl WidgetPlugin for TextPlugin {
    fn name(&self) -> &'static str {
        "text"
    }

    fn priority(&self) -> u32 {
        TEXT_PRIORITY
    }

    fn detect(&self, ctx: &DetectContext<'_>) -> Vec<Candidate> {
        let grid = ctx.grid();
        let is_token = |col: usize, row: usize| !grid.is_blank(col, row) && !ctx.is_claimed(col, row);
        let mut candidates = Vec::<Candidate>::new();

        for row in 0..grid.height() {
            let mut col = 0usize;
            while col < grid.width() {
                if !is_token(col, row) {
                    col += 1;
                    continue;
                }

                let start = col;
                let mut content = String::new();
                while col < grid.width() && is_token(col, row) {
                    content.push(grid.get(col, row));
                    col += 1;
                }

                let cells = (start..col).map(|c| (c, row)).collect();
                candidates.push(Candidate::full(Widget::text(start, row, content), cells));
            }
        }

        candidates
    }
}
