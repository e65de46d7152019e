// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gridsketch-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gridsketch and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Spatial lookups over a detected widget list.

use crate::model::{Rect, Widget};

/// The smallest widget under `(col, row)`; the first in list order wins ties.
///
/// Clicking inside a nested box therefore selects the innermost widget under the cursor.
pub fn widget_at(widgets: &[Widget], col: usize, row: usize) -> Option<&Widget> {
    let mut best: Option<&Widget> = None;
    for widget in widgets {
        let rect = widget.rect();
        if !rect.contains(col, row) {
            continue;
        }
        match best {
            Some(current) if current.rect().area() <= rect.area() => {}
            _ => best = Some(widget),
        }
    }
    best
}

/// Widgets lying strictly inside `container` (no shared edge), in list order.
pub fn widgets_inside<'a>(widgets: &'a [Widget], container: &Rect) -> Vec<&'a Widget> {
    widgets
        .iter()
        .filter(|widget| container.strictly_contains(&widget.rect()))
        .collect()
}

pub fn widgets_intersecting<'a>(widgets: &'a [Widget], area: &Rect) -> Vec<&'a Widget> {
    widgets.iter().filter(|widget| area.intersects(&widget.rect())).collect()
}
