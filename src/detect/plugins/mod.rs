// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gridsketch-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gridsketch and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Built-in widget families.

mod boxes;
mod button;
mod line;
mod text;

pub use boxes::{
    BoxPlugin, BOX_MIN_PARTIAL_CONFIDENCE, BOX_OCCUPIED_DEFECT_PENALTY, BOX_PRIORITY,
};
pub use button::{ButtonPlugin, BUTTON_LOOKAHEAD, BUTTON_PARTIAL_CONFIDENCE, BUTTON_PRIORITY};
pub use line::{LinePlugin, LINE_GAP_CONFIDENCE, LINE_MIN_LEN, LINE_PRIORITY};
pub use text::{TextPlugin, TEXT_PRIORITY};

use super::WidgetPlugin;

/// Box, button, line, text, in that priority order.
pub fn builtin_plugins() -> Vec<Box<dyn WidgetPlugin>> {
    vec![
        Box::new(BoxPlugin),
        Box::new(ButtonPlugin),
        Box::new(LinePlugin),
        Box::new(TextPlugin),
    ]
}
