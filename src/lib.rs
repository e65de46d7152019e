// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gridsketch-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gridsketch and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Gridsketch: widget recognition for Unicode box-drawing sketches.
//!
//! A sketch is a [`Grid`] of characters. [`detect_widgets`] turns it into boxes, buttons, lines
//! and text; [`detect_widgets_with_diagnostics`] additionally heals near misses (a missing
//! corner, an unclosed button, a one-cell gap in a line) without overwriting anything that is
//! already drawn. [`render_widget`] goes the other way.

pub mod detect;
pub mod export;
pub mod grid;
pub mod model;
pub mod query;
pub mod render;

pub use detect::{
    detect_widgets, detect_widgets_with_diagnostics, AppliedRepair, DetectionReport, Detector,
    RepairSettings,
};
pub use grid::Grid;
pub use model::{LineDirection, Rect, Widget, WidgetKind};
pub use query::{widget_at, widgets_inside, widgets_intersecting};
pub use render::{erase_widget, render_widget, RenderError};
