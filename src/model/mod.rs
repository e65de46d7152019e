// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gridsketch-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gridsketch and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core value types.
//!
//! Widgets are what detection produces and rendering consumes; candidates and defects only exist
//! while a detection call is running.

pub mod candidate;
pub mod widget;

pub use candidate::{Candidate, Defect, Defects, FULL_CONFIDENCE};
pub use widget::{Cell, LineDirection, Rect, Widget, WidgetKind};
