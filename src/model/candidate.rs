// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gridsketch-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gridsketch and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use smallvec::SmallVec;

use super::widget::{Cell, Widget};

/// Confidence of an exact pattern match.
pub const FULL_CONFIDENCE: f64 = 1.0;

/// A single-cell mismatch between the grid and a candidate's expected pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Defect {
    pub col: usize,
    pub row: usize,
    pub actual: char,
    pub expected: char,
    pub description: String,
}

impl Defect {
    pub fn new(
        col: usize,
        row: usize,
        actual: char,
        expected: char,
        description: impl Into<String>,
    ) -> Self {
        Self {
            col,
            row,
            actual,
            expected,
            description: description.into(),
        }
    }

    pub fn cell(&self) -> Cell {
        (self.col, self.row)
    }
}

impl fmt::Display for Defect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{}) {}: found {:?}, expected {:?}",
            self.col, self.row, self.description, self.actual, self.expected
        )
    }
}

pub type Defects = SmallVec<[Defect; 2]>;

/// A provisional match produced by a plugin scan.
///
/// Only lives for the duration of one detection call.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub widget: Widget,
    /// Cells the widget would occupy once accepted.
    pub cells: Vec<Cell>,
    pub confidence: f64,
    pub defects: Defects,
}

impl Candidate {
    /// An exact match.
    pub fn full(widget: Widget, cells: Vec<Cell>) -> Self {
        Self {
            widget,
            cells,
            confidence: FULL_CONFIDENCE,
            defects: Defects::new(),
        }
    }

    pub fn partial(widget: Widget, cells: Vec<Cell>, confidence: f64, defects: Defects) -> Self {
        Self {
            widget,
            cells,
            confidence: confidence.clamp(0.0, 1.0),
            defects,
        }
    }

    pub fn is_full(&self) -> bool {
        self.confidence >= FULL_CONFIDENCE
    }
}
