// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gridsketch-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gridsketch and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Widget detection and repair.
//!
//! A [`Detector`] runs its plugins in ascending priority order against a shared claim set: once
//! a widget is accepted its cells are claimed and no later plugin may reuse them. With repair
//! enabled a first pass lets plugins heal near misses on a private copy of the grid, and the
//! final detection pass runs on that copy.
//!
//! Detection is total. A grid that matches nothing yields text widgets for whatever non-blank
//! runs it contains and nothing else; repairs that cannot be completed are skipped silently.

use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::grid::Grid;
use crate::model::{Cell, Defect, Widget, WidgetKind};

mod plugin;
pub mod plugins;

pub use plugin::{fill_blank_defects, DetectContext, WidgetPlugin};
pub use plugins::{builtin_plugins, BoxPlugin, ButtonPlugin, LinePlugin, TextPlugin};

/// Minimum candidate confidence for a repair to be attempted.
pub const DEFAULT_REPAIR_THRESHOLD: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RepairSettings {
    /// Run the repair pass before detection.
    pub enabled: bool,
    /// Candidates below this confidence are dropped without repair.
    pub threshold: f64,
}

impl Default for RepairSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            threshold: DEFAULT_REPAIR_THRESHOLD,
        }
    }
}

impl RepairSettings {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Sets the repair threshold, clamped to `[0, 1]`. NaN falls back to the default.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = if threshold.is_nan() {
            DEFAULT_REPAIR_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
        self
    }
}

/// A defect handed to a plugin's `repair` during the repair pass.
///
/// When the defect cell was occupied the repair leaves it as drawn; `defect.actual` then still
/// stands in the returned grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedRepair {
    pub plugin: &'static str,
    pub kind: WidgetKind,
    pub defect: Defect,
}

impl AppliedRepair {
    /// True when `grid` holds something other than the defect's original character.
    pub fn is_resolved_in(&self, grid: &Grid) -> bool {
        grid.get(self.defect.col, self.defect.row) != self.defect.actual
    }
}

/// Result of a diagnostic detection run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionReport {
    /// The grid the widgets were detected on: the repaired copy if any repair ran, otherwise an
    /// unchanged copy of the input.
    pub grid: Grid,
    pub widgets: Vec<Widget>,
    pub repairs: Vec<AppliedRepair>,
}

impl DetectionReport {
    /// Whether the returned grid differs from the input, i.e. at least one repair was written.
    pub fn repaired(&self) -> bool {
        self.repairs.iter().any(|repair| repair.is_resolved_in(&self.grid))
    }
}

/// An ordered set of plugins.
pub struct Detector {
    plugins: Vec<Box<dyn WidgetPlugin>>,
}

impl Default for Detector {
    fn default() -> Self {
        Self::with_plugins(builtin_plugins())
    }
}

impl std::fmt::Debug for Detector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Detector").field("plugins", &self.plugin_names()).finish()
    }
}

impl Detector {
    /// Replaces the built-in plugin list. Registration order does not matter; plugins always
    /// run by ascending priority (ties keep registration order).
    pub fn with_plugins(plugins: Vec<Box<dyn WidgetPlugin>>) -> Self {
        Self { plugins }
    }

    /// Plugin names in execution order.
    pub fn plugin_names(&self) -> Vec<&'static str> {
        self.ordered().iter().map(|plugin| plugin.name()).collect()
    }

    /// Detects exact widgets only; the grid is never repaired.
    pub fn detect_widgets(&self, grid: &Grid) -> Vec<Widget> {
        detection_pass(&self.ordered(), grid)
    }

    /// Optionally repairs near misses, then detects on the (possibly repaired) grid.
    pub fn detect_widgets_with_diagnostics(
        &self,
        grid: &Grid,
        settings: &RepairSettings,
    ) -> DetectionReport {
        let plugins = self.ordered();

        let (working, repairs) = if settings.enabled {
            repair_pass(&plugins, grid, settings.threshold)
        } else {
            (None, Vec::new())
        };

        let grid = match working {
            Some(working) if !repairs.is_empty() => working,
            _ => grid.clone(),
        };
        let widgets = detection_pass(&plugins, &grid);

        DetectionReport {
            grid,
            widgets,
            repairs,
        }
    }

    fn ordered(&self) -> Vec<&dyn WidgetPlugin> {
        let mut plugins: Vec<&dyn WidgetPlugin> =
            self.plugins.iter().map(|plugin| plugin.as_ref()).collect();
        plugins.sort_by_key(|plugin| plugin.priority());
        plugins
    }
}

/// Detects widgets with the built-in plugins, without repair.
pub fn detect_widgets(grid: &Grid) -> Vec<Widget> {
    Detector::default().detect_widgets(grid)
}

/// Detects widgets with the built-in plugins, repairing first when `settings` enable it.
pub fn detect_widgets_with_diagnostics(grid: &Grid, settings: &RepairSettings) -> DetectionReport {
    Detector::default().detect_widgets_with_diagnostics(grid, settings)
}

fn repair_pass(
    plugins: &[&dyn WidgetPlugin],
    grid: &Grid,
    threshold: f64,
) -> (Option<Grid>, Vec<AppliedRepair>) {
    let mut ctx = DetectContext::new(grid);
    let mut working: Option<Grid> = None;
    let mut repairs = Vec::<AppliedRepair>::new();
    let mut repaired_cells = BTreeSet::<Cell>::new();

    for plugin in plugins {
        let candidates = plugin.detect(&ctx);
        debug!(plugin = plugin.name(), candidates = candidates.len(), "repair scan");

        for candidate in candidates {
            // Exact matches are protected from repairs proposed by later plugins.
            if candidate.is_full() {
                ctx.claim(candidate.cells.iter().copied());
                continue;
            }

            if candidate.confidence < threshold
                || threshold.is_nan()
                || candidate.defects.is_empty()
            {
                trace!(
                    plugin = plugin.name(),
                    confidence = candidate.confidence,
                    rect = %candidate.widget.rect(),
                    "candidate below repair threshold"
                );
                continue;
            }

            let target = working.get_or_insert_with(|| grid.clone());
            if !plugin.repair(target, &candidate) {
                continue;
            }

            let kind = candidate.widget.kind();
            for defect in candidate.defects {
                if !repaired_cells.insert(defect.cell()) {
                    continue;
                }
                debug!(
                    plugin = plugin.name(),
                    col = defect.col,
                    row = defect.row,
                    expected = %defect.expected,
                    resolved = target.get(defect.col, defect.row) != defect.actual,
                    "repaired cell"
                );
                repairs.push(AppliedRepair {
                    plugin: plugin.name(),
                    kind,
                    defect,
                });
            }
        }
    }

    (working, repairs)
}

fn detection_pass(plugins: &[&dyn WidgetPlugin], grid: &Grid) -> Vec<Widget> {
    let mut ctx = DetectContext::new(grid);
    let mut widgets = Vec::<Widget>::new();

    for plugin in plugins {
        let candidates = plugin.detect(&ctx);
        let found = candidates.len();
        let mut accepted = 0usize;

        for candidate in candidates {
            if !candidate.is_full() {
                continue;
            }
            if ctx.any_claimed(&candidate.cells) {
                trace!(
                    plugin = plugin.name(),
                    rect = %candidate.widget.rect(),
                    "candidate overlaps claimed cells"
                );
                continue;
            }
            ctx.claim(candidate.cells.iter().copied());
            widgets.push(candidate.widget);
            accepted += 1;
        }

        debug!(plugin = plugin.name(), candidates = found, accepted, "detection scan");
    }

    widgets
}
