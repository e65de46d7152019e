// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gridsketch-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gridsketch and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! JSON wire types for detection results.
//!
//! These mirror the model types with plain strings and flat coordinates so that editors and
//! scripted tools can consume them without depending on this crate.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::detect::{AppliedRepair, DetectionReport};
use crate::grid::Grid;
use crate::model::{LineDirection, Rect, Widget};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WidgetRecord {
    /// One of `box`, `button`, `line`, `text`.
    pub kind: String,
    pub col: usize,
    pub row: usize,
    pub width: usize,
    pub height: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// `horizontal` or `vertical`, lines only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RepairRecord {
    pub plugin: String,
    pub kind: String,
    pub col: usize,
    pub row: usize,
    pub expected: String,
    pub actual: String,
    pub description: String,
    /// False when the cell was occupied and kept its drawn character.
    pub resolved: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DetectionSummary {
    pub widgets: Vec<WidgetRecord>,
    pub repairs: Vec<RepairRecord>,
    /// Serialized repaired grid; absent when nothing was repaired.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repaired_text: Option<String>,
}

impl DetectionSummary {
    pub fn from_widgets(widgets: &[Widget]) -> Self {
        Self {
            widgets: widgets.iter().map(WidgetRecord::from).collect(),
            repairs: Vec::new(),
            repaired_text: None,
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl From<&DetectionReport> for DetectionSummary {
    fn from(report: &DetectionReport) -> Self {
        Self {
            widgets: report.widgets.iter().map(WidgetRecord::from).collect(),
            repairs: report
                .repairs
                .iter()
                .map(|repair| RepairRecord::new(repair, &report.grid))
                .collect(),
            repaired_text: report.repaired().then(|| report.grid.to_text()),
        }
    }
}

/// JSON schema of [`DetectionSummary`].
pub fn detection_summary_schema() -> schemars::Schema {
    schemars::schema_for!(DetectionSummary)
}

impl From<&Widget> for WidgetRecord {
    fn from(widget: &Widget) -> Self {
        let rect = widget.rect();
        let mut record = Self {
            kind: widget.kind().as_str().to_owned(),
            col: rect.col,
            row: rect.row,
            width: rect.width,
            height: rect.height,
            label: None,
            content: None,
            direction: None,
        };
        match widget {
            Widget::Box { label, .. } => record.label = label.as_ref().map(|l| l.to_string()),
            Widget::Button { label, .. } => record.label = Some(label.to_string()),
            Widget::Line { direction, .. } => record.direction = Some(direction.as_str().to_owned()),
            Widget::Text { content, .. } => record.content = Some(content.to_string()),
        }
        record
    }
}

impl RepairRecord {
    /// Builds the record for `repair`, resolved against the grid detection ran on.
    pub fn new(repair: &AppliedRepair, grid: &Grid) -> Self {
        Self {
            plugin: repair.plugin.to_owned(),
            kind: repair.kind.as_str().to_owned(),
            col: repair.defect.col,
            row: repair.defect.row,
            expected: repair.defect.expected.to_string(),
            actual: repair.defect.actual.to_string(),
            description: repair.defect.description.clone(),
            resolved: repair.is_resolved_in(grid),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetRecordError {
    UnknownKind(String),
    UnknownDirection(String),
    MissingField { kind: String, field: &'static str },
}

impl fmt::Display for WidgetRecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownKind(kind) => write!(f, "unknown widget kind: {kind}"),
            Self::UnknownDirection(direction) => write!(f, "unknown line direction: {direction}"),
            Self::MissingField { kind, field } => write!(f, "{kind} widget is missing `{field}`"),
        }
    }
}

impl std::error::Error for WidgetRecordError {}

impl TryFrom<WidgetRecord> for Widget {
    type Error = WidgetRecordError;

    fn try_from(record: WidgetRecord) -> Result<Self, Self::Error> {
        let rect = Rect::new(record.col, record.row, record.width, record.height);
        let missing = |field: &'static str| WidgetRecordError::MissingField {
            kind: record.kind.clone(),
            field,
        };

        match record.kind.as_str() {
            "box" => Ok(Widget::Box {
                rect,
                label: record.label.as_deref().map(Into::into),
            }),
            "button" => {
                let label = record.label.as_deref().ok_or_else(|| missing("label"))?;
                Ok(Widget::Button {
                    rect,
                    label: label.into(),
                })
            }
            "line" => {
                let direction = match record.direction.as_deref() {
                    Some("horizontal") => LineDirection::Horizontal,
                    Some("vertical") => LineDirection::Vertical,
                    Some(other) => return Err(WidgetRecordError::UnknownDirection(other.to_owned())),
                    None => return Err(missing("direction")),
                };
                Ok(Widget::Line { rect, direction })
            }
            "text" => {
                let content = record.content.as_deref().ok_or_else(|| missing("content"))?;
                Ok(Widget::Text {
                    rect,
                    content: content.into(),
                })
            }
            other => Err(WidgetRecordError::UnknownKind(other.to_owned())),
        }
    }
}
