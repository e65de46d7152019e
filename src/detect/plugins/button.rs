// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gridsketch-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gridsketch and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smallvec::SmallVec;

use crate::detect::{fill_blank_defects, DetectContext, WidgetPlugin};
use crate::grid::{Grid, BLANK};
use crate::model::{Candidate, Cell, Defect, Rect, Widget};

pub const BUTTON_PRIORITY: u32 = 20;
pub const BUTTON_PARTIAL_CONFIDENCE: f64 = 0.8;
/// How far past `[ ` an unterminated button is searched for a closing bracket.
pub const BUTTON_LOOKAHEAD: usize = 40;

const OPEN: char = '[';
const CLOSE: char = ']';

/// `[ Label ]` on a single row.
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonPlugin;

impl WidgetPlugin for ButtonPlugin {
    fn name(&self) -> &'static str {
        "button"
    }

    fn priority(&self) -> u32 {
        BUTTON_PRIORITY
    }

    fn detect(&self, ctx: &DetectContext<'_>) -> Vec<Candidate> {
        let grid = ctx.grid();
        let mut candidates = Vec::<Candidate>::new();

        for row in 0..grid.height() {
            let mut col = 0usize;
            while col < grid.width() {
                if !opens_button(grid, col, row) {
                    col += 1;
                    continue;
                }

                let candidate = match_closed(grid, col, row)
                    .or_else(|| match_unterminated(grid, col, row))
                    .filter(|candidate| !ctx.any_claimed(&candidate.cells));
                match candidate {
                    Some(candidate) => {
                        col = candidate.widget.rect().right();
                        candidates.push(candidate);
                    }
                    None => col += 1,
                }
            }
        }

        candidates
    }

    fn repair(&self, grid: &mut Grid, candidate: &Candidate) -> bool {
        if !matches!(candidate.widget, Widget::Button { .. }) {
            return false;
        }
        fill_blank_defects(grid, &candidate.defects)
    }
}

fn opens_button(grid: &Grid, col: usize, row: usize) -> bool {
    grid.get(col, row) == OPEN && grid.get(col + 1, row) == BLANK
}

fn row_slice(grid: &Grid, row: usize, start: usize, end: usize) -> String {
    (start..end).map(|col| grid.get(col, row)).collect()
}

fn button_candidate(col: usize, row: usize, width: usize, label: &str) -> (Widget, Vec<Cell>) {
    let rect = Rect::new(col, row, width, 1);
    let widget = Widget::Button {
        rect,
        label: label.into(),
    };
    (widget, rect.cells().collect())
}

/// Column of the `]` in the first ` ]` pair at or after `from`, if any before `limit`.
fn find_terminator(grid: &Grid, row: usize, from: usize, limit: usize) -> Option<usize> {
    (from.max(1)..limit).find(|&k| grid.get(k, row) == CLOSE && grid.get(k - 1, row) == BLANK)
}

/// `[ ` up to the first ` ]`; the interior, trimmed, is the label and must not be empty.
fn match_closed(grid: &Grid, col: usize, row: usize) -> Option<Candidate> {
    let start = col + 2;
    let close = find_terminator(grid, row, start, grid.width())?;

    let interior = row_slice(grid, row, start, close - 1);
    let label = interior.trim();
    if label.is_empty() {
        return None;
    }
    let (widget, cells) = button_candidate(col, row, close + 1 - col, label);
    Some(Candidate::full(widget, cells))
}

/// `[ Label` with no ` ]` in the lookahead window: proposes the missing ` ]` when the two cells
/// after the label are free.
fn match_unterminated(grid: &Grid, col: usize, row: usize) -> Option<Candidate> {
    let start = col + 2;
    let limit = start.saturating_add(BUTTON_LOOKAHEAD).min(grid.width());

    if find_terminator(grid, row, start, limit).is_some() {
        return None;
    }

    // Words separated by single spaces make up the label.
    let mut end = start;
    let mut k = start;
    while k < limit {
        if grid.get(k, row) == BLANK {
            if k == start || k + 1 >= limit || grid.get(k + 1, row) == BLANK {
                break;
            }
        } else {
            end = k + 1;
        }
        k += 1;
    }

    if end == start || end >= limit {
        return None;
    }

    let space_col = end;
    let close_col = end + 1;
    if close_col >= grid.width() || !grid.is_blank(space_col, row) || !grid.is_blank(close_col, row)
    {
        return None;
    }

    let mut defects = SmallVec::new();
    for (cell_col, expected, what) in [
        (space_col, BLANK, "missing space before closing bracket"),
        (close_col, CLOSE, "missing closing bracket"),
    ] {
        let actual = grid.get(cell_col, row);
        if actual != expected {
            defects.push(Defect::new(cell_col, row, actual, expected, what));
        }
    }

    let label = row_slice(grid, row, start, end);
    let (widget, cells) = button_candidate(col, row, close_col + 1 - col, &label);
    Some(Candidate::partial(
        widget,
        cells,
        BUTTON_PARTIAL_CONFIDENCE,
        defects,
    ))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{ButtonPlugin, BUTTON_LOOKAHEAD};
    use crate::detect::{DetectContext, WidgetPlugin};
    use crate::grid::Grid;
    use crate::model::{Rect, Widget};

    fn detect(text: &str) -> Vec<crate::model::Candidate> {
        let grid = Grid::from_text(text, 0, 0);
        ButtonPlugin.detect(&DetectContext::new(&grid))
    }

    #[rstest]
    #[case("[ OK ]", "OK", 6)]
    #[case("[   OK  ]", "OK", 9)]
    #[case("[ Sign up ]", "Sign up", 11)]
    #[case("[ a]b ]", "a]b", 7)]
    #[case("[ x [ y ]", "x [ y", 9)]
    #[case("[ Go   [ Stop ]", "Go   [ Stop", 15)]
    fn closed_buttons_trim_their_label(
        #[case] text: &str,
        #[case] label: &str,
        #[case] width: usize,
    ) {
        let candidates = detect(text);
        assert_eq!(candidates.len(), 1);
        assert!(candidates[0].is_full());
        assert_eq!(
            candidates[0].widget,
            Widget::Button {
                rect: Rect::new(0, 0, width, 1),
                label: label.into()
            }
        );
    }

    #[rstest]
    #[case("[  ]")]
    #[case("[ ]")]
    #[case("[OK]")]
    #[case("[ OK]")]
    fn malformed_brackets_are_not_buttons(#[case] text: &str) {
        assert!(detect(text).iter().all(|candidate| !candidate.is_full()));
    }

    #[test]
    fn adjacent_buttons_do_not_merge() {
        let candidates = detect("[ OK ] [ Cancel ]");
        let labels = candidates
            .iter()
            .map(|candidate| candidate.widget.label().unwrap_or_default().to_owned())
            .collect::<Vec<_>>();
        assert_eq!(labels, ["OK", "Cancel"]);
        assert_eq!(candidates[1].widget.rect(), Rect::new(7, 0, 10, 1));
    }

    #[test]
    fn unterminated_button_proposes_closing_bracket() {
        let candidates = detect("[ Save     ");
        assert_eq!(candidates.len(), 1);
        let candidate = &candidates[0];
        assert!(!candidate.is_full());
        assert!((candidate.confidence - 0.8).abs() < 1e-9);
        assert_eq!(candidate.widget.rect(), Rect::new(0, 0, 8, 1));
        assert_eq!(candidate.defects.len(), 1);
        assert_eq!(candidate.defects[0].cell(), (7, 0));
        assert_eq!(candidate.defects[0].expected, ']');
    }

    #[test]
    fn unterminated_button_needs_room_to_close() {
        assert!(detect("[ Save").is_empty());
        assert!(detect("[ Save X").is_empty());
    }

    #[test]
    fn closed_match_stops_at_first_terminator() {
        let candidates = detect("[ A ] b ]");
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].widget, Widget::button(0, 0, "A"));
    }

    #[test]
    fn unterminated_label_may_hold_brackets() {
        let candidates = detect("[ a]b     ");
        assert_eq!(candidates.len(), 1);
        assert!(!candidates[0].is_full());
        assert_eq!(candidates[0].widget, Widget::button(0, 0, "a]b"));
    }

    #[test]
    fn unterminated_label_must_end_inside_lookahead() {
        let near = format!("[ {}   ", "a".repeat(BUTTON_LOOKAHEAD - 10));
        let candidates = detect(&near);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].widget.rect().width, BUTTON_LOOKAHEAD - 10 + 4);

        let far = format!("[ {}   ", "a".repeat(BUTTON_LOOKAHEAD + 5));
        assert!(detect(&far).is_empty());
    }

    #[test]
    fn terminator_past_lookahead_still_closes() {
        let text = format!("[ Save{} ]", " ".repeat(BUTTON_LOOKAHEAD + 10));
        let candidates = detect(&text);
        assert_eq!(candidates.len(), 1);
        assert!(candidates[0].is_full());
        assert_eq!(candidates[0].widget.label(), Some("Save"));
        assert_eq!(candidates[0].widget.rect().width, text.chars().count());
    }
}
