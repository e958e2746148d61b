//! Overflow-aware collapsing layout for ordered item sequences.
//!
//! Given the display cost of each item in a sequence and a unit budget,
//! [`layout`] decides which items render directly and which fold behind a
//! single overflow indicator ("…"). The caller chooses which end of the
//! sequence gives way first via [`CollapseFrom`].
//!
//! The result is an [`OverflowState`]: two visible runs (leading and
//! trailing) with the hidden items forming the contiguous gap between them.
//! It is recomputed from scratch on every layout pass — callers should treat
//! it as ephemeral and never store it across item or width changes.

use std::ops::Range;

/// Which end of the sequence is hidden first under space pressure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollapseFrom {
    /// Hide items from the beginning of the sequence; the trailing run
    /// stays visible (typical for breadcrumbs, where the current location
    /// matters most).
    #[default]
    Start,
    /// Hide items from the end of the sequence; the leading run stays
    /// visible.
    End,
}

/// Configuration for [`layout`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverflowOptions {
    /// Which end of the sequence collapses first.
    pub collapse_from: CollapseFrom,
    /// Render the overflow indicator even when every item fits. Keeps the
    /// rendered width stable across dynamic content changes at the cost of
    /// one permanently occupied slot.
    pub always_show_overflow: bool,
    /// Display cost of the overflow indicator itself, charged against the
    /// budget whenever items are hidden.
    pub indicator_units: usize,
}

impl Default for OverflowOptions {
    fn default() -> Self {
        Self {
            collapse_from: CollapseFrom::Start,
            always_show_overflow: false,
            indicator_units: 1,
        }
    }
}

/// Rejected [`layout`] input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OverflowError {
    /// The available budget was negative. Callers computing budgets by
    /// subtraction (container width minus chrome) must handle this case
    /// explicitly; clamping it away here has historically masked layout
    /// bugs.
    #[error("available units must be non-negative, got {0}")]
    NegativeBudget(i32),
}

/// The outcome of one collapsing layout pass.
///
/// Exactly partitions the input sequence: every index is in the leading run,
/// the overflow run, or the trailing run, and the overflow run is the
/// contiguous gap between the two visible runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverflowState {
    leading: usize,
    trailing: usize,
    overflow: Range<usize>,
    indicator_visible: bool,
    len: usize,
}

impl OverflowState {
    /// Indices of the visible leading run (always starts at 0).
    pub fn visible_leading(&self) -> Range<usize> {
        0..self.leading
    }

    /// Indices of the visible trailing run (always ends at the sequence end).
    pub fn visible_trailing(&self) -> Range<usize> {
        self.len - self.trailing..self.len
    }

    /// Indices of the hidden items, in sequence order.
    pub fn overflow(&self) -> Range<usize> {
        self.overflow.clone()
    }

    /// Number of hidden items.
    pub fn overflow_count(&self) -> usize {
        self.overflow.len()
    }

    /// Whether the overflow indicator should be rendered.
    pub fn indicator_visible(&self) -> bool {
        self.indicator_visible
    }

    /// Whether every item is visible (the overflow run is empty).
    pub fn all_visible(&self) -> bool {
        self.overflow.is_empty()
    }
}

/// Decide how many items of a sequence render directly and how many fold
/// behind the overflow indicator.
///
/// `item_units[i]` is the display cost of item `i`; `available_units` is the
/// total budget. Items are accumulated greedily from the protected end (the
/// end opposite `options.collapse_from`) until the next item would no longer
/// fit. Whenever any item is hidden, the indicator's own cost
/// (`options.indicator_units`) is charged against the budget first.
///
/// When the whole sequence fits the budget, no indicator charge applies and
/// everything is visible — in particular, a final item that fits only
/// because no indicator is needed is shown directly rather than becoming a
/// dangling one-item overflow.
///
/// Pure function of its inputs: no interior state, safe to call on every
/// render pass, and identical inputs produce identical results.
///
/// # Errors
///
/// Returns [`OverflowError::NegativeBudget`] if `available_units` is
/// negative. A width of zero is valid and hides everything.
pub fn layout(
    item_units: &[usize],
    available_units: i32,
    options: &OverflowOptions,
) -> Result<OverflowState, OverflowError> {
    if available_units < 0 {
        return Err(OverflowError::NegativeBudget(available_units));
    }
    let available = available_units as usize;
    let len = item_units.len();
    let total: usize = item_units.iter().sum();

    let state = if total <= available {
        // Everything fits. The indicator appears only as a stable-width
        // reservation, with nothing behind it.
        match options.collapse_from {
            CollapseFrom::Start => OverflowState {
                leading: 0,
                trailing: len,
                overflow: 0..0,
                indicator_visible: options.always_show_overflow,
                len,
            },
            CollapseFrom::End => OverflowState {
                leading: len,
                trailing: 0,
                overflow: len..len,
                indicator_visible: options.always_show_overflow,
                len,
            },
        }
    } else {
        // Something must hide, so the indicator occupies part of the budget.
        let budget = available.saturating_sub(options.indicator_units);
        let indicator_visible = options.always_show_overflow || available >= options.indicator_units;

        let mut kept = 0usize;
        let mut used = 0usize;
        match options.collapse_from {
            CollapseFrom::Start => {
                for &units in item_units.iter().rev() {
                    if used + units > budget {
                        break;
                    }
                    used += units;
                    kept += 1;
                }
                OverflowState {
                    leading: 0,
                    trailing: kept,
                    overflow: 0..len - kept,
                    indicator_visible,
                    len,
                }
            }
            CollapseFrom::End => {
                for &units in item_units.iter() {
                    if used + units > budget {
                        break;
                    }
                    used += units;
                    kept += 1;
                }
                OverflowState {
                    leading: kept,
                    trailing: 0,
                    overflow: kept..len,
                    indicator_visible,
                    len,
                }
            }
        }
    };

    debug_assert_eq!(
        state.leading + state.trailing + state.overflow.len(),
        len,
        "visible runs and overflow must partition the sequence"
    );
    Ok(state)
}
