// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection policy: how an activated value changes a [`Selection`].

use crate::Selection;

/// Single or multiple selection.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SelectionMode {
    /// At most one value is selected.
    #[default]
    Single,
    /// Any number of values may be selected.
    Multiple,
}

/// Configuration for a selector group.
///
/// ```
/// use understory_selector::{SelectionMode, SelectorConfig};
///
/// let config = SelectorConfig {
///     mode: SelectionMode::Multiple,
///     deselect_on_click: true,
/// };
/// assert!(config.is_multiselect());
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SelectorConfig {
    /// Single or multiple selection.
    pub mode: SelectionMode,
    /// Activating an already-selected value deselects it.
    pub deselect_on_click: bool,
}

impl SelectorConfig {
    /// Returns `true` in [`SelectionMode::Multiple`].
    #[must_use]
    pub fn is_multiselect(&self) -> bool {
        self.mode == SelectionMode::Multiple
    }
}

/// Applies the activation of `value` to `selection`. Returns `true` if the
/// selection changed.
///
/// | mode     | `value` selected?     | `deselect_on_click` | result                 |
/// |----------|-----------------------|---------------------|------------------------|
/// | multiple | no                    | any                 | `value` added          |
/// | multiple | yes                   | `true`              | `value` removed        |
/// | multiple | yes                   | `false`             | unchanged              |
/// | single   | it is the selection   | `true`              | cleared                |
/// | single   | otherwise             | any                 | `value` selected alone |
pub fn apply_selection<T: PartialEq>(
    selection: &mut Selection<T>,
    value: T,
    config: &SelectorConfig,
) -> bool {
    let before = selection.revision();
    match config.mode {
        SelectionMode::Multiple => {
            if !selection.contains(&value) {
                selection.add(value);
            } else if config.deselect_on_click {
                selection.remove(&value);
            }
        }
        SelectionMode::Single => {
            if config.deselect_on_click && selection.items() == core::slice::from_ref(&value) {
                selection.clear();
            } else {
                selection.select_only(value);
            }
        }
    }
    selection.revision() != before
}
