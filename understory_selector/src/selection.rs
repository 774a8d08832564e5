// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The selected-values container owned by a selector group.

use alloc::vec::Vec;

/// Selected values in selection order, plus a revision counter.
///
/// Values are unique by equality; no hashing or ordering is required of `T`.
#[derive(Clone, Debug, Default)]
pub struct Selection<T> {
    items: Vec<T>,
    revision: u64,
}

impl<T> Selection<T> {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            revision: 0,
        }
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The selected values, in the order they were selected.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Bumped once for every mutation that changed the contents; no-ops leave it alone.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Deselects everything.
    pub fn clear(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.items.clear();
        self.bump_revision();
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<T: PartialEq> Selection<T> {
    /// Returns `true` if `value` is selected.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.position_of(value).is_some()
    }

    /// Makes `value` the only selected value.
    pub fn select_only(&mut self, value: T) {
        if self.items.len() == 1 && self.items[0] == value {
            return;
        }
        self.items.clear();
        self.items.push(value);
        self.bump_revision();
    }

    /// Adds `value` if it is not selected yet. Returns `true` if it was added.
    pub fn add(&mut self, value: T) -> bool {
        if self.contains(&value) {
            return false;
        }
        self.items.push(value);
        self.bump_revision();
        true
    }

    /// Removes `value` if selected. Returns `true` if it was removed.
    pub fn remove(&mut self, value: &T) -> bool {
        let Some(idx) = self.position_of(value) else {
            return false;
        };
        self.items.remove(idx);
        self.bump_revision();
        true
    }

    fn position_of(&self, value: &T) -> Option<usize> {
        self.items.iter().position(|v| v == value)
    }
}
