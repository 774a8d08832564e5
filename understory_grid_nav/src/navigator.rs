// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A stateful navigation session over one table.

use core::fmt::Debug;

use ui_events::keyboard::Key;
use understory_element_tree::ElementTree;

use crate::step::{Direction, step};
use crate::{CellMatrix, CellPosition, GridError, build_matrix};

/// Result of handling a key press.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NavOutcome<K> {
    /// The cursor after the key press.
    pub position: CellPosition,
    /// The cell to focus, if the cursor landed on a present cell.
    pub cell: Option<K>,
    /// Suppress the platform's default action (page scrolling on arrows).
    pub default_prevented: bool,
}

/// Owns a table's cell matrix and cursor.
///
/// The adapter forwards key presses and focus events on the table and focuses the
/// returned cell right away, so visual focus tracks the logical cursor.
#[derive(Clone, Debug)]
pub struct GridNavigator<K> {
    table: K,
    matrix: CellMatrix<K>,
    cursor: Option<CellPosition>,
}

impl<K: Copy + Eq + Debug> GridNavigator<K> {
    /// Creates a session over a pre-built matrix. The cursor starts unset.
    #[must_use]
    pub fn new(table: K, matrix: CellMatrix<K>) -> Self {
        Self {
            table,
            matrix,
            cursor: None,
        }
    }

    /// Snapshots `table` and creates a session over it.
    #[must_use]
    pub fn from_table<T: ElementTree<Id = K>>(tree: &T, table: K) -> Self {
        Self::new(table, build_matrix(tree, table))
    }

    /// The table element.
    #[must_use]
    pub fn table(&self) -> K {
        self.table
    }

    /// The current snapshot.
    #[must_use]
    pub fn matrix(&self) -> &CellMatrix<K> {
        &self.matrix
    }

    /// The cursor, or `None` before the first key press or table focus.
    #[must_use]
    pub fn cursor(&self) -> Option<CellPosition> {
        self.cursor
    }

    /// The cell under the cursor.
    #[must_use]
    pub fn focused_cell(&self) -> Option<K> {
        self.matrix.get(self.cursor?).copied()
    }

    /// Handles a key press, using the tree's text content to skip empty cells.
    ///
    /// # Errors
    ///
    /// See [`step`](crate::step()). The cursor is left unchanged on error.
    pub fn handle_key_down<T: ElementTree<Id = K>>(
        &mut self,
        tree: &T,
        key: &Key,
    ) -> Result<NavOutcome<K>, GridError> {
        self.handle_key_down_with(key, |&cell| tree.has_text_content(cell))
    }

    /// Handles a key press with a caller-supplied "cell has content" predicate.
    ///
    /// # Errors
    ///
    /// See [`step`](crate::step()). The cursor is left unchanged on error.
    pub fn handle_key_down_with(
        &mut self,
        key: &Key,
        is_filled: impl FnMut(&K) -> bool,
    ) -> Result<NavOutcome<K>, GridError> {
        let previous = self.cursor;
        let position = step(&self.matrix, previous, key, is_filled)?;
        self.cursor = Some(position);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            message = "grid_nav.step",
            from = ?previous,
            to = ?position,
            key = ?key
        );

        Ok(NavOutcome {
            position,
            cell: self.matrix.get(position).copied(),
            default_prevented: previous.is_some() && Direction::from_key(key).is_some(),
        })
    }

    /// Handles a focus event on the table or one of its cells.
    ///
    /// Focus on the table element itself resets the cursor to the origin and
    /// returns it; focus on anything else is ignored.
    pub fn on_container_focus(&mut self, target: K) -> Option<CellPosition> {
        if target != self.table {
            return None;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "grid_nav.reset", table = ?self.table, previous = ?self.cursor);
        self.cursor = Some(CellPosition::ORIGIN);
        self.cursor
    }

    /// Rebuilds the snapshot after the table's structure changed and clears the cursor.
    pub fn resnapshot<T: ElementTree<Id = K>>(&mut self, tree: &T, table: K) {
        self.table = table;
        self.matrix = build_matrix(tree, table);
        self.cursor = None;
    }
}
