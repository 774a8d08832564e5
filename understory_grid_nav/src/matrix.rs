// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cell positions and the row/column snapshot of a table.

use alloc::vec::Vec;

use understory_element_tree::{ElementKind, ElementTree};

/// A cursor position in a [`CellMatrix`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellPosition {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl CellPosition {
    /// The top-left cell.
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    /// Creates a position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Rows of cell handles, in document order.
///
/// Rows may have different lengths. The column count used for navigation is the
/// length of the first row; cells beyond it in longer rows are never reached, and
/// positions past the end of a shorter row are treated as absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CellMatrix<K> {
    rows: Vec<Vec<K>>,
}

impl<K> CellMatrix<K> {
    /// Wraps pre-collected rows.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<K>>) -> Self {
        Self { rows }
    }

    /// The rows.
    #[must_use]
    pub fn rows(&self) -> &[Vec<K>] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of navigable columns: the length of the first row.
    #[must_use]
    pub fn col_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Returns `true` if there is no navigable cell at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.row_count() == 0 || self.col_count() == 0
    }

    /// The cell at `pos`, or `None` if that row is too short.
    #[must_use]
    pub fn get(&self, pos: CellPosition) -> Option<&K> {
        self.rows.get(pos.row)?.get(pos.col)
    }
}

/// Snapshots `table` into a [`CellMatrix`].
///
/// Every [`ElementKind::TableRow`] descendant, in document order, becomes a row;
/// its [`ElementKind::HeaderCell`] and [`ElementKind::DataCell`] descendants, in
/// document order, become that row's cells.
pub fn build_matrix<T: ElementTree>(tree: &T, table: T::Id) -> CellMatrix<T::Id> {
    let is_kind = |id: T::Id, pred: fn(ElementKind) -> bool| {
        tree.element(id).is_some_and(|e| pred(e.kind))
    };
    let rows = tree
        .descendants(table)
        .filter(|&id| is_kind(id, |k: ElementKind| k == ElementKind::TableRow))
        .map(|row| {
            tree.descendants(row)
                .filter(|&id| is_kind(id, ElementKind::is_cell))
                .collect()
        })
        .collect();
    CellMatrix { rows }
}
