// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pure cursor step function.
//!
//! ## Rules
//!
//! - An unset cursor resolves to the origin `{0, 0}` for any key. This is the
//!   "first activation" rule: the first key press inside a fresh table lands on
//!   the top-left cell no matter which key it was.
//! - Keys other than the four arrows leave a set cursor unchanged.
//! - An arrow moves one step along its axis with toroidal wrap: stepping off one
//!   end re-enters at the other.
//! - Cells that are absent (short rows) or have no text content are skipped by
//!   repeating the same step until a filled cell is reached. A full lap along the
//!   axis without finding one is reported as [`GridError::NoFilledCell`].

use ui_events::keyboard::{Key, NamedKey};

use crate::{CellMatrix, CellPosition, GridError};

/// An arrow-key direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `ArrowUp`: previous row.
    Up,
    /// `ArrowDown`: next row.
    Down,
    /// `ArrowLeft`: previous column.
    Left,
    /// `ArrowRight`: next column.
    Right,
}

impl Direction {
    /// Maps an arrow key to its direction.
    #[must_use]
    pub fn from_key(key: &Key) -> Option<Self> {
        match key {
            Key::Named(NamedKey::ArrowUp) => Some(Self::Up),
            Key::Named(NamedKey::ArrowDown) => Some(Self::Down),
            Key::Named(NamedKey::ArrowLeft) => Some(Self::Left),
            Key::Named(NamedKey::ArrowRight) => Some(Self::Right),
            _ => None,
        }
    }

    /// Moves `pos` one step in this direction within a `rows` by `cols` grid,
    /// wrapping at the edges.
    #[must_use]
    pub fn advance(self, pos: CellPosition, rows: usize, cols: usize) -> CellPosition {
        let CellPosition { row, col } = pos;
        match self {
            Self::Up => CellPosition::new(row.checked_sub(1).unwrap_or(rows - 1), col),
            Self::Down => CellPosition::new(if row + 1 >= rows { 0 } else { row + 1 }, col),
            Self::Left => CellPosition::new(row, col.checked_sub(1).unwrap_or(cols - 1)),
            Self::Right => CellPosition::new(row, if col + 1 >= cols { 0 } else { col + 1 }),
        }
    }

    const fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }
}

/// Computes the next cursor for `key`.
///
/// `is_filled` decides whether a present cell has content; see
/// [`ElementTree::has_text_content`](understory_element_tree::ElementTree::has_text_content)
/// for the usual predicate.
///
/// # Errors
///
/// - [`GridError::EmptyMatrix`] if `matrix` has no navigable cell.
/// - [`GridError::CursorOutOfBounds`] if `cursor` is outside the matrix.
/// - [`GridError::NoFilledCell`] if an arrow press finds no filled cell along its axis.
pub fn step<K>(
    matrix: &CellMatrix<K>,
    cursor: Option<CellPosition>,
    key: &Key,
    mut is_filled: impl FnMut(&K) -> bool,
) -> Result<CellPosition, GridError> {
    if matrix.is_empty() {
        return Err(GridError::EmptyMatrix);
    }
    let Some(start) = cursor else {
        return Ok(CellPosition::ORIGIN);
    };
    let (rows, cols) = (matrix.row_count(), matrix.col_count());
    if start.row >= rows || start.col >= cols {
        return Err(GridError::CursorOutOfBounds(start));
    }
    let Some(direction) = Direction::from_key(key) else {
        return Ok(start);
    };

    let lap = if direction.is_vertical() { rows } else { cols };
    let mut pos = start;
    for _ in 0..lap {
        pos = direction.advance(pos, rows, cols);
        if matrix.get(pos).is_some_and(&mut is_filled) {
            return Ok(pos);
        }
    }
    Err(GridError::NoFilledCell)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    fn key(named: NamedKey) -> Key {
        Key::Named(named)
    }

    fn full(rows: usize, cols: usize) -> CellMatrix<&'static str> {
        CellMatrix::from_rows((0..rows).map(|_| vec!["x"; cols]).collect::<Vec<_>>())
    }

    fn filled(cell: &&str) -> bool {
        !cell.is_empty()
    }

    #[test]
    fn three_by_three_wraps_on_every_edge() {
        let m = full(3, 3);
        let at = |r, c| Some(CellPosition::new(r, c));
        let up = key(NamedKey::ArrowUp);
        let left = key(NamedKey::ArrowLeft);
        let down = key(NamedKey::ArrowDown);
        let right = key(NamedKey::ArrowRight);

        assert_eq!(step(&m, at(0, 0), &up, filled), Ok(CellPosition::new(2, 0)));
        assert_eq!(step(&m, at(0, 0), &left, filled), Ok(CellPosition::new(0, 2)));
        assert_eq!(step(&m, at(2, 2), &down, filled), Ok(CellPosition::new(0, 2)));
        assert_eq!(step(&m, at(2, 2), &right, filled), Ok(CellPosition::new(2, 0)));
    }

    #[test]
    fn empty_cells_are_skipped() {
        let m = CellMatrix::from_rows(vec![vec!["a", "", "c"]]);
        let right = key(NamedKey::ArrowRight);
        let from_start = step(&m, Some(CellPosition::ORIGIN), &right, filled);
        assert_eq!(from_start, Ok(CellPosition::new(0, 2)));
        let wrapped = step(&m, Some(CellPosition::new(0, 2)), &right, filled);
        assert_eq!(wrapped, Ok(CellPosition::ORIGIN));
    }

    #[test]
    fn short_rows_are_skipped_vertically() {
        let m = CellMatrix::from_rows(vec![vec!["a", "b"], vec!["c"], vec!["d", "e"]]);
        let down = key(NamedKey::ArrowDown);
        let next = step(&m, Some(CellPosition::new(0, 1)), &down, filled);
        assert_eq!(next, Ok(CellPosition::new(2, 1)));
    }

    #[test]
    fn unset_cursor_goes_to_origin_for_any_key() {
        let m = full(2, 2);
        assert_eq!(step(&m, None, &key(NamedKey::Enter), filled), Ok(CellPosition::ORIGIN));
        assert_eq!(step(&m, None, &key(NamedKey::ArrowUp), filled), Ok(CellPosition::ORIGIN));
    }

    #[test]
    fn non_arrow_keys_keep_cursor() {
        let m = full(2, 2);
        let at = CellPosition::new(1, 1);
        assert_eq!(step(&m, Some(at), &key(NamedKey::Tab), filled), Ok(at));
        assert_eq!(step(&m, Some(at), &Key::Character("a".into()), filled), Ok(at));
    }

    #[test]
    fn lone_filled_cell_returns_to_itself() {
        let m = CellMatrix::from_rows(vec![vec!["", "x", ""]]);
        let at = CellPosition::new(0, 1);
        assert_eq!(step(&m, Some(at), &key(NamedKey::ArrowLeft), filled), Ok(at));
    }

    #[test]
    fn preconditions_are_reported() {
        let right = key(NamedKey::ArrowRight);
        let empty = CellMatrix::<&str>::from_rows(vec![]);
        assert_eq!(step(&empty, None, &right, filled), Err(GridError::EmptyMatrix));

        let m = full(2, 2);
        let outside = CellPosition::new(2, 0);
        assert_eq!(
            step(&m, Some(outside), &right, filled),
            Err(GridError::CursorOutOfBounds(outside))
        );

        let blank = CellMatrix::from_rows(vec![vec!["", ""]]);
        assert_eq!(
            step(&blank, Some(CellPosition::ORIGIN), &right, filled),
            Err(GridError::NoFilledCell)
        );
    }
}
