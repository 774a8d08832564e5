// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::CellPosition;

/// Precondition violations detected while stepping a cursor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GridError {
    /// The matrix has no rows, or its first row has no cells.
    EmptyMatrix,
    /// The cursor lies outside the matrix's row or column range.
    CursorOutOfBounds(CellPosition),
    /// A full lap along the axis of movement found no present, non-empty cell.
    NoFilledCell,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMatrix => f.write_str("cell matrix is empty"),
            Self::CursorOutOfBounds(pos) => {
                write!(f, "cursor ({}, {}) is outside the cell matrix", pos.row, pos.col)
            }
            Self::NoFilledCell => f.write_str("no non-empty cell along the axis of movement"),
        }
    }
}

impl core::error::Error for GridError {}
