// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_grid_nav --heading-base-level=0

//! Understory Grid Nav: arrow-key navigation over the cells of a table.
//!
//! A data table becomes keyboard-navigable with a roving cursor:
//!
//! - [`build_matrix`] snapshots a table into a [`CellMatrix`]: rows in document
//!   order, and within each row its header and data cells in document order.
//! - [`step`] is the pure transition function. Arrows move the cursor one cell
//!   with toroidal wrap, skipping absent and empty cells. An unset cursor resolves
//!   to the top-left cell on any key.
//! - [`GridNavigator`] owns a snapshot and a cursor, and reports which cell the
//!   adapter should focus after each key press or table focus.
//!
//! The engine only computes positions. Moving actual focus (and making cells
//! focusable, e.g. with a roving `tabindex`) is up to the adapter.
//!
//! ## Minimal example
//!
//! ```rust
//! use ui_events::keyboard::{Key, NamedKey};
//! use understory_element_tree::{Document, Element, ElementKind};
//! use understory_grid_nav::{CellPosition, GridNavigator};
//!
//! let mut doc = Document::new();
//! let table = doc.insert(None, Element::new(ElementKind::Table));
//! let row = doc.insert(Some(table), Element::new(ElementKind::TableRow));
//! let mut cells = Vec::new();
//! for text in ["Name", "", "Age"] {
//!     let cell = doc.insert(Some(row), Element::new(ElementKind::DataCell));
//!     doc.set_text(cell, text);
//!     cells.push(cell);
//! }
//!
//! let mut nav = GridNavigator::from_table(&doc, table);
//!
//! // Tabbing onto the table itself puts the cursor on the first cell.
//! assert_eq!(nav.on_container_focus(table), Some(CellPosition::new(0, 0)));
//!
//! // The empty middle cell is skipped.
//! let right = Key::Named(NamedKey::ArrowRight);
//! let outcome = nav.handle_key_down(&doc, &right).unwrap();
//! assert_eq!(outcome.cell, Some(cells[2]));
//! assert!(outcome.default_prevented);
//!
//! // And the cursor wraps back around.
//! let outcome = nav.handle_key_down(&doc, &right).unwrap();
//! assert_eq!(outcome.position, CellPosition::new(0, 0));
//! ```
//!
//! ## Sparse tables
//!
//! The navigable column count is the length of the first row. Rows shorter than
//! that have absent positions, which are skipped exactly like empty cells.
//!
//! A lap around an axis that finds no filled cell is reported as
//! [`GridError::NoFilledCell`] rather than looping.
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events for cursor steps and resets.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod matrix;
mod navigator;
mod step;

pub use error::GridError;
pub use matrix::{CellMatrix, CellPosition, build_matrix};
pub use navigator::{GridNavigator, NavOutcome};
pub use step::{Direction, step};
