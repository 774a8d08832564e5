// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_selector --heading-base-level=0

//! Understory Selector: selector groups with click and keyboard selectees.
//!
//! A selector is a container whose items can be selected: a listbox, a set of
//! filter chips, a gallery. This crate models one as a **group**:
//!
//! - [`SelectorGroup`] owns the [`Selection`] and the group's [`SelectorConfig`]
//!   (single or multiple selection, and whether activating a selected item
//!   deselects it). It fans out a [`SelectionChange`] to its own subscribers after
//!   every activation.
//! - [`Selectee`] is one item. It holds a handle to its group and reports clicks
//!   (and, optionally, Space presses) to that group only.
//! - [`apply_selection`] is the pure policy behind every activation.
//!
//! Groups are independent: selectees of one group never affect another.
//!
//! ## Minimal example
//!
//! ```rust
//! use ui_events::keyboard::Key;
//! use understory_selector::{SelectionMode, Selectee, SelectorConfig, SelectorGroup};
//!
//! let group = SelectorGroup::new(SelectorConfig {
//!     mode: SelectionMode::Multiple,
//!     deselect_on_click: true,
//! });
//! assert!(group.aria_multiselectable());
//!
//! let red = Selectee::new("red", &group);
//! let blue = Selectee::new("blue", &group).with_keyboard(true);
//!
//! red.on_click();
//! blue.on_key_down(&Key::Character(" ".into()));
//! assert_eq!(group.selected(), ["red", "blue"]);
//!
//! // Clicking a selected item deselects it.
//! red.on_click();
//! assert!(!red.is_selected());
//! assert!(blue.is_selected());
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit a `tracing` debug event for every group notification.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod group;
mod policy;
mod selection;

pub use group::{SelectionChange, Selectee, SelectorGroup, SubscriberId};
pub use policy::{SelectionMode, SelectorConfig, apply_selection};
pub use selection::Selection;
