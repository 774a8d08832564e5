// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_element_tree --heading-base-level=0

//! Understory Element Tree: a minimal element model for keyboard interaction kernels.
//!
//! Keyboard behaviors such as focus trapping and grid navigation only need a
//! small slice of what a real document tree offers:
//!
//! - Parent/child structure in document order.
//! - Which kind of element a node is (button, link, table cell, ...).
//! - A handful of attribute and computed-style facts: `href`, `disabled`,
//!   `tabindex`, `contenteditable`, `hidden`, `display: none`, `visibility: hidden`.
//! - Whether a node (or its subtree) has text content.
//!
//! This crate captures exactly that:
//!
//! - [`ElementKind`], [`ElementFlags`] and [`Element`] describe a node.
//!   [`Element::is_focusable`] and [`Element::is_visible`] implement the
//!   tag/attribute allowlist and the visibility rule used by focus scanning.
//! - [`ElementTree`] is the read-only trait the interaction kernels consume.
//!   Implement it over your own tree (a DOM mirror, a widget tree, an
//!   accessibility tree) to plug in.
//! - [`Document`] is a ready-made arena implementation with generational
//!   [`NodeId`]s, handy for hosts without a tree of their own and for tests.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_element_tree::{Document, Element, ElementFlags, ElementKind, ElementTree};
//!
//! let mut doc = Document::new();
//! let form = doc.insert(None, Element::new(ElementKind::Generic));
//! let name = doc.insert(Some(form), Element::new(ElementKind::Input));
//! let link = doc.insert(
//!     Some(form),
//!     Element::new(ElementKind::Anchor).with_flags(ElementFlags::HREF),
//! );
//!
//! let focusable: Vec<_> = doc
//!     .descendants(form)
//!     .filter(|&id| doc.element(id).is_some_and(|e| e.is_focusable() && e.is_visible()))
//!     .collect();
//! assert_eq!(focusable, vec![name, link]);
//! ```
//!
//! Node handles are non-owning: the tree owns its nodes, and kernels hold ids for
//! identity only. A removed node's [`NodeId`] never aliases a later node.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod document;
mod tree;
mod types;

pub use document::Document;
pub use tree::{Descendants, ElementTree};
pub use types::{Element, ElementFlags, ElementKind, NodeId};
