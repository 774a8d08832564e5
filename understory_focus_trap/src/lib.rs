// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_focus_trap --heading-base-level=0

//! Understory Focus Trap: keep keyboard focus inside a container.
//!
//! Modal dialogs, popovers and menus need three keyboard behaviors:
//!
//! - **Tab cycling**: Tab on the last focusable descendant wraps to the first, and
//!   Shift+Tab on the first wraps to the last.
//! - **Escape**: a host callback, with the key event stopped so stacked traps do
//!   not all react.
//! - **Focus left**: a host callback once focus has _really_ left the container,
//!   not merely moved between two of its descendants.
//!
//! This crate provides those behaviors as a small, host-driven state machine:
//!
//! - [`scan`] finds the first and last visible focusable descendants of a container
//!   over any [`ElementTree`](understory_element_tree::ElementTree).
//! - [`FocusTrap`] is one activation of the trap. The host forwards focus-in,
//!   focus-out and key-down events and applies the returned [`KeyResponse`]
//!   (prevent default, stop propagation, move focus).
//! - [`DeferredQueue`] is where the focus-left decision is deferred to. The host
//!   drains it after each event turn.
//!
//! Boundaries are wired lazily on the first focus-in that lands on a descendant.
//! Sessions own their subscriptions; [`FocusTrap::dispose`] (or dropping the trap)
//! releases them all and cancels pending checks, and [`FocusTrap::reactivate`]
//! starts over for a new container.
//!
//! ## Minimal example
//!
//! ```rust
//! use ui_events::keyboard::{Key, Modifiers, NamedKey};
//! use understory_element_tree::{Document, Element, ElementKind};
//! use understory_focus_trap::{DeferredQueue, FocusTrap, Propagation, TrapConfig};
//!
//! let mut doc = Document::new();
//! let dialog = doc.insert(None, Element::new(ElementKind::Generic));
//! let only = doc.insert(Some(dialog), Element::new(ElementKind::Button));
//!
//! let queue = DeferredQueue::new();
//! let mut trap = FocusTrap::activate(
//!     dialog,
//!     TrapConfig::trapping().on_escape(|| { /* close the dialog */ }),
//!     &queue,
//! );
//! trap.handle_focus_in(&doc, only).unwrap();
//!
//! // A single focusable element is both boundaries: Tab keeps focus on it.
//! let tab = trap.handle_key_down(only, &Key::Named(NamedKey::Tab), Modifiers::empty());
//! assert_eq!(tab.focus, Some(only));
//!
//! let esc = trap.handle_key_down(only, &Key::Named(NamedKey::Escape), Modifiers::empty());
//! assert_eq!(esc.propagation, Propagation::StopImmediate);
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` debug events for activation, locking, Escape,
//!   focus-left and disposal.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod deferred;
pub mod scan;

mod error;
mod trap;

pub use deferred::{DeferredQueue, TaskId};
pub use error::TrapError;
pub use scan::{Boundaries, Boundary, boundaries, find_boundary};
pub use trap::{
    FocusTrap, KeyInterceptor, KeyResponse, Propagation, TabChord, TrapCallback, TrapConfig,
    TrapPhase,
};
