// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focus trap basics.
//!
//! Trap focus in a small confirmation dialog: Tab cycling at the boundaries,
//! moving focus inside without "leaving", Escape, and leaving for real.
//!
//! Run:
//! - `cargo run -p understory_demos --example focus_trap_basics`

use std::cell::Cell;
use std::rc::Rc;

use ui_events::keyboard::{Key, Modifiers, NamedKey};
use understory_demos::{init_tracing, label};
use understory_element_tree::{Document, Element, ElementFlags, ElementKind, ElementTree, NodeId};
use understory_focus_trap::{DeferredQueue, FocusTrap, Propagation, TrapConfig};

fn main() {
    init_tracing();

    // page > [search input, dialog > [title, body > [name input, hidden help link], ok, cancel]]
    let mut doc = Document::new();
    let page = doc.insert(None, Element::new(ElementKind::Generic));
    let search = doc.insert(Some(page), Element::new(ElementKind::Input));
    let dialog = doc.insert(Some(page), Element::new(ElementKind::Generic));
    let title = doc.insert(Some(dialog), Element::new(ElementKind::Generic));
    doc.set_text(title, "Rename file");
    let body = doc.insert(Some(dialog), Element::new(ElementKind::Generic));
    let name = doc.insert(Some(body), Element::new(ElementKind::Input));
    let _help = doc.insert(
        Some(body),
        Element::new(ElementKind::Anchor).with_flags(ElementFlags::HREF | ElementFlags::HIDDEN),
    );
    let ok = doc.insert(Some(dialog), Element::new(ElementKind::Button));
    doc.set_text(ok, "OK");
    let cancel = doc.insert(Some(dialog), Element::new(ElementKind::Button));
    doc.set_text(cancel, "Cancel");

    let left = Rc::new(Cell::new(0_u32));
    let closed = Rc::new(Cell::new(false));
    let (l, c) = (left.clone(), closed.clone());
    let config = TrapConfig {
        trap_enabled: true,
        ..TrapConfig::default()
    }
    .on_focus_left(move || l.set(l.get() + 1))
    .on_escape(move || c.set(true));

    let queue = DeferredQueue::new();
    let mut trap = FocusTrap::activate(dialog, config, &queue);
    let mut focused: Option<NodeId> = None;

    // The host's focus primitive: focus-out, focus-in, then drain deferred work.
    let mut move_focus = |trap: &mut FocusTrap<NodeId>, to: NodeId| {
        if focused.is_some_and(|from| doc.contains(dialog, from)) {
            trap.handle_focus_out();
        }
        focused = Some(to);
        if let Err(err) = trap.handle_focus_in(&doc, to) {
            println!("configuration error: {err}");
        }
        queue.run_until_idle();
        println!("  focus -> {}", label(&doc, to));
        to
    };

    println!("Open dialog, focus the name field");
    let mut at = move_focus(&mut trap, name);
    if let Some(b) = trap.boundaries() {
        println!("  boundaries: {} .. {}", label(&doc, b.first), label(&doc, b.last));
    }

    let tab = Key::Named(NamedKey::Tab);
    for (what, modifiers) in [
        ("Shift+Tab on first", Modifiers::SHIFT),
        ("Tab on last", Modifiers::empty()),
    ] {
        println!("{what}");
        let response = trap.handle_key_down(at, &tab, modifiers);
        if let Some(next) = response.focus {
            at = move_focus(&mut trap, next);
        }
    }

    println!("Move to OK inside the dialog");
    at = move_focus(&mut trap, ok);
    println!("  focus-left calls so far: {}", left.get());

    println!("Escape");
    let response = trap.handle_key_down(at, &Key::Named(NamedKey::Escape), Modifiers::empty());
    println!(
        "  closed: {}, stopped: {}",
        closed.get(),
        response.propagation == Propagation::StopImmediate
    );

    println!("Click the page search box");
    move_focus(&mut trap, search);
    println!("  focus-left calls: {}", left.get());

    trap.dispose();
    println!("Disposed; phase is {:?}", trap.phase());
}
