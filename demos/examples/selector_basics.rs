// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selector basics.
//!
//! Two independent selector groups: a single-select size picker and a
//! multi-select topping list with keyboard selection.
//!
//! Run:
//! - `cargo run -p understory_demos --example selector_basics`

use ui_events::keyboard::{Key, NamedKey};
use understory_demos::init_tracing;
use understory_selector::{SelectionMode, Selectee, SelectorConfig, SelectorGroup};

fn main() {
    init_tracing();

    let sizes = SelectorGroup::new(SelectorConfig::default());
    let toppings = SelectorGroup::new(SelectorConfig {
        mode: SelectionMode::Multiple,
        deselect_on_click: true,
    });

    for (name, group) in [("sizes", &sizes), ("toppings", &toppings)] {
        group.subscribe(move |change| {
            println!(
                "  [{name}] activated {:?} -> {:?}{}",
                change.latest,
                change.all_selected,
                if change.changed { "" } else { " (unchanged)" }
            );
        });
    }

    let small = Selectee::new("small", &sizes);
    let large = Selectee::new("large", &sizes);
    let cheese = Selectee::new("cheese", &toppings).with_keyboard(true);
    let olives = Selectee::new("olives", &toppings).with_keyboard(true);

    println!("Click small, then large");
    small.on_click();
    large.on_click();
    println!("Click large again (single select without deselect)");
    large.on_click();

    println!("Space on cheese and olives, Enter does nothing");
    cheese.on_key_down(&Key::Character(" ".into()));
    olives.on_key_down(&Key::Character(" ".into()));
    olives.on_key_down(&Key::Named(NamedKey::Enter));
    println!("Click cheese to deselect it");
    cheese.on_click();

    println!(
        "aria-multiselectable: sizes={} toppings={}",
        sizes.aria_multiselectable(),
        toppings.aria_multiselectable()
    );
    for item in [&small, &large, &cheese, &olives] {
        println!("  {:>6}: aria-selected={}", item.value(), item.is_selected());
    }
}
