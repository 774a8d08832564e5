// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid navigation basics.
//!
//! Walk a small data table with arrow keys: wrap-around at the edges, empty
//! cells skipped, and the first Tab onto the table landing on the top-left cell.
//!
//! Run:
//! - `cargo run -p understory_demos --example grid_nav_basics`

use ui_events::keyboard::{Key, NamedKey};
use understory_demos::{init_tracing, label, text_table};
use understory_grid_nav::GridNavigator;

fn main() {
    init_tracing();

    let (doc, table, _) = text_table(&[
        &["Item", "Qty", "Price"],
        &["Apples", "", "1.20"],
        &["Pears", "4", ""],
    ]);
    let mut nav = GridNavigator::from_table(&doc, table);
    println!(
        "Snapshot: {} rows x {} columns",
        nav.matrix().row_count(),
        nav.matrix().col_count()
    );

    println!("Tab onto the table");
    if let Some(pos) = nav.on_container_focus(table) {
        println!("  cursor {pos:?}");
    }

    let keys = [
        NamedKey::ArrowLeft,
        NamedKey::ArrowDown,
        NamedKey::ArrowRight,
        NamedKey::ArrowRight,
        NamedKey::ArrowDown,
        NamedKey::ArrowDown,
        NamedKey::Enter,
    ];
    for named in keys {
        let key = Key::Named(named);
        match nav.handle_key_down(&doc, &key) {
            Ok(outcome) => {
                let cell = outcome
                    .cell
                    .map_or_else(|| "-".to_owned(), |cell| label(&doc, cell));
                println!(
                    "{key:?}: {:?} {cell} (prevent default: {})",
                    outcome.position, outcome.default_prevented
                );
            }
            Err(err) => println!("{key:?}: {err}"),
        }
    }
}
