// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Understory interaction demos.

use tracing::Level;
use understory_element_tree::{Document, Element, ElementKind, ElementTree, NodeId};

/// Installs a `tracing` subscriber that prints the kernels' debug events.
///
/// Set `UNDERSTORY_TRACE=1` to also see per-step trace events.
pub fn init_tracing() {
    let level = if std::env::var_os("UNDERSTORY_TRACE").is_some() {
        Level::TRACE
    } else {
        Level::DEBUG
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .try_init();
}

/// Builds a table whose cells hold `rows`' texts; an empty string is an empty cell.
///
/// Returns the document, the table, and the cell ids row by row.
pub fn text_table(rows: &[&[&str]]) -> (Document, NodeId, Vec<Vec<NodeId>>) {
    let mut doc = Document::new();
    let table = doc.insert(None, Element::new(ElementKind::Table));
    let mut cells = Vec::with_capacity(rows.len());
    for (r, texts) in rows.iter().enumerate() {
        let tr = doc.insert(Some(table), Element::new(ElementKind::TableRow));
        let kind = if r == 0 {
            ElementKind::HeaderCell
        } else {
            ElementKind::DataCell
        };
        let row = texts
            .iter()
            .map(|text| {
                let cell = doc.insert(Some(tr), Element::new(kind));
                doc.set_text(cell, *text);
                cell
            })
            .collect();
        cells.push(row);
    }
    (doc, table, cells)
}

/// Short human-readable label for a node: its kind plus its text, if any.
pub fn label(doc: &Document, id: NodeId) -> String {
    let kind = doc
        .element(id)
        .map_or_else(|| "<gone>".to_owned(), |e| format!("{:?}", e.kind));
    let text = doc.text_content(id);
    if text.is_empty() {
        kind
    } else {
        format!("{kind} {text:?}")
    }
}
