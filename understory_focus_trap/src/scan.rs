// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boundary scanning: find the first and last focusable descendants of a container.
//!
//! ## Rules
//!
//! - Traversal is depth-first; children are visited in document order for
//!   [`Boundary::First`] and in reverse document order for [`Boundary::Last`].
//! - A node that is not visible prunes its whole subtree: an invisible wrapper
//!   hides all of its (visible) children from the scan.
//! - The container is the search root and is never matched itself, even when it
//!   is focusable.
//! - Results are not cached. Re-scan after structural changes.
//!
//! ## Minimal example
//!
//! ```
//! use understory_element_tree::{Document, Element, ElementFlags, ElementKind};
//! use understory_focus_trap::scan::{Boundary, find_boundary};
//!
//! let mut doc = Document::new();
//! let dialog = doc.insert(None, Element::new(ElementKind::Generic).with_flags(ElementFlags::TABINDEX));
//! let ok = doc.insert(Some(dialog), Element::new(ElementKind::Button));
//! let cancel = doc.insert(Some(dialog), Element::new(ElementKind::Button));
//!
//! assert_eq!(find_boundary(&doc, dialog, Boundary::First), Some(ok));
//! assert_eq!(find_boundary(&doc, dialog, Boundary::Last), Some(cancel));
//! ```

use understory_element_tree::ElementTree;

/// Which end of a container to scan for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// First focusable descendant in document order.
    First,
    /// Last focusable descendant in document order.
    Last,
}

/// The pair of boundary elements of a container.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Boundaries<K> {
    /// First focusable descendant.
    pub first: K,
    /// Last focusable descendant.
    pub last: K,
}

/// Find the first or last focusable descendant of `container`.
///
/// Returns `None` if the container is invisible, stale, or has no visible
/// focusable descendant.
pub fn find_boundary<T: ElementTree>(
    tree: &T,
    container: T::Id,
    boundary: Boundary,
) -> Option<T::Id> {
    search(tree, container, boundary, true)
}

/// Resolve both boundaries of `container`, or `None` if it has no focusable descendant.
pub fn boundaries<T: ElementTree>(tree: &T, container: T::Id) -> Option<Boundaries<T::Id>> {
    let first = find_boundary(tree, container, Boundary::First)?;
    let last = find_boundary(tree, container, Boundary::Last)?;
    Some(Boundaries { first, last })
}

fn search<T: ElementTree>(tree: &T, node: T::Id, boundary: Boundary, is_root: bool) -> Option<T::Id> {
    let element = tree.element(node)?;
    if !element.is_visible() {
        return None;
    }
    if !is_root && element.is_focusable() {
        return Some(node);
    }

    let children = tree.children(node);
    match boundary {
        Boundary::First => children
            .iter()
            .find_map(|&child| search(tree, child, boundary, false)),
        Boundary::Last => children
            .iter()
            .rev()
            .find_map(|&child| search(tree, child, boundary, false)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use understory_element_tree::{Document, Element, ElementFlags, ElementKind, NodeId};

    fn container(doc: &mut Document) -> NodeId {
        doc.insert(None, Element::new(ElementKind::Generic))
    }

    fn button(doc: &mut Document, parent: NodeId) -> NodeId {
        doc.insert(Some(parent), Element::new(ElementKind::Button))
    }

    fn wrapper(doc: &mut Document, parent: NodeId) -> NodeId {
        doc.insert(Some(parent), Element::new(ElementKind::Generic))
    }

    #[test]
    fn first_and_last_in_document_order() {
        let mut doc = Document::new();
        let root = container(&mut doc);
        let w1 = wrapper(&mut doc, root);
        let a = button(&mut doc, w1);
        let b = button(&mut doc, w1);
        let w2 = wrapper(&mut doc, root);
        let c = button(&mut doc, w2);

        assert_eq!(find_boundary(&doc, root, Boundary::First), Some(a));
        assert_eq!(find_boundary(&doc, root, Boundary::Last), Some(c));
        assert_ne!(Some(b), find_boundary(&doc, root, Boundary::Last));
    }

    #[test]
    fn container_is_never_matched() {
        let mut doc = Document::new();
        let root = doc.insert(
            None,
            Element::new(ElementKind::Generic).with_flags(ElementFlags::TABINDEX),
        );
        assert_eq!(find_boundary(&doc, root, Boundary::First), None);
        assert_eq!(boundaries(&doc, root), None);

        let only = button(&mut doc, root);
        assert_eq!(
            boundaries(&doc, root),
            Some(Boundaries {
                first: only,
                last: only
            })
        );
    }

    #[test]
    fn invisible_wrapper_hides_visible_children() {
        let mut doc = Document::new();
        let root = container(&mut doc);
        let hidden = doc.insert(
            Some(root),
            Element::new(ElementKind::Generic).with_flags(ElementFlags::DISPLAY_NONE),
        );
        let _inside = button(&mut doc, hidden);
        let visible = button(&mut doc, root);

        assert_eq!(find_boundary(&doc, root, Boundary::First), Some(visible));
        assert_eq!(find_boundary(&doc, root, Boundary::Last), Some(visible));
    }

    #[test]
    fn focusable_node_matches_before_its_children() {
        let mut doc = Document::new();
        let root = container(&mut doc);
        let editable = doc.insert(
            Some(root),
            Element::new(ElementKind::Generic).with_flags(ElementFlags::CONTENT_EDITABLE),
        );
        let _nested = button(&mut doc, editable);

        // A matching ancestor wins in both directions; its subtree is not entered.
        assert_eq!(find_boundary(&doc, root, Boundary::First), Some(editable));
        assert_eq!(find_boundary(&doc, root, Boundary::Last), Some(editable));
    }

    #[test]
    fn disabled_and_hidden_controls_are_skipped() {
        let mut doc = Document::new();
        let root = container(&mut doc);
        let _disabled = doc.insert(
            Some(root),
            Element::new(ElementKind::Input).with_flags(ElementFlags::DISABLED),
        );
        let link = doc.insert(
            Some(root),
            Element::new(ElementKind::Anchor).with_flags(ElementFlags::HREF),
        );
        let _hidden = doc.insert(
            Some(root),
            Element::new(ElementKind::Button).with_flags(ElementFlags::VISIBILITY_HIDDEN),
        );

        assert_eq!(boundaries(&doc, root).map(|b| b.first), Some(link));
        assert_eq!(boundaries(&doc, root).map(|b| b.last), Some(link));
    }

    #[test]
    fn invisible_container_yields_nothing() {
        let mut doc = Document::new();
        let root = doc.insert(
            None,
            Element::new(ElementKind::Generic).with_flags(ElementFlags::HIDDEN),
        );
        button(&mut doc, root);
        assert_eq!(find_boundary(&doc, root, Boundary::First), None);
    }

    #[test]
    fn stale_container_yields_nothing() {
        let mut doc = Document::new();
        let root = container(&mut doc);
        button(&mut doc, root);
        doc.remove(root);
        assert_eq!(find_boundary(&doc, root, Boundary::Last), None);
    }
}
