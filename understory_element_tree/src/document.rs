// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arena-backed [`Document`]: a concrete [`ElementTree`] with generational ids.

use alloc::string::String;
use alloc::vec::Vec;

use crate::{Element, ElementFlags, ElementTree, NodeId};

#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

#[derive(Clone, Debug)]
struct Node {
    element: Element,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    text: String,
}

/// An arena of elements with parent/child links and owned text.
///
/// ## Example
///
/// ```
/// use understory_element_tree::{Document, Element, ElementFlags, ElementKind, ElementTree};
///
/// let mut doc = Document::new();
/// let dialog = doc.insert(None, Element::new(ElementKind::Generic));
/// let close = doc.insert(Some(dialog), Element::new(ElementKind::Button));
/// doc.set_text(close, "Close");
///
/// assert!(doc.contains(dialog, close));
/// assert_eq!(doc.children(dialog), &[close]);
/// assert!(doc.has_text_content(dialog));
///
/// doc.set_flags(close, ElementFlags::DISABLED);
/// assert!(!doc.element(close).unwrap().is_focusable());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Document {
    slots: Vec<Slot>,
    free: Vec<u32>,
    roots: Vec<NodeId>,
}

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `element` as the last child of `parent`, or as a new root when `parent` is `None`.
    ///
    /// A stale `parent` is treated as `None`. Slots freed by [`Document::remove`] are
    /// reused before new ones are allocated.
    ///
    /// # Panics
    ///
    /// Panics if more than `u32::MAX` nodes are alive at once.
    pub fn insert(&mut self, parent: Option<NodeId>, element: Element) -> NodeId {
        let parent = parent.filter(|&p| self.is_alive(p));
        let node = Node {
            element,
            parent,
            children: Vec::new(),
            text: String::new(),
        };

        let id = if let Some(idx) = self.free.pop() {
            let slot = &mut self.slots[idx as usize];
            slot.generation = slot.generation.wrapping_add(1);
            slot.node = Some(node);
            NodeId::new(idx, slot.generation)
        } else {
            let idx =
                u32::try_from(self.slots.len()).expect("too many live nodes for NodeId (u32)");
            self.slots.push(Slot {
                generation: 1,
                node: Some(node),
            });
            NodeId::new(idx, 1)
        };

        match parent.and_then(|p| self.node_mut(p)) {
            Some(parent_node) => parent_node.children.push(id),
            None => self.roots.push(id),
        }
        id
    }

    /// Removes `id` and its whole subtree. Returns `false` if `id` was stale.
    pub fn remove(&mut self, id: NodeId) -> bool {
        if !self.is_alive(id) {
            return false;
        }

        let parent = self.node(id).and_then(|n| n.parent);
        match parent.and_then(|p| self.node_mut(p)) {
            Some(parent_node) => parent_node.children.retain(|&c| c != id),
            None => self.roots.retain(|&r| r != id),
        }

        let mut stack = Vec::from([id]);
        while let Some(next) = stack.pop() {
            let slot = &mut self.slots[next.idx()];
            if let Some(node) = slot.node.take() {
                stack.extend(node.children);
                self.free.push(next.0);
            }
        }
        true
    }

    /// Returns `true` if `id` refers to a live node.
    #[must_use]
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Returns the top-level nodes in insertion order.
    #[must_use]
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Replaces the flags of `id`. No-op for stale ids.
    pub fn set_flags(&mut self, id: NodeId, flags: ElementFlags) {
        if let Some(node) = self.node_mut(id) {
            node.element.flags = flags;
        }
    }

    /// Adds `flags` to the existing flags of `id`. No-op for stale ids.
    pub fn insert_flags(&mut self, id: NodeId, flags: ElementFlags) {
        if let Some(node) = self.node_mut(id) {
            node.element.flags.insert(flags);
        }
    }

    /// Removes `flags` from the existing flags of `id`. No-op for stale ids.
    pub fn remove_flags(&mut self, id: NodeId, flags: ElementFlags) {
        if let Some(node) = self.node_mut(id) {
            node.element.flags.remove(flags);
        }
    }

    /// Replaces the text directly owned by `id`. No-op for stale ids.
    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) {
        if let Some(node) = self.node_mut(id) {
            node.text = text.into();
        }
    }

    /// Returns the concatenated text of `id` and its descendants in document order.
    #[must_use]
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::from(self.own_text(id));
        for node in self.descendants(id) {
            out.push_str(self.own_text(node));
        }
        out
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        let slot = self.slots.get(id.idx())?;
        if slot.generation != id.1 {
            return None;
        }
        slot.node.as_ref()
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let slot = self.slots.get_mut(id.idx())?;
        if slot.generation != id.1 {
            return None;
        }
        slot.node.as_mut()
    }
}

impl ElementTree for Document {
    type Id = NodeId;

    fn element(&self, id: NodeId) -> Option<Element> {
        self.node(id).map(|n| n.element)
    }

    fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id)
            .map(|n| n.children.as_slice())
            .unwrap_or_default()
    }

    fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    fn own_text(&self, id: NodeId) -> &str {
        self.node(id).map_or("", |n| n.text.as_str())
    }
}
