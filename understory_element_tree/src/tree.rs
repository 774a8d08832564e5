// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`ElementTree`] trait: read-only structure access for interaction kernels.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::Element;

/// Read-only view of an element hierarchy.
///
/// Hosts implement this over whatever tree they already have (a DOM mirror, a
/// widget tree, an accessibility tree). [`Document`](crate::Document) is a ready-made
/// arena implementation.
///
/// Stale or unknown ids must be tolerated: [`ElementTree::element`] returns `None`
/// and [`ElementTree::children`] returns an empty slice.
pub trait ElementTree {
    /// Node handle. Handles are compared by identity only.
    type Id: Copy + Eq + Debug;

    /// Returns the element data for `id`, or `None` if `id` is not a live node.
    fn element(&self, id: Self::Id) -> Option<Element>;

    /// Returns the children of `id` in document order.
    fn children(&self, id: Self::Id) -> &[Self::Id];

    /// Returns the parent of `id`, if any.
    fn parent(&self, id: Self::Id) -> Option<Self::Id>;

    /// Returns the text directly owned by `id` (not including descendants).
    fn own_text(&self, id: Self::Id) -> &str;

    /// Returns `true` if `node` is `ancestor` or one of its descendants.
    fn contains(&self, ancestor: Self::Id, node: Self::Id) -> bool {
        let mut cursor = Some(node);
        while let Some(current) = cursor {
            if current == ancestor {
                return true;
            }
            cursor = self.parent(current);
        }
        false
    }

    /// Returns `true` if `id` or any of its descendants owns non-empty text.
    ///
    /// This mirrors an empty-string check on the node's concatenated text
    /// content: whitespace counts as content.
    fn has_text_content(&self, id: Self::Id) -> bool
    where
        Self: Sized,
    {
        core::iter::once(id)
            .chain(self.descendants(id))
            .any(|node| !self.own_text(node).is_empty())
    }

    /// Returns an iterator over the descendants of `root` in document order
    /// (pre-order, `root` excluded).
    fn descendants(&self, root: Self::Id) -> Descendants<'_, Self>
    where
        Self: Sized,
    {
        Descendants::new(self, root)
    }
}

/// Pre-order iterator over the descendants of a node.
///
/// Created by [`ElementTree::descendants`].
pub struct Descendants<'a, T: ElementTree> {
    tree: &'a T,
    stack: Vec<T::Id>,
}

impl<'a, T: ElementTree> Descendants<'a, T> {
    fn new(tree: &'a T, root: T::Id) -> Self {
        let mut stack = Vec::new();
        stack.extend(tree.children(root).iter().rev().copied());
        Self { tree, stack }
    }
}

impl<T: ElementTree> Iterator for Descendants<'_, T> {
    type Item = T::Id;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.stack.pop()?;
        self.stack
            .extend(self.tree.children(next).iter().rev().copied());
        Some(next)
    }
}

impl<T: ElementTree> Debug for Descendants<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Descendants")
            .field("pending", &self.stack)
            .finish_non_exhaustive()
    }
}
