// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the element tree: node identifiers, element kinds, and flags.

/// Identifier for a node in a [`Document`](crate::Document).
///
/// This is a small, copyable handle that stays stable across updates but becomes
/// invalid when the underlying slot is reused.
/// It consists of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed; any existing `NodeId` that pointed to that slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `NodeId`.
///
/// Interaction kernels hold `NodeId`s as non-owning handles: the document owns the
/// nodes, and a stale id simply stops resolving.
/// Use [`Document::is_alive`](crate::Document::is_alive) to check liveness.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// The kind of an element, as far as keyboard interaction is concerned.
///
/// Only the distinctions the interaction kernels care about are modeled; anything
/// else is [`ElementKind::Generic`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// A hyperlink. Focusable only with [`ElementFlags::HREF`].
    Anchor,
    /// An image-map area. Focusable only with [`ElementFlags::HREF`].
    Area,
    /// A form input. Focusable unless [`ElementFlags::DISABLED`].
    Input,
    /// A select box. Focusable unless [`ElementFlags::DISABLED`].
    Select,
    /// A multi-line text field. Focusable unless [`ElementFlags::DISABLED`].
    TextArea,
    /// A button. Focusable unless [`ElementFlags::DISABLED`].
    Button,
    /// An embedded frame. Always focusable.
    IFrame,
    /// An embedded object. Always focusable.
    Object,
    /// An embedded plugin. Always focusable.
    Embed,
    /// A table container.
    Table,
    /// A table row.
    TableRow,
    /// A header cell inside a row.
    HeaderCell,
    /// A data cell inside a row.
    DataCell,
    /// Any other element (containers, text wrappers, ...).
    #[default]
    Generic,
}

impl ElementKind {
    /// Returns `true` for header and data cells.
    #[must_use]
    pub const fn is_cell(self) -> bool {
        matches!(self, Self::HeaderCell | Self::DataCell)
    }
}

bitflags::bitflags! {
    /// Attribute and computed-style flags relevant to focusability and visibility.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ElementFlags: u8 {
        /// The element carries an `href`.
        const HREF              = 0b0000_0001;
        /// The element carries `disabled`.
        const DISABLED          = 0b0000_0010;
        /// The element carries a `tabindex` (any value).
        const TABINDEX          = 0b0000_0100;
        /// The element carries `contenteditable`.
        const CONTENT_EDITABLE  = 0b0000_1000;
        /// The element carries the `hidden` flag.
        const HIDDEN            = 0b0001_0000;
        /// Computed `display: none`.
        const DISPLAY_NONE      = 0b0010_0000;
        /// Computed `visibility: hidden`.
        const VISIBILITY_HIDDEN = 0b0100_0000;
    }
}

impl ElementFlags {
    /// Flags that make an element (and, for scanning purposes, its subtree) invisible.
    pub const INVISIBLE: Self = Self::HIDDEN
        .union(Self::DISPLAY_NONE)
        .union(Self::VISIBILITY_HIDDEN);
}

/// Per-node element data: kind plus flags.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Element {
    /// What kind of element this is.
    pub kind: ElementKind,
    /// Attribute and visibility flags.
    pub flags: ElementFlags,
}

impl Element {
    /// Creates an element of the given kind with no flags set.
    #[must_use]
    pub const fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            flags: ElementFlags::empty(),
        }
    }

    /// Returns a copy of this element with `flags` added.
    #[must_use]
    pub const fn with_flags(mut self, flags: ElementFlags) -> Self {
        self.flags = self.flags.union(flags);
        self
    }

    /// Returns `true` if the element is rendered: not `display: none`, not
    /// `visibility: hidden`, and not `hidden`.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        !self.flags.intersects(ElementFlags::INVISIBLE)
    }

    /// Returns `true` if the element is interactive according to the tag/attribute allowlist.
    ///
    /// Visibility is not considered here; see [`Element::is_visible`].
    #[must_use]
    pub const fn is_focusable(&self) -> bool {
        let by_kind = match self.kind {
            ElementKind::Anchor | ElementKind::Area => self.flags.contains(ElementFlags::HREF),
            ElementKind::Input
            | ElementKind::Select
            | ElementKind::TextArea
            | ElementKind::Button => !self.flags.contains(ElementFlags::DISABLED),
            ElementKind::IFrame | ElementKind::Object | ElementKind::Embed => true,
            _ => false,
        };
        by_kind
            || self
                .flags
                .intersects(ElementFlags::TABINDEX.union(ElementFlags::CONTENT_EDITABLE))
    }}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_need_href() {
        assert!(!Element::new(ElementKind::Anchor).is_focusable());
        assert!(
            Element::new(ElementKind::Anchor)
                .with_flags(ElementFlags::HREF)
                .is_focusable()
        );
        assert!(
            Element::new(ElementKind::Area)
                .with_flags(ElementFlags::HREF)
                .is_focusable()
        );
    }

    #[test]
    fn form_controls_respect_disabled() {
        for kind in [
            ElementKind::Input,
            ElementKind::Select,
            ElementKind::TextArea,
            ElementKind::Button,
        ] {
            assert!(Element::new(kind).is_focusable());
            assert!(
                !Element::new(kind)
                    .with_flags(ElementFlags::DISABLED)
                    .is_focusable()
            );
        }
    }

    #[test]
    fn tabindex_and_contenteditable_make_anything_focusable() {
        assert!(!Element::new(ElementKind::Generic).is_focusable());
        assert!(
            Element::new(ElementKind::Generic)
                .with_flags(ElementFlags::TABINDEX)
                .is_focusable()
        );
        assert!(
            Element::new(ElementKind::DataCell)
                .with_flags(ElementFlags::CONTENT_EDITABLE)
                .is_focusable()
        );
        // A disabled button with a tabindex is still reachable.
        assert!(
            Element::new(ElementKind::Button)
                .with_flags(ElementFlags::DISABLED | ElementFlags::TABINDEX)
                .is_focusable()
        );
    }

    #[test]
    fn embedded_content_is_always_focusable() {
        for kind in [ElementKind::IFrame, ElementKind::Object, ElementKind::Embed] {
            assert!(Element::new(kind).is_focusable());
        }
    }

    #[test]
    fn each_invisibility_flag_hides() {
        let button = Element::new(ElementKind::Button);
        assert!(button.is_visible());
        for flag in [
            ElementFlags::HIDDEN,
            ElementFlags::DISPLAY_NONE,
            ElementFlags::VISIBILITY_HIDDEN,
        ] {
            let hidden = button.with_flags(flag);
            assert!(!hidden.is_visible());
            assert!(hidden.is_focusable());
        }
    }
}
