// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selector groups and their selectees.
//!
//! A [`SelectorGroup`] is the selection channel for one logical selector (a
//! listbox, a tab strip, a set of cards). Every [`Selectee`] is built against a
//! group handle and reports activations to that group only, so two groups never
//! see each other's selections.
//!
//! Subscriptions are owned by the group: [`SelectorGroup::subscribe`] returns a
//! [`SubscriberId`] and [`SelectorGroup::unsubscribe`] removes it.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use ui_events::keyboard::Key;

use crate::{Selection, SelectorConfig, apply_selection};

/// Identifies a subscription on a [`SelectorGroup`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriberId(u64);

/// Emitted to subscribers after every activation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionChange<T> {
    /// Everything selected after the activation was applied.
    pub all_selected: Vec<T>,
    /// The value that was activated (whether it ended up selected or not).
    pub latest: T,
    /// Whether the activation changed the selection.
    pub changed: bool,
}

type Subscriber<T> = Rc<RefCell<Box<dyn FnMut(&SelectionChange<T>)>>>;

struct GroupState<T> {
    config: SelectorConfig,
    selection: Selection<T>,
    subscribers: Vec<(SubscriberId, Subscriber<T>)>,
    next_subscriber: u64,
}

/// Shared handle to one selector group.
///
/// Cloning the handle shares the group.
pub struct SelectorGroup<T> {
    state: Rc<RefCell<GroupState<T>>>,
}

impl<T> Clone for SelectorGroup<T> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
        }
    }
}

impl<T: Clone + PartialEq> SelectorGroup<T> {
    /// Creates a group with nothing selected.
    #[must_use]
    pub fn new(config: SelectorConfig) -> Self {
        Self {
            state: Rc::new(RefCell::new(GroupState {
                config,
                selection: Selection::new(),
                subscribers: Vec::new(),
                next_subscriber: 0,
            })),
        }
    }

    /// The group's configuration.
    #[must_use]
    pub fn config(&self) -> SelectorConfig {
        self.state.borrow().config
    }

    /// Replaces the configuration. The current selection is kept as is.
    pub fn set_config(&self, config: SelectorConfig) {
        self.state.borrow_mut().config = config;
    }

    /// The value for the container's `aria-multiselectable` attribute.
    #[must_use]
    pub fn aria_multiselectable(&self) -> bool {
        self.state.borrow().config.is_multiselect()
    }

    /// Registers a callback invoked after every activation in this group.
    pub fn subscribe(&self, callback: impl FnMut(&SelectionChange<T>) + 'static) -> SubscriberId {
        let mut state = self.state.borrow_mut();
        let id = SubscriberId(state.next_subscriber);
        state.next_subscriber += 1;
        let callback: Box<dyn FnMut(&SelectionChange<T>)> = Box::new(callback);
        state.subscribers.push((id, Rc::new(RefCell::new(callback))));
        id
    }

    /// Removes a subscription. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: SubscriberId) -> bool {
        let removed = {
            let mut state = self.state.borrow_mut();
            let idx = state.subscribers.iter().position(|(sid, _)| *sid == id);
            idx.map(|idx| state.subscribers.remove(idx))
        };
        removed.is_some()
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state.borrow().subscribers.len()
    }

    /// Reports the activation of `value`: applies it to the selection and fans the
    /// resulting [`SelectionChange`] out to this group's subscribers.
    ///
    /// Returns `true` if the selection changed.
    ///
    /// Subscribers may query or notify the group. A subscriber is not re-entered
    /// while it is running.
    pub fn notify(&self, value: T) -> bool {
        let (change, subscribers) = {
            let mut state = self.state.borrow_mut();
            let config = state.config;
            let changed = apply_selection(&mut state.selection, value.clone(), &config);
            let change = SelectionChange {
                all_selected: state.selection.items().to_vec(),
                latest: value,
                changed,
            };
            let subscribers: Vec<Subscriber<T>> =
                state.subscribers.iter().map(|(_, s)| Rc::clone(s)).collect();
            (change, subscribers)
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "selector.notify",
            changed = change.changed,
            selected = change.all_selected.len(),
            subscribers = subscribers.len()
        );

        for subscriber in subscribers {
            if let Ok(mut callback) = subscriber.try_borrow_mut() {
                callback(&change);
            }
        }
        change.changed
    }

    /// Returns `true` if `value` is selected.
    #[must_use]
    pub fn is_selected(&self, value: &T) -> bool {
        self.state.borrow().selection.contains(value)
    }

    /// A copy of the selected values, in selection order.
    #[must_use]
    pub fn selected(&self) -> Vec<T> {
        self.state.borrow().selection.items().to_vec()
    }

    /// The selection's revision counter.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.state.borrow().selection.revision()
    }

    /// Deselects everything without notifying subscribers.
    pub fn clear(&self) {
        self.state.borrow_mut().selection.clear();
    }
}

impl<T: fmt::Debug> fmt::Debug for SelectorGroup<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("SelectorGroup")
            .field("config", &state.config)
            .field("selection", &state.selection)
            .field("subscribers", &state.subscribers.len())
            .finish()
    }
}

/// One selectable item bound to a [`SelectorGroup`].
///
/// Clicking always activates the item. Space activates it only when keyboard
/// selection is enabled with [`Selectee::with_keyboard`].
#[derive(Debug)]
pub struct Selectee<T> {
    value: T,
    group: SelectorGroup<T>,
    select_with_keyboard: bool,
}

impl<T: Clone + PartialEq> Selectee<T> {
    /// Binds `value` to `group`. Keyboard selection starts disabled.
    #[must_use]
    pub fn new(value: T, group: &SelectorGroup<T>) -> Self {
        Self {
            value,
            group: group.clone(),
            select_with_keyboard: false,
        }
    }

    /// Enables or disables activation with Space.
    #[must_use]
    pub fn with_keyboard(mut self, enabled: bool) -> Self {
        self.select_with_keyboard = enabled;
        self
    }

    /// The item's value.
    #[must_use]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Whether Space activates the item.
    #[must_use]
    pub fn selects_with_keyboard(&self) -> bool {
        self.select_with_keyboard
    }

    /// Handles a click. Returns `true` if the group's selection changed.
    pub fn on_click(&self) -> bool {
        self.group.notify(self.value.clone())
    }

    /// Handles a key press. Returns `true` if the key activated the item.
    pub fn on_key_down(&self, key: &Key) -> bool {
        if !self.select_with_keyboard || !is_space(key) {
            return false;
        }
        self.group.notify(self.value.clone());
        true
    }

    /// The value for the item's `aria-selected` attribute.
    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.group.is_selected(&self.value)
    }
}

fn is_space(key: &Key) -> bool {
    matches!(key, Key::Character(c) if c == " " || c == "Space")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SelectionMode;
    use alloc::vec;
    use ui_events::keyboard::NamedKey;

    fn multi() -> SelectorConfig {
        SelectorConfig {
            mode: SelectionMode::Multiple,
            deselect_on_click: true,
        }
    }

    #[test]
    fn change_reports_latest_even_when_deselected() {
        let group = SelectorGroup::new(multi());
        let log = Rc::new(RefCell::new(Vec::new()));
        let l = log.clone();
        group.subscribe(move |change: &SelectionChange<u32>| l.borrow_mut().push(change.clone()));

        group.notify(1);
        group.notify(1);
        let log = log.borrow();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].all_selected, vec![1]);
        assert_eq!(log[1].all_selected, Vec::<u32>::new());
        assert_eq!(log[1].latest, 1);
        assert!(log[1].changed);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let group = SelectorGroup::new(SelectorConfig::default());
        let hits = Rc::new(RefCell::new(0));
        let h = hits.clone();
        let id = group.subscribe(move |_: &SelectionChange<u32>| *h.borrow_mut() += 1);
        group.notify(1);
        assert!(group.unsubscribe(id));
        assert!(!group.unsubscribe(id));
        group.notify(2);
        assert_eq!(*hits.borrow(), 1);
        assert_eq!(group.subscriber_count(), 0);
    }

    #[test]
    fn subscribers_may_query_the_group() {
        let group = SelectorGroup::new(SelectorConfig::default());
        let seen = Rc::new(RefCell::new(None));
        let (g, s) = (group.clone(), seen.clone());
        group.subscribe(move |change: &SelectionChange<u32>| {
            *s.borrow_mut() = Some(g.is_selected(&change.latest));
        });
        group.notify(7);
        assert_eq!(*seen.borrow(), Some(true));
    }

    #[test]
    fn space_needs_keyboard_selection() {
        let group = SelectorGroup::new(SelectorConfig::default());
        let plain = Selectee::new('a', &group);
        let keyed = Selectee::new('b', &group).with_keyboard(true);

        assert!(!plain.on_key_down(&Key::Character(" ".into())));
        assert!(!plain.is_selected());

        assert!(!keyed.on_key_down(&Key::Named(NamedKey::Enter)));
        assert!(keyed.on_key_down(&Key::Character(" ".into())));
        assert!(keyed.is_selected());

        assert!(plain.on_click());
        assert!(plain.is_selected());
        assert!(!keyed.is_selected());
    }
}
