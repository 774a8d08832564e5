// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focus trap sessions: Tab cycling, Escape handling, and focus-left detection.
//!
//! ## Usage
//!
//! 1) Activate a [`FocusTrap`] for a container with a [`TrapConfig`] and a shared
//!    [`DeferredQueue`].
//! 2) Forward the container's focus-in, focus-out and key-down events to
//!    [`FocusTrap::handle_focus_in`], [`FocusTrap::handle_focus_out`] and
//!    [`FocusTrap::handle_key_down`]. Apply the returned [`KeyResponse`].
//! 3) Drain the queue with [`DeferredQueue::run_until_idle`] after each event turn;
//!    that is when "focus left" is decided.
//! 4) Call [`FocusTrap::reactivate`] when the container is re-bound, and
//!    [`FocusTrap::dispose`] (or drop the trap) when done.
//!
//! ## Lifecycle
//!
//! ```text
//! activate ──► Armed ──(first descendant focus-in, trapping on)──► Locked
//!                │                                                   │
//!                └──────────────── dispose / drop ───────────────────┴──► Disposed
//! ```
//!
//! Boundaries are resolved once, on the first focus-in that lands on a descendant
//! rather than the container itself. They are not re-evaluated on later focus-ins;
//! if the container's content changes so that the boundaries become wrong,
//! reactivate the session.
//!
//! ## Minimal example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use ui_events::keyboard::{Key, Modifiers, NamedKey};
//! use understory_element_tree::{Document, Element, ElementKind};
//! use understory_focus_trap::{DeferredQueue, FocusTrap, TrapConfig};
//!
//! let mut doc = Document::new();
//! let dialog = doc.insert(None, Element::new(ElementKind::Generic));
//! let ok = doc.insert(Some(dialog), Element::new(ElementKind::Button));
//! let cancel = doc.insert(Some(dialog), Element::new(ElementKind::Button));
//!
//! let left = Rc::new(Cell::new(0));
//! let l = left.clone();
//! let queue = DeferredQueue::new();
//! let mut trap = FocusTrap::activate(
//!     dialog,
//!     TrapConfig::trapping().on_focus_left(move || l.set(l.get() + 1)),
//!     &queue,
//! );
//!
//! trap.handle_focus_in(&doc, ok).unwrap();
//!
//! // Tab on the last boundary wraps to the first.
//! let tab = Key::Named(NamedKey::Tab);
//! let response = trap.handle_key_down(cancel, &tab, Modifiers::empty());
//! assert!(response.default_prevented);
//! assert_eq!(response.focus, Some(ok));
//!
//! // Moving focus inside the container does not count as leaving.
//! trap.handle_focus_out();
//! trap.handle_focus_in(&doc, cancel).unwrap();
//! queue.run_until_idle();
//! assert_eq!(left.get(), 0);
//!
//! // Moving focus elsewhere does.
//! trap.handle_focus_out();
//! queue.run_until_idle();
//! assert_eq!(left.get(), 1);
//! ```

use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use smallvec::SmallVec;
use ui_events::keyboard::{Key, Modifiers, NamedKey};
use understory_element_tree::ElementTree;

use crate::deferred::{DeferredQueue, TaskId};
use crate::error::TrapError;
use crate::scan::{Boundaries, Boundary, find_boundary};

/// A host callback invoked by a trap session.
pub type TrapCallback = Box<dyn FnMut()>;

/// Configuration for a trap session.
///
/// The default has trapping disabled and no callbacks: the session only tracks
/// whether focus is inside the container.
#[derive(Default)]
pub struct TrapConfig {
    /// Cycle Tab / Shift+Tab between the first and last focusable descendants.
    pub trap_enabled: bool,
    /// Invoked once focus has genuinely left the container.
    pub on_focus_left: Option<TrapCallback>,
    /// Invoked on Escape; the key event is then stopped.
    pub on_escape: Option<TrapCallback>,
}

impl TrapConfig {
    /// A configuration with trapping enabled and no callbacks.
    #[must_use]
    pub fn trapping() -> Self {
        Self {
            trap_enabled: true,
            ..Self::default()
        }
    }

    /// Sets the focus-left callback.
    #[must_use]
    pub fn on_focus_left(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_focus_left = Some(Box::new(callback));
        self
    }

    /// Sets the Escape callback.
    #[must_use]
    pub fn on_escape(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_escape = Some(Box::new(callback));
        self
    }
}

impl fmt::Debug for TrapConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrapConfig")
            .field("trap_enabled", &self.trap_enabled)
            .field("on_focus_left", &self.on_focus_left.is_some())
            .field("on_escape", &self.on_escape.is_some())
            .finish()
    }
}

/// Lifecycle phase of a trap session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TrapPhase {
    /// Active; boundaries not resolved yet.
    Armed,
    /// Active; boundaries resolved and key interceptors installed.
    Locked,
    /// Torn down. Terminal.
    Disposed,
}

/// The Tab chord a key interceptor reacts to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TabChord {
    /// Tab without Shift.
    Forward,
    /// Shift+Tab.
    Backward,
}

impl TabChord {
    /// Returns `true` if `key` with `modifiers` is this chord.
    #[must_use]
    pub fn matches(self, key: &Key, modifiers: Modifiers) -> bool {
        if *key != Key::Named(NamedKey::Tab) {
            return false;
        }
        let shift = modifiers.contains(Modifiers::SHIFT);
        match self {
            Self::Forward => !shift,
            Self::Backward => shift,
        }
    }
}

/// A key interceptor installed on a boundary element.
///
/// When `chord` is pressed with `node` as the event target, the default Tab
/// navigation is prevented and focus is redirected to `redirect`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyInterceptor<K> {
    /// The boundary element listened on.
    pub node: K,
    /// The chord intercepted.
    pub chord: TabChord,
    /// Where focus goes instead.
    pub redirect: K,
}

/// How far a key event may propagate after the trap handled it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Propagation {
    /// Let the event continue to other listeners.
    #[default]
    Continue,
    /// Stop the event here, including other listeners on the same node.
    StopImmediate,
}

/// What the host should do with a key event after [`FocusTrap::handle_key_down`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyResponse<K> {
    /// Suppress the platform's default action (Tab navigation).
    pub default_prevented: bool,
    /// Propagation control.
    pub propagation: Propagation,
    /// Move focus to this node.
    pub focus: Option<K>,
}

impl<K> KeyResponse<K> {
    /// A response that leaves the event alone.
    #[must_use]
    pub const fn unhandled() -> Self {
        Self {
            default_prevented: false,
            propagation: Propagation::Continue,
            focus: None,
        }
    }

    /// Returns `true` if the trap did anything with the event.
    #[must_use]
    pub fn is_handled(&self) -> bool {
        self.default_prevented || self.propagation != Propagation::Continue || self.focus.is_some()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Subscription<K> {
    Key(KeyInterceptor<K>),
    FocusLeftCheck(TaskId),
}

struct Session<K> {
    container: K,
    trap_enabled: bool,
    has_focus: bool,
    phase: TrapPhase,
    boundaries: Option<Boundaries<K>>,
    subscriptions: SmallVec<[Subscription<K>; 3]>,
    on_focus_left: Option<TrapCallback>,
    on_escape: Option<TrapCallback>,
}

impl<K> Session<K> {
    fn new(container: K, config: TrapConfig) -> Self {
        Self {
            container,
            trap_enabled: config.trap_enabled,
            has_focus: false,
            phase: TrapPhase::Armed,
            boundaries: None,
            subscriptions: SmallVec::new(),
            on_focus_left: config.on_focus_left,
            on_escape: config.on_escape,
        }
    }

    fn has_pending_check(&self) -> bool {
        self.subscriptions
            .iter()
            .any(|s| matches!(s, Subscription::FocusLeftCheck(_)))
    }
}

/// One activation of a focus trap over one container.
///
/// The session exclusively owns its subscriptions: the two boundary key
/// interceptors and at most one pending focus-left check. Boundary elements are
/// held as plain ids; the tree owns the nodes.
///
/// Dropping the trap disposes it.
pub struct FocusTrap<K: Copy + Eq + fmt::Debug + 'static> {
    session: Rc<RefCell<Session<K>>>,
    queue: DeferredQueue,
}

impl<K: Copy + Eq + fmt::Debug + 'static> FocusTrap<K> {
    /// Begins a session over `container`.
    ///
    /// Deferred focus-left checks are scheduled on `queue`.
    #[must_use]
    pub fn activate(container: K, config: TrapConfig, queue: &DeferredQueue) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "focus_trap.activate",
            container = ?container,
            trap_enabled = config.trap_enabled
        );
        Self {
            session: Rc::new(RefCell::new(Session::new(container, config))),
            queue: queue.clone(),
        }
    }

    /// Disposes the current session and starts a fresh one.
    ///
    /// Every subscription of the previous session is released first, so no
    /// interceptor or pending check from it can fire afterwards.
    pub fn reactivate(&mut self, container: K, config: TrapConfig) {
        self.dispose();
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "focus_trap.reactivate",
            container = ?container,
            trap_enabled = config.trap_enabled
        );
        self.session = Rc::new(RefCell::new(Session::new(container, config)));
    }

    /// The trapped container.
    #[must_use]
    pub fn container(&self) -> K {
        self.session.borrow().container
    }

    /// The current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> TrapPhase {
        self.session.borrow().phase
    }

    /// Returns `true` while the container or one of its descendants holds focus.
    #[must_use]
    pub fn has_focus(&self) -> bool {
        self.session.borrow().has_focus
    }

    /// The resolved boundaries, once the session is [`TrapPhase::Locked`].
    #[must_use]
    pub fn boundaries(&self) -> Option<Boundaries<K>> {
        self.session.borrow().boundaries
    }

    /// The key interceptors currently installed.
    #[must_use]
    pub fn interceptors(&self) -> Vec<KeyInterceptor<K>> {
        self.session
            .borrow()
            .subscriptions
            .iter()
            .filter_map(|s| match s {
                Subscription::Key(interceptor) => Some(*interceptor),
                Subscription::FocusLeftCheck(_) => None,
            })
            .collect()
    }

    /// Number of subscriptions (interceptors plus pending checks) owned by the session.
    #[must_use]
    pub fn active_subscriptions(&self) -> usize {
        self.session.borrow().subscriptions.len()
    }

    /// Handles a focus-in event whose target is `target`.
    ///
    /// Targets outside the container are ignored. The first focus-in on a
    /// descendant (not the container itself) locks the boundaries when trapping
    /// is enabled.
    ///
    /// # Errors
    ///
    /// Returns [`TrapError::NoFocusableDescendant`] if trapping is enabled and the
    /// container has no visible focusable descendant. The session is disposed.
    pub fn handle_focus_in<T>(&mut self, tree: &T, target: K) -> Result<(), TrapError>
    where
        T: ElementTree<Id = K>,
    {
        let mut session = self.session.borrow_mut();
        if session.phase == TrapPhase::Disposed || !tree.contains(session.container, target) {
            return Ok(());
        }
        session.has_focus = true;

        if session.phase != TrapPhase::Armed
            || !session.trap_enabled
            || target == session.container
        {
            return Ok(());
        }

        let container = session.container;
        let first = find_boundary(tree, container, Boundary::First);
        let last = find_boundary(tree, container, Boundary::Last);
        let (Some(first), Some(last)) = (first, last) else {
            drop(session);
            self.dispose();
            return Err(TrapError::NoFocusableDescendant {
                first_found: first.is_some(),
            });
        };

        session.subscriptions.push(Subscription::Key(KeyInterceptor {
            node: first,
            chord: TabChord::Backward,
            redirect: last,
        }));
        session.subscriptions.push(Subscription::Key(KeyInterceptor {
            node: last,
            chord: TabChord::Forward,
            redirect: first,
        }));
        session.boundaries = Some(Boundaries { first, last });
        session.phase = TrapPhase::Locked;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "focus_trap.lock",
            container = ?container,
            first = ?first,
            last = ?last
        );
        Ok(())
    }

    /// Handles a focus-out event from the container or one of its descendants.
    ///
    /// Schedules a deferred check; if focus has not come back by the time it runs,
    /// the focus-left callback fires. At most one check is pending at a time.
    pub fn handle_focus_out(&mut self) {
        let mut session = self.session.borrow_mut();
        if session.phase == TrapPhase::Disposed {
            return;
        }
        session.has_focus = false;
        if session.has_pending_check() {
            return;
        }
        drop(session);

        let weak = Rc::downgrade(&self.session);
        let id = self
            .queue
            .schedule_with(move |id| move || run_focus_left_check(&weak, id));
        self.session
            .borrow_mut()
            .subscriptions
            .push(Subscription::FocusLeftCheck(id));
    }

    /// Handles a key-down event targeted at `target`.
    ///
    /// - Shift+Tab on the first boundary and Tab on the last boundary are
    ///   intercepted: default prevented, focus redirected to the other boundary.
    /// - Escape invokes the Escape callback, if any, and stops the event
    ///   immediately so stacked sessions do not handle it twice.
    ///
    /// Anything else is left alone.
    pub fn handle_key_down(&mut self, target: K, key: &Key, modifiers: Modifiers) -> KeyResponse<K> {
        let mut response = KeyResponse::unhandled();
        let escape = {
            let mut session = self.session.borrow_mut();
            if session.phase == TrapPhase::Disposed {
                return response;
            }
            let hit = session.subscriptions.iter().find_map(|s| match s {
                Subscription::Key(i) if i.node == target && i.chord.matches(key, modifiers) => {
                    Some(i.redirect)
                }
                _ => None,
            });
            if let Some(redirect) = hit {
                response.default_prevented = true;
                response.focus = Some(redirect);
            }

            if *key == Key::Named(NamedKey::Escape) {
                session.on_escape.take()
            } else {
                None
            }
        };

        if let Some(mut callback) = escape {
            #[cfg(feature = "tracing")]
            tracing::debug!(message = "focus_trap.escape", target = ?target);
            callback();
            response.propagation = Propagation::StopImmediate;
            let mut session = self.session.borrow_mut();
            if session.phase != TrapPhase::Disposed && session.on_escape.is_none() {
                session.on_escape = Some(callback);
            }
        }
        response
    }

    /// Releases every subscription owned by the session and cancels pending checks.
    ///
    /// Returns `false` (doing nothing) if the session was already disposed.
    pub fn dispose(&mut self) -> bool {
        let (released, callbacks) = {
            let mut session = self.session.borrow_mut();
            if session.phase == TrapPhase::Disposed {
                return false;
            }
            session.phase = TrapPhase::Disposed;
            session.has_focus = false;
            session.boundaries = None;
            (
                core::mem::take(&mut session.subscriptions),
                (session.on_focus_left.take(), session.on_escape.take()),
            )
        };

        for subscription in &released {
            if let Subscription::FocusLeftCheck(id) = subscription {
                self.queue.cancel(*id);
            }
        }
        drop(callbacks);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "focus_trap.dispose",
            container = ?self.session.borrow().container,
            released = released.len()
        );
        true
    }
}

impl<K: Copy + Eq + fmt::Debug + 'static> Drop for FocusTrap<K> {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl<K: Copy + Eq + fmt::Debug + 'static> fmt::Debug for FocusTrap<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let session = self.session.borrow();
        f.debug_struct("FocusTrap")
            .field("container", &session.container)
            .field("phase", &session.phase)
            .field("has_focus", &session.has_focus)
            .field("boundaries", &session.boundaries)
            .field("subscriptions", &session.subscriptions.len())
            .finish_non_exhaustive()
    }
}

/// The deferred half of focus-out handling.
///
/// Re-validates liveness: a dropped or disposed session, or one that regained
/// focus, does nothing.
fn run_focus_left_check<K>(session: &Weak<RefCell<Session<K>>>, id: TaskId) {
    let Some(session) = session.upgrade() else {
        return;
    };
    let callback = {
        let mut state = session.borrow_mut();
        state
            .subscriptions
            .retain(|s| !matches!(s, Subscription::FocusLeftCheck(pending) if *pending == id));
        if state.phase == TrapPhase::Disposed || state.has_focus {
            return;
        }
        state.on_focus_left.take()
    };

    if let Some(mut callback) = callback {
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "focus_trap.focus_left");
        callback();
        let mut state = session.borrow_mut();
        if state.phase != TrapPhase::Disposed && state.on_focus_left.is_none() {
            state.on_focus_left = Some(callback);
        }
    }
}
