// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deferred task queue: the host's "run soon, after this event" hook.
//!
//! Focus moving between two descendants of a container produces a synchronous
//! focus-out/focus-in pair. Deciding "focus left" on the focus-out alone would be
//! wrong, so the decision is deferred to a task that runs after the current event
//! turn has finished.
//!
//! [`DeferredQueue`] is that deferral point. It is a plain FIFO of boxed closures
//! with cancellation; the host drains it with [`DeferredQueue::run_until_idle`]
//! after dispatching each event (the equivalent of a microtask checkpoint). No
//! timers are involved.
//!
//! Handles are cheap to clone and share one queue. The queue is single-threaded.
//!
//! ## Minimal example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use understory_focus_trap::deferred::DeferredQueue;
//!
//! let queue = DeferredQueue::new();
//! let hits = Rc::new(Cell::new(0));
//!
//! let h = hits.clone();
//! queue.schedule(move || h.set(h.get() + 1));
//! let h = hits.clone();
//! let cancelled = queue.schedule(move || h.set(h.get() + 10));
//! assert!(queue.cancel(cancelled));
//!
//! assert_eq!(queue.run_until_idle(), 1);
//! assert_eq!(hits.get(), 1);
//! ```

use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::rc::Rc;
use core::cell::RefCell;
use core::fmt;

/// Identifies a scheduled task so it can be cancelled.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

type Task = Box<dyn FnOnce()>;

#[derive(Default)]
struct QueueInner {
    next_id: u64,
    tasks: VecDeque<(TaskId, Task)>,
}

/// A FIFO of deferred tasks drained by the host after each event turn.
#[derive(Clone, Default)]
pub struct DeferredQueue {
    inner: Rc<RefCell<QueueInner>>,
}

impl DeferredQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `task` to run on the next drain.
    pub fn schedule(&self, task: impl FnOnce() + 'static) -> TaskId {
        self.schedule_with(|_| task)
    }

    /// Schedules a task built from its own [`TaskId`].
    ///
    /// Useful when the task needs to know its id, for example to deregister
    /// itself from an owner's bookkeeping when it runs.
    pub fn schedule_with<F>(&self, make: impl FnOnce(TaskId) -> F) -> TaskId
    where
        F: FnOnce() + 'static,
    {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = TaskId(inner.next_id);
            inner.next_id = inner.next_id.wrapping_add(1);
            id
        };
        let task: Task = Box::new(make(id));
        self.inner.borrow_mut().tasks.push_back((id, task));
        id
    }

    /// Cancels a pending task. Returns `false` if it already ran or was cancelled.
    pub fn cancel(&self, id: TaskId) -> bool {
        let removed = {
            let mut inner = self.inner.borrow_mut();
            inner
                .tasks
                .iter()
                .position(|(task_id, _)| *task_id == id)
                .and_then(|idx| inner.tasks.remove(idx))
        };
        // Dropped outside the borrow: a task's captures may own other handles.
        removed.is_some()
    }

    /// Returns the number of pending tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.borrow().tasks.len()
    }

    /// Returns `true` if no tasks are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().tasks.is_empty()
    }

    /// Runs pending tasks in FIFO order until the queue is empty, including tasks
    /// scheduled by the tasks themselves. Returns the number of tasks run.
    pub fn run_until_idle(&self) -> usize {
        let mut ran = 0;
        loop {
            let next = self.inner.borrow_mut().tasks.pop_front();
            let Some((_, task)) = next else {
                return ran;
            };
            task();
            ran += 1;
        }
    }
}

impl fmt::Debug for DeferredQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredQueue")
            .field("pending", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::Cell;

    #[test]
    fn runs_in_fifo_order() {
        let queue = DeferredQueue::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for i in 0..3 {
            let log = log.clone();
            queue.schedule(move || log.borrow_mut().push(i));
        }
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.run_until_idle(), 3);
        assert_eq!(*log.borrow(), vec![0, 1, 2]);
        assert!(queue.is_empty());
    }

    #[test]
    fn tasks_scheduled_while_draining_also_run() {
        let queue = DeferredQueue::new();
        let hits = Rc::new(Cell::new(0));
        let inner_queue = queue.clone();
        let h = hits.clone();
        queue.schedule(move || {
            h.set(h.get() + 1);
            let h = h.clone();
            inner_queue.schedule(move || h.set(h.get() + 1));
        });
        assert_eq!(queue.run_until_idle(), 2);
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn cancel_is_exactly_once() {
        let queue = DeferredQueue::new();
        let id = queue.schedule(|| {});
        assert!(queue.cancel(id));
        assert!(!queue.cancel(id));
        assert_eq!(queue.run_until_idle(), 0);
    }

    #[test]
    fn schedule_with_passes_own_id() {
        let queue = DeferredQueue::new();
        let seen = Rc::new(Cell::new(None));
        let s = seen.clone();
        let id = queue.schedule_with(move |id| move || s.set(Some(id)));
        queue.run_until_idle();
        assert_eq!(seen.get(), Some(id));
    }
}
