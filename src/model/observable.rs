//! Single-threaded observable cells.
//!
//! An [`Observable`] holds a value and a list of subscriber callbacks.
//!
//! # Invariants
//!
//! 1. Subscribing delivers the current value immediately, then every later
//!    change.
//! 2. Subscribers are notified in registration order, once per change.
//! 3. Setting a value equal to the current one is a no-op (no version bump,
//!    no notifications).
//! 4. Dropping a [`Subscription`] removes the callback before the next
//!    notification cycle.
//! 5. A callback may publish to the cell it observes. The new value is
//!    queued and delivered to everyone once the current pass is over, so
//!    every subscriber sees values in publish order and [`Observable::get`]
//!    inside a callback returns the value being delivered.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};

type Callback<T> = Rc<RefCell<dyn FnMut(&T)>>;

struct Subscriber<T> {
    id: u64,
    callback: Callback<T>,
}

struct Inner<T> {
    value: T,
    version: u64,
    next_id: u64,
    subscribers: Vec<Subscriber<T>>,
    notifying: bool,
    pending: VecDeque<T>,
}

/// A shared, version-tracked value with change notification.
///
/// Cloning an `Observable` creates a new handle to the same cell.
pub struct Observable<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Observable")
            .field("value", &inner.value)
            .field("version", &inner.version)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

impl<T: Clone + PartialEq + 'static> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                version: 0,
                next_id: 0,
                subscribers: Vec::new(),
                notifying: false,
                pending: VecDeque::new(),
            })),
        }
    }

    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Number of changes since construction.
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    /// Replaces the value and notifies subscribers if it changed.
    ///
    /// Called from inside a callback, the value is queued behind the pass in
    /// progress. Returns whether a change was published.
    pub fn set(&self, value: T) -> bool {
        {
            let mut inner = self.inner.borrow_mut();
            let latest = inner.pending.back().unwrap_or(&inner.value);
            if *latest == value {
                return false;
            }
            inner.version += 1;
            inner.pending.push_back(value);
            if inner.notifying {
                return true;
            }
            inner.notifying = true;
        }
        self.flush();
        true
    }

    /// Registers `callback` and invokes it right away with the current value.
    pub fn subscribe(&self, callback: impl FnMut(&T) + 'static) -> Subscription {
        let callback: Callback<T> = Rc::new(RefCell::new(callback));
        let (id, current, nested) = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.subscribers.push(Subscriber {
                id,
                callback: Rc::clone(&callback),
            });
            let nested = inner.notifying;
            inner.notifying = true;
            (id, inner.value.clone(), nested)
        };

        {
            let mut f = callback.borrow_mut();
            (*f)(&current);
        }
        if !nested {
            self.flush();
        }

        let weak: Weak<RefCell<Inner<T>>> = Rc::downgrade(&self.inner);
        Subscription {
            unsubscribe: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.borrow_mut().subscribers.retain(|s| s.id != id);
                }
            })),
        }
    }

    /// Applies queued values one at a time and notifies every subscriber of
    /// each. Clears the notifying flag once the queue is empty.
    fn flush(&self) {
        loop {
            let (current, callbacks) = {
                let mut inner = self.inner.borrow_mut();
                let Some(next) = inner.pending.pop_front() else {
                    inner.notifying = false;
                    return;
                };
                inner.value = next.clone();
                let callbacks: Vec<Callback<T>> = inner
                    .subscribers
                    .iter()
                    .map(|s| Rc::clone(&s.callback))
                    .collect();
                (next, callbacks)
            };

            // Callbacks run without the cell borrowed so they may read or set it.
            for callback in callbacks {
                // A callback still running further up the stack is skipped
                if let Ok(mut f) = callback.try_borrow_mut() {
                    (*f)(&current);
                }
            }
        }
    }
}

/// RAII guard returned by [`Observable::subscribe`]. Unsubscribes on drop.
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Unsubscribes now instead of at drop.
    pub fn cancel(mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}
