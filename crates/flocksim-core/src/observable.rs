//! Observable delegate for quackers.
//!
//! A quacker does not manage observers itself: it owns one [`Observable`]
//! and forwards `register_observer`/`notify_observers` to it. This keeps the
//! notification bookkeeping in a single place while leaving each quacker free
//! to decide where in its own `quack` the notification happens.

use std::borrow::Cow;
use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::RwLock;

use crate::quacker::{QuackObserver, SharedObserver};

/// Holds the weak observer list for one quacker.
///
/// Observers are stored as weak references in registration order. `notify`
/// walks the list front to back and invokes `update` on every observer that
/// is still alive. Entries whose observer has been dropped are skipped
/// silently and stay in the list; over a very long run the list can
/// accumulate dead slots, which matches the source model this simulator
/// reproduces.
///
/// Duplicate registration is not deduplicated: registering the same observer
/// twice means two `update` calls per notification.
pub struct Observable {
    subject: Cow<'static, str>,
    observers: RwLock<Vec<Weak<dyn QuackObserver>>>,
}

impl Observable {
    /// Create a delegate for the named subject.
    pub fn new(subject: impl Into<Cow<'static, str>>) -> Self {
        Self {
            subject: subject.into(),
            observers: RwLock::new(Vec::new()),
        }
    }

    /// The name of the quacker this delegate belongs to.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Append a weak reference to the observer.
    pub fn register(&self, observer: &SharedObserver) {
        tracing::trace!(subject = %self.subject, "Observer registered");
        self.observers.write().push(Arc::downgrade(observer));
    }

    /// Notify every live observer, in registration order.
    pub fn notify(&self) {
        let snapshot: Vec<Weak<dyn QuackObserver>> = self.observers.read().clone();
        for entry in &snapshot {
            if let Some(observer) = entry.upgrade() {
                observer.update(self);
            }
        }
    }

    /// Number of registered slots, dead entries included.
    pub fn observer_count(&self) -> usize {
        self.observers.read().len()
    }

    /// Number of registered observers that are still alive.
    pub fn live_observer_count(&self) -> usize {
        self.observers
            .read()
            .iter()
            .filter(|entry| entry.strong_count() > 0)
            .count()
    }
}

impl fmt::Debug for Observable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("subject", &self.subject)
            .field("observer_count", &self.observer_count())
            .finish()
    }
}
