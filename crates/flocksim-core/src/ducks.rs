//! The resident ducks.
//!
//! Four leaf quackers, each with a fixed call. They carry no state of their
//! own beyond the observable delegate every quacker owns; they exist to be
//! combined: wrapped by decorators, grouped into flocks, or produced by
//! factories.

use crate::observable::Observable;
use crate::quacker::{QuackObservable, Quacker, SharedObserver};
use crate::transcript::Transcript;

/// The common pond duck.
///
/// # Example
///
/// ```
/// use flocksim_core::{MallardDuck, Quacker, Transcript};
///
/// let transcript = Transcript::new();
/// MallardDuck::new().quack(&transcript);
/// assert_eq!(transcript.to_text(), "Mallard Duck quack.");
/// ```
pub struct MallardDuck {
    observable: Observable,
}

impl MallardDuck {
    /// The mallard's call.
    pub const CALL: &'static str = "Mallard Duck quack.";

    /// Create a mallard.
    pub fn new() -> Self {
        Self {
            observable: Observable::new("Mallard Duck"),
        }
    }
}

impl Default for MallardDuck {
    fn default() -> Self {
        Self::new()
    }
}

impl Quacker for MallardDuck {
    fn quack(&self, log: &Transcript) {
        log.record(Self::CALL);
        self.observable.notify();
    }
}

impl QuackObservable for MallardDuck {
    fn register_observer(&self, observer: &SharedObserver) {
        self.observable.register(observer);
    }

    fn notify_observers(&self) {
        self.observable.notify();
    }
}

/// The redhead duck.
pub struct RedheadDuck {
    observable: Observable,
}

impl RedheadDuck {
    /// The redhead's call.
    pub const CALL: &'static str = "RedHeadDuck quack.";

    /// Create a redhead.
    pub fn new() -> Self {
        Self {
            observable: Observable::new("Redhead Duck"),
        }
    }
}

impl Default for RedheadDuck {
    fn default() -> Self {
        Self::new()
    }
}

impl Quacker for RedheadDuck {
    fn quack(&self, log: &Transcript) {
        log.record(Self::CALL);
        self.observable.notify();
    }
}

impl QuackObservable for RedheadDuck {
    fn register_observer(&self, observer: &SharedObserver) {
        self.observable.register(observer);
    }

    fn notify_observers(&self) {
        self.observable.notify();
    }
}

/// A hunter's duck call. Not a duck, but it quacks on demand.
pub struct DuckCall {
    observable: Observable,
}

impl DuckCall {
    /// The duck call's... call.
    pub const CALL: &'static str = "Duckcall Kwak";

    /// Create a duck call.
    pub fn new() -> Self {
        Self {
            observable: Observable::new("Duck Call"),
        }
    }
}

impl Default for DuckCall {
    fn default() -> Self {
        Self::new()
    }
}

impl Quacker for DuckCall {
    fn quack(&self, log: &Transcript) {
        log.record(Self::CALL);
        self.observable.notify();
    }
}

impl QuackObservable for DuckCall {
    fn register_observer(&self, observer: &SharedObserver) {
        self.observable.register(observer);
    }

    fn notify_observers(&self) {
        self.observable.notify();
    }
}

/// A bathtub rubber duck.
pub struct RubberDuck {
    observable: Observable,
}

impl RubberDuck {
    /// The rubber duck's squeak.
    pub const CALL: &'static str = "RubberDuck squack.";

    /// Create a rubber duck.
    pub fn new() -> Self {
        Self {
            observable: Observable::new("Rubber Duck"),
        }
    }
}

impl Default for RubberDuck {
    fn default() -> Self {
        Self::new()
    }
}

impl Quacker for RubberDuck {
    fn quack(&self, log: &Transcript) {
        log.record(Self::CALL);
        self.observable.notify();
    }
}

impl QuackObservable for RubberDuck {
    fn register_observer(&self, observer: &SharedObserver) {
        self.observable.register(observer);
    }

    fn notify_observers(&self) {
        self.observable.notify();
    }
}
