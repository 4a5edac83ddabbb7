//! Core quacker traits.
//!
//! This module defines the fundamental capability of the pond: producing a
//! call. Everything that can sound off, from a single duck or an adapted
//! goose to a whole flock, implements [`Quacker`], and a driver treats them all
//! the same way.

use std::sync::Arc;

use crate::observable::Observable;
use crate::transcript::Transcript;

/// Anything that can produce a call.
///
/// `quack` takes no domain input, returns nothing, and always succeeds. Its
/// only effects are appending call text to the transcript, propagating to
/// wrapped or contained quackers, and notifying observers as its final step.
///
/// Every quacker is also observable: observer registration is part of the
/// capability, so a decorator or flock can forward it without downcasting.
///
/// # Example
///
/// ```
/// use flocksim_core::{MallardDuck, Quacker, Transcript};
///
/// let duck = MallardDuck::new();
/// let transcript = Transcript::new();
/// duck.quack(&transcript);
///
/// assert_eq!(transcript.to_text(), MallardDuck::CALL);
/// ```
pub trait Quacker: QuackObservable + Send + Sync {
    /// Produce this quacker's call into the transcript.
    fn quack(&self, log: &Transcript);
}

/// The registration half of the observer protocol.
///
/// Implementers hold one internally-owned [`Observable`] delegate and forward
/// both operations to it (or, for a decorator, to the wrapped quacker).
pub trait QuackObservable {
    /// Register an observer to be notified after this quacker acts.
    ///
    /// Registration holds only a weak reference: it never extends the
    /// observer's lifetime. Registering the same observer twice yields two
    /// notifications per quack.
    fn register_observer(&self, observer: &SharedObserver);

    /// Notify all live registered observers.
    fn notify_observers(&self);
}

/// An observer of quacking.
pub trait QuackObserver: Send + Sync {
    /// Called after the source has acted. `source` is the observable
    /// delegate of the quacker that just quacked.
    fn update(&self, source: &Observable);
}

/// A boxed, exclusively owned quacker.
pub type BoxedQuacker = Box<dyn Quacker>;

/// A shared, reference-counted observer.
pub type SharedObserver = Arc<dyn QuackObserver>;
