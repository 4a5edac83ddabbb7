//! Counting decoration.
//!
//! A [`CountingQuacker`] wraps any quacker, preserves its contract exactly,
//! and bumps a shared [`QuackCounter`] after every delegated quack. The
//! [`CountingDuckFactory`] is the matching product line: every duck it
//! creates comes pre-wrapped, so a driver that wants counted ducks cannot
//! accidentally produce a bare one.

use std::sync::Arc;

use flocksim_core::{
    BoxedQuacker, DuckCall, DuckFactory, MallardDuck, QuackObservable, Quacker, RedheadDuck,
    RubberDuck, SharedObserver, Transcript,
};

use crate::counter::QuackCounter;

/// Wraps one quacker and counts its quacks.
///
/// The wrapped quacker is owned exclusively. `quack` delegates first, then
/// increments, so by the time the counter moves the call text is already in
/// the transcript and the inner quacker's observers have been notified.
/// Observer registration is forwarded to the wrapped quacker: decorating a
/// duck does not change who is observed.
///
/// # Example
///
/// ```
/// use flocksim_core::{MallardDuck, Quacker, Transcript};
/// use flocksim_observe::{CountingQuacker, QuackCounter};
///
/// let counter = QuackCounter::shared();
/// let duck = CountingQuacker::new(Box::new(MallardDuck::new()), counter.clone());
///
/// duck.quack(&Transcript::new());
/// assert_eq!(counter.total(), 1);
/// ```
pub struct CountingQuacker {
    inner: BoxedQuacker,
    counter: Arc<QuackCounter>,
}

impl CountingQuacker {
    /// Wrap a quacker with the given shared counter.
    pub fn new(inner: BoxedQuacker, counter: Arc<QuackCounter>) -> Self {
        Self { inner, counter }
    }

    /// The counter this decorator reports into.
    pub fn counter(&self) -> &Arc<QuackCounter> {
        &self.counter
    }
}

impl Quacker for CountingQuacker {
    fn quack(&self, log: &Transcript) {
        self.inner.quack(log);
        self.counter.increment();
    }
}

impl QuackObservable for CountingQuacker {
    fn register_observer(&self, observer: &SharedObserver) {
        self.inner.register_observer(observer);
    }

    fn notify_observers(&self) {
        self.inner.notify_observers();
    }
}

/// The counting product line: every duck arrives wrapped.
///
/// The factory owns the counter it injects, so all of its products report
/// into the same tally. Hand the same `Arc` to several factories to pool
/// their counts, or give each simulation a fresh one to keep them apart.
pub struct CountingDuckFactory {
    counter: Arc<QuackCounter>,
}

impl CountingDuckFactory {
    /// Create a factory reporting into the given counter.
    pub fn new(counter: Arc<QuackCounter>) -> Self {
        Self { counter }
    }

    /// Create a factory with its own fresh counter.
    pub fn with_fresh_counter() -> Self {
        Self::new(QuackCounter::shared())
    }

    /// The counter every product reports into.
    pub fn counter(&self) -> Arc<QuackCounter> {
        Arc::clone(&self.counter)
    }

    fn wrap(&self, inner: BoxedQuacker) -> BoxedQuacker {
        Box::new(CountingQuacker::new(inner, Arc::clone(&self.counter)))
    }
}

impl DuckFactory for CountingDuckFactory {
    fn create_mallard(&self) -> BoxedQuacker {
        self.wrap(Box::new(MallardDuck::new()))
    }

    fn create_redhead(&self) -> BoxedQuacker {
        self.wrap(Box::new(RedheadDuck::new()))
    }

    fn create_duck_call(&self) -> BoxedQuacker {
        self.wrap(Box::new(DuckCall::new()))
    }

    fn create_rubber_duck(&self) -> BoxedQuacker {
        self.wrap(Box::new(RubberDuck::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flocksim_core::{Flock, Goose, GooseAdapter, Observable, QuackObserver};
    use parking_lot::RwLock;

    #[test]
    fn test_decorated_duck_quacks_like_the_bare_one() {
        let counter = QuackCounter::shared();
        let factory = CountingDuckFactory::new(Arc::clone(&counter));

        let transcript = Transcript::new();
        factory.create_mallard().quack(&transcript);

        assert_eq!(transcript.to_text(), MallardDuck::CALL);
        assert_eq!(counter.total(), 1);
    }

    #[test]
    fn test_counter_totals_across_decorators() {
        let counter = QuackCounter::shared();
        let factory = CountingDuckFactory::new(Arc::clone(&counter));
        let transcript = Transcript::new();

        let mallard = factory.create_mallard();
        let rubber = factory.create_rubber_duck();

        mallard.quack(&transcript);
        rubber.quack(&transcript);
        mallard.quack(&transcript);

        assert_eq!(counter.total(), 3);
    }

    #[test]
    fn test_decorator_wraps_any_quacker() {
        let counter = QuackCounter::shared();
        let goose = CountingQuacker::new(
            Box::new(GooseAdapter::new(Goose::new())),
            Arc::clone(&counter),
        );

        let transcript = Transcript::new();
        goose.quack(&transcript);

        assert_eq!(transcript.to_text(), Goose::HONK);
        assert_eq!(counter.total(), 1);
    }

    #[test]
    fn test_flock_of_counted_ducks_counts_every_member() {
        let factory = CountingDuckFactory::with_fresh_counter();
        let counter = factory.counter();

        let mut flock = Flock::new();
        flock.add(factory.create_mallard());
        flock.add(factory.create_redhead());
        flock.add(factory.create_duck_call());
        flock.add(factory.create_rubber_duck());

        flock.quack(&Transcript::new());
        assert_eq!(counter.total(), 4);
    }

    struct Sightings(RwLock<Vec<String>>);
    impl QuackObserver for Sightings {
        fn update(&self, source: &Observable) {
            self.0.write().push(source.subject().to_string());
        }
    }

    #[test]
    fn test_registration_passes_through_to_the_wrapped_duck() {
        let factory = CountingDuckFactory::with_fresh_counter();
        let duck = factory.create_mallard();

        let observer = Arc::new(Sightings(RwLock::new(Vec::new())));
        duck.register_observer(&(Arc::clone(&observer) as SharedObserver));

        duck.quack(&Transcript::new());
        assert_eq!(observer.0.read().as_slice(), ["Mallard Duck"]);
    }

    #[test]
    fn test_unquacked_products_leave_the_counter_alone() {
        let factory = CountingDuckFactory::with_fresh_counter();
        let _mallard = factory.create_mallard();
        let _rubber = factory.create_rubber_duck();
        assert_eq!(factory.counter().total(), 0);
    }
}
