//! Observer implementations.

use parking_lot::RwLock;

use flocksim_core::{Observable, QuackObserver};

/// An observer that reports every notification through `tracing`.
#[derive(Debug, Default)]
pub struct LoggingObserver;

impl LoggingObserver {
    /// Create a logging observer.
    pub fn new() -> Self {
        Self
    }
}

impl QuackObserver for LoggingObserver {
    fn update(&self, source: &Observable) {
        tracing::info!(subject = source.subject(), "Quack observed");
    }
}

/// A quackologist: collects a sighting for every notification it receives.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use flocksim_core::{MallardDuck, QuackObservable, Quacker, SharedObserver, Transcript};
/// use flocksim_observe::Quackologist;
///
/// let quackologist = Arc::new(Quackologist::new());
/// let duck = MallardDuck::new();
/// duck.register_observer(&(Arc::clone(&quackologist) as SharedObserver));
///
/// duck.quack(&Transcript::new());
/// assert_eq!(quackologist.sightings(), vec!["Mallard Duck"]);
/// ```
#[derive(Debug, Default)]
pub struct Quackologist {
    sightings: RwLock<Vec<String>>,
}

impl Quackologist {
    /// Create a quackologist with an empty field notebook.
    pub fn new() -> Self {
        Self::default()
    }

    /// The subjects sighted so far, in notification order.
    pub fn sightings(&self) -> Vec<String> {
        self.sightings.read().clone()
    }

    /// Number of sightings.
    pub fn len(&self) -> usize {
        self.sightings.read().len()
    }

    /// Check if nothing has been sighted.
    pub fn is_empty(&self) -> bool {
        self.sightings.read().is_empty()
    }

    /// Forget all sightings.
    pub fn clear(&self) {
        self.sightings.write().clear();
    }
}

impl QuackObserver for Quackologist {
    fn update(&self, source: &Observable) {
        tracing::debug!(subject = source.subject(), "Sighting recorded");
        self.sightings.write().push(source.subject().to_string());
    }
}
