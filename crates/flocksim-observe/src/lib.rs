//! Flocksim Observability
//!
//! This crate provides the observation side of the flocksim pond simulator:
//!
//! - [`QuackCounter`]: the shared, explicitly-injected quack tally
//! - [`CountingQuacker`] / [`CountingDuckFactory`]: the counted product line
//! - [`LoggingObserver`] / [`Quackologist`]: observer implementations
//! - [`SimulationReport`]: driver-facing result rendering
//!
//! # Counting quacks
//!
//! ```
//! use flocksim_core::{DuckFactory, Flock, Quacker, Transcript};
//! use flocksim_observe::CountingDuckFactory;
//!
//! let factory = CountingDuckFactory::with_fresh_counter();
//! let counter = factory.counter();
//!
//! let mut flock = Flock::new();
//! flock.add(factory.create_mallard());
//! flock.add(factory.create_rubber_duck());
//! flock.quack(&Transcript::new());
//!
//! assert_eq!(counter.total(), 2);
//! ```
//!
//! # Watching the pond
//!
//! ```ignore
//! let quackologist = Arc::new(Quackologist::new());
//! duck.register_observer(&(quackologist.clone() as SharedObserver));
//! duck.quack(&transcript);
//! println!("{:?}", quackologist.sightings());
//! ```

pub mod counter;
pub mod counting;
pub mod observers;
pub mod report;

// Re-export main types
pub use counter::QuackCounter;
pub use counting::{CountingDuckFactory, CountingQuacker};
pub use observers::{LoggingObserver, Quackologist};
pub use report::{SimulationId, SimulationReport};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::counter::QuackCounter;
    pub use crate::counting::{CountingDuckFactory, CountingQuacker};
    pub use crate::observers::{LoggingObserver, Quackologist};
    pub use crate::report::{SimulationId, SimulationReport};
}
