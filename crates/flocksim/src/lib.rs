//! # Flocksim - A Pattern-Driven Duck Pond Simulator
//!
//! Flocksim composes one small capability, "can produce a call", through
//! adapters, decorators, factories, flocks, and observers, and lets a driver
//! run the whole pond with a single `quack`.
//!
//! ## Features
//!
//! - **One capability**: everything on the pond is a [`Quacker`]
//! - **Adaptation**: a honking [`Goose`] joins the flock behind a
//!   [`GooseAdapter`]
//! - **Counting**: the [`CountingDuckFactory`] product line tallies every
//!   quack in a shared, explicitly-injected [`QuackCounter`]
//! - **Composition**: a [`Flock`] of quackers (and nested flocks) quacks as
//!   one, in insertion order
//! - **Observation**: weakly-held observers such as the [`Quackologist`]
//!   hear about every quack
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use flocksim::prelude::*;
//!
//! let factory = CountingDuckFactory::with_fresh_counter();
//! let counter = factory.counter();
//! let quackologist = Arc::new(Quackologist::new());
//!
//! let simulator = Simulator::new()
//!     .with_observer(Arc::clone(&quackologist) as SharedObserver);
//!
//! let transcript = simulator.run(&factory, &SimConfig::default());
//!
//! assert_eq!(counter.total(), 7); // four mains + three nested mallards
//! assert!(!quackologist.is_empty());
//! println!("{}", transcript.to_text());
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                  Your driver                    │
//! ├─────────────────────────────────────────────────┤
//! │               flocksim (facade)                 │
//! │            Simulator + SimConfig                │
//! │  ┌──────────────────────┬────────────────────┐  │
//! │  │ flocksim-core        │ flocksim-observe   │  │
//! │  │ (quackers, flocks,   │ (counter, counting │  │
//! │  │  adapter, factories) │  line, observers)  │  │
//! │  └──────────────────────┴────────────────────┘  │
//! └─────────────────────────────────────────────────┘
//! ```

pub mod config;

// Re-export from sub-crates
pub use flocksim_core::{
    BoxedQuacker, DuckCall, DuckFactory, Flock, Goose, GooseAdapter, MallardDuck, MemberId,
    Observable, QuackObservable, QuackObserver, Quacker, RedheadDuck, RubberDuck,
    SharedObserver, StandardDuckFactory, Transcript, behavior,
};
pub use flocksim_observe::{
    CountingDuckFactory, CountingQuacker, LoggingObserver, QuackCounter, Quackologist,
    SimulationId, SimulationReport,
};

pub use config::{ConfigError, DuckKind, SimConfig};

/// The scenario driver: builds the pond and quacks it once.
///
/// A `Simulator` owns the observers to attach. It registers them on every
/// duck it creates and on both flocks before the top-level quack, so a
/// single observer hears each individual duck as well as the groups.
#[derive(Default)]
pub struct Simulator {
    observers: Vec<SharedObserver>,
}

impl Simulator {
    /// Create a simulator with no observers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an observer to everything this simulator creates.
    pub fn with_observer(mut self, observer: SharedObserver) -> Self {
        self.observers.push(observer);
        self
    }

    /// Quack a single quacker.
    pub fn simulate(&self, quacker: &dyn Quacker, log: &Transcript) {
        quacker.quack(log);
    }

    /// Run the compound scenario with the classic configuration.
    pub fn run_default(&self, factory: &dyn DuckFactory) -> Transcript {
        self.run(factory, &SimConfig::default())
    }

    /// Run the compound scenario.
    ///
    /// Creates the configured roster from the factory, adapts a goose if
    /// asked, nests a mallard sub-flock inside the main flock, registers the
    /// simulator's observers, and quacks the main flock once. The returned
    /// transcript holds every call in production order.
    pub fn run(&self, factory: &dyn DuckFactory, config: &SimConfig) -> Transcript {
        let transcript = Transcript::new();
        let mut main_flock = Flock::named("Main Flock");

        for kind in &config.roster {
            let duck = kind.create(factory);
            self.observe(duck.as_ref());
            main_flock.add(duck);
        }

        if config.include_goose {
            let goose: Box<dyn Quacker> = Box::new(GooseAdapter::new(Goose::new()));
            self.observe(goose.as_ref());
            main_flock.add(goose);
        }

        if config.nested_mallards > 0 {
            let mut mallard_flock = Flock::named("Mallard Flock");
            for _ in 0..config.nested_mallards {
                let duck = factory.create_mallard();
                self.observe(duck.as_ref());
                mallard_flock.add(duck);
            }
            self.observe(&mallard_flock);
            main_flock.add(Box::new(mallard_flock));
        }

        self.observe(&main_flock);

        tracing::info!(
            roster = config.roster.len(),
            nested_mallards = config.nested_mallards,
            goose = config.include_goose,
            "Simulating flock"
        );
        self.simulate(&main_flock, &transcript);

        transcript
    }

    fn observe(&self, quacker: &dyn Quacker) {
        for observer in &self.observers {
            quacker.register_observer(observer);
        }
    }
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::Simulator;
    pub use crate::config::{ConfigError, DuckKind, SimConfig};
    pub use flocksim_core::prelude::*;
    pub use flocksim_observe::prelude::*;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_default_scenario_call_order() {
        let simulator = Simulator::new();
        let transcript = simulator.run_default(&StandardDuckFactory::new());

        assert_eq!(
            transcript.calls(),
            vec![
                MallardDuck::CALL,
                RedheadDuck::CALL,
                DuckCall::CALL,
                RubberDuck::CALL,
                Goose::HONK,
                MallardDuck::CALL,
                MallardDuck::CALL,
                MallardDuck::CALL,
            ]
        );
    }

    #[test]
    fn test_counting_line_counts_factory_products_only() {
        let factory = CountingDuckFactory::with_fresh_counter();
        let counter = factory.counter();

        let transcript = Simulator::new().run_default(&factory);

        // Four mains plus three nested mallards; the goose is adapted
        // outside the factory and stays uncounted.
        assert_eq!(counter.total(), 7);
        assert_eq!(transcript.len(), 8);
    }

    #[test]
    fn test_observer_hears_every_duck_and_both_flocks() {
        let quackologist = Arc::new(Quackologist::new());
        let simulator =
            Simulator::new().with_observer(Arc::clone(&quackologist) as SharedObserver);

        simulator.run_default(&StandardDuckFactory::new());

        let sightings = quackologist.sightings();
        assert_eq!(sightings.len(), 10); // 7 ducks + goose + 2 flocks
        assert_eq!(sightings.first().map(String::as_str), Some("Mallard Duck"));
        assert_eq!(sightings.last().map(String::as_str), Some("Main Flock"));
    }

    #[test]
    fn test_empty_config_produces_empty_transcript() {
        let config = SimConfig {
            roster: Vec::new(),
            nested_mallards: 0,
            include_goose: false,
        };
        let factory = CountingDuckFactory::with_fresh_counter();
        let counter = factory.counter();

        let transcript = Simulator::new().run(&factory, &config);

        assert!(transcript.is_empty());
        assert_eq!(counter.total(), 0);
    }

    #[test]
    fn test_roster_order_is_respected() {
        let config = SimConfig {
            roster: vec![DuckKind::RubberDuck, DuckKind::Mallard],
            nested_mallards: 0,
            include_goose: false,
        };

        let transcript = Simulator::new().run(&StandardDuckFactory::new(), &config);
        assert_eq!(
            transcript.calls(),
            vec![RubberDuck::CALL, MallardDuck::CALL]
        );
    }
}
