//! Flocksim Core
//!
//! This crate provides the duck domain for the flocksim pond simulator:
//!
//! - [`Quacker`]: the single-call sound capability everything implements
//! - [`MallardDuck`], [`RedheadDuck`], [`DuckCall`], [`RubberDuck`]: the
//!   resident leaf quackers
//! - [`GooseAdapter`]: presents a honking [`Goose`] as a quacker
//! - [`Flock`]: an ordered group of quackers that quacks as one
//! - [`Observable`] / [`QuackObserver`]: weak-reference notification after a
//!   quacker acts
//! - [`DuckFactory`] / [`StandardDuckFactory`]: product-line selection
//! - [`behavior`]: swappable flight and voice strategies
//!
//! # Quacking into a transcript
//!
//! All sound lands in a [`Transcript`] rather than on stdout, so drivers
//! render once at the end and tests assert on exact output:
//!
//! ```
//! use flocksim_core::prelude::*;
//!
//! let mut flock = Flock::new();
//! flock.add(Box::new(MallardDuck::new()));
//! flock.add(Box::new(GooseAdapter::new(Goose::new())));
//!
//! let transcript = Transcript::new();
//! flock.quack(&transcript);
//!
//! assert_eq!(transcript.calls(), vec!["Mallard Duck quack.", "Goose honk."]);
//! ```
//!
//! # Observation
//!
//! Observers are registered per quacker and held weakly: registration never
//! keeps an observer alive, and a dropped observer is silently skipped:
//!
//! ```ignore
//! let duck = MallardDuck::new();
//! duck.register_observer(&quackologist);
//! duck.quack(&transcript); // quackologist.update(...) runs last
//! ```

pub mod adapter;
pub mod behavior;
pub mod ducks;
pub mod factory;
pub mod flock;
pub mod observable;
pub mod quacker;
pub mod transcript;

// Re-export main types
pub use adapter::{Goose, GooseAdapter};
pub use ducks::{DuckCall, MallardDuck, RedheadDuck, RubberDuck};
pub use factory::{DuckFactory, StandardDuckFactory};
pub use flock::{Flock, MemberId};
pub use observable::Observable;
pub use quacker::{BoxedQuacker, QuackObservable, QuackObserver, Quacker, SharedObserver};
pub use transcript::Transcript;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::adapter::{Goose, GooseAdapter};
    pub use crate::ducks::{DuckCall, MallardDuck, RedheadDuck, RubberDuck};
    pub use crate::factory::{DuckFactory, StandardDuckFactory};
    pub use crate::flock::{Flock, MemberId};
    pub use crate::observable::Observable;
    pub use crate::quacker::{
        BoxedQuacker, QuackObservable, QuackObserver, Quacker, SharedObserver,
    };
    pub use crate::transcript::Transcript;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prelude_imports() {
        use crate::prelude::*;

        let _ = Transcript::new();
        let _ = Flock::new();
        let _: BoxedQuacker = Box::new(MallardDuck::new());
    }
}
