//! Goose adaptation.
//!
//! A [`Goose`] honks; it knows nothing about quacking. The [`GooseAdapter`]
//! presents it as a [`Quacker`] so a goose can join a flock, be simulated,
//! and be observed like any duck.

use crate::observable::Observable;
use crate::quacker::{QuackObservable, Quacker, SharedObserver};
use crate::transcript::Transcript;

/// A goose. Exposes its own native call, not the quacker capability.
#[derive(Debug, Default)]
pub struct Goose;

impl Goose {
    /// The goose's native call.
    pub const HONK: &'static str = "Goose honk.";

    /// Create a goose.
    pub fn new() -> Self {
        Self
    }

    /// Honk into the transcript.
    pub fn honk(&self, log: &Transcript) {
        log.record(Self::HONK);
    }
}

/// Presents a [`Goose`] as a [`Quacker`].
///
/// The adapter owns its goose and delegates `quack` straight to `honk`
/// without transforming anything: the adapted goose produces exactly its
/// native call text.
///
/// # Example
///
/// ```
/// use flocksim_core::{Goose, GooseAdapter, Quacker, Transcript};
///
/// let honker = GooseAdapter::new(Goose::new());
/// let transcript = Transcript::new();
/// honker.quack(&transcript);
///
/// assert_eq!(transcript.to_text(), Goose::HONK);
/// ```
pub struct GooseAdapter {
    goose: Goose,
    observable: Observable,
}

impl GooseAdapter {
    /// Adapt a goose.
    pub fn new(goose: Goose) -> Self {
        Self {
            goose,
            observable: Observable::new("Goose"),
        }
    }

    /// The wrapped goose.
    pub fn goose(&self) -> &Goose {
        &self.goose
    }
}

impl Quacker for GooseAdapter {
    fn quack(&self, log: &Transcript) {
        self.goose.honk(log);
        self.observable.notify();
    }
}

impl QuackObservable for GooseAdapter {
    fn register_observer(&self, observer: &SharedObserver) {
        self.observable.register(observer);
    }

    fn notify_observers(&self) {
        self.observable.notify();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adapter_emits_native_honk_unchanged() {
        let transcript = Transcript::new();
        let adapter = GooseAdapter::new(Goose::new());

        adapter.quack(&transcript);

        let direct = Transcript::new();
        adapter.goose().honk(&direct);

        assert_eq!(transcript.calls(), direct.calls());
        assert_eq!(transcript.to_text(), "Goose honk.");
    }

    #[test]
    fn test_adapter_is_a_quacker() {
        let transcript = Transcript::new();
        let quacker: Box<dyn Quacker> = Box::new(GooseAdapter::new(Goose::new()));
        quacker.quack(&transcript);
        assert_eq!(transcript.len(), 1);
    }
}
