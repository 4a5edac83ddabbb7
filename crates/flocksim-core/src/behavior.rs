//! Swappable duck behaviors.
//!
//! Flight and voice are strategies a duck holds rather than methods it
//! hardcodes, so they can be replaced at runtime: a model duck that cannot
//! fly can be upgraded to rocket power mid-simulation.

use std::borrow::Cow;

use crate::transcript::Transcript;

/// How a duck flies.
pub trait FlyBehavior: Send + Sync {
    /// Perform the flight, recording the result.
    fn fly(&self, log: &Transcript);
}

/// Ordinary winged flight.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlyWithWings;

impl FlyBehavior for FlyWithWings {
    fn fly(&self, log: &Transcript) {
        log.record("I'm flying");
    }
}

/// No flight at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlyNoWay;

impl FlyBehavior for FlyNoWay {
    fn fly(&self, log: &Transcript) {
        log.record("I can't fly");
    }
}

/// Rocket-assisted flight.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlyRocketPowered;

impl FlyBehavior for FlyRocketPowered {
    fn fly(&self, log: &Transcript) {
        log.record("I'm flying with a rocket");
    }
}

/// How a duck sounds.
pub trait QuackBehavior: Send + Sync {
    /// Perform the call, recording the result.
    fn quack(&self, log: &Transcript);
}

/// A proper quack.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoudQuack;

impl QuackBehavior for LoudQuack {
    fn quack(&self, log: &Transcript) {
        log.record("Quack");
    }
}

/// No sound.
#[derive(Debug, Clone, Copy, Default)]
pub struct MuteQuack;

impl QuackBehavior for MuteQuack {
    fn quack(&self, log: &Transcript) {
        log.record("Silence");
    }
}

/// A rubber-duck squeak.
#[derive(Debug, Clone, Copy, Default)]
pub struct Squeak;

impl QuackBehavior for Squeak {
    fn quack(&self, log: &Transcript) {
        log.record("Squack");
    }
}

/// A duck whose flight and voice are pluggable strategies.
///
/// # Example
///
/// ```
/// use flocksim_core::behavior::{BehavioralDuck, FlyRocketPowered};
/// use flocksim_core::Transcript;
///
/// let mut duck = BehavioralDuck::model();
/// let transcript = Transcript::new();
///
/// duck.perform_fly(&transcript);
/// duck.set_fly_behavior(Box::new(FlyRocketPowered));
/// duck.perform_fly(&transcript);
///
/// assert_eq!(
///     transcript.calls(),
///     vec!["I can't fly", "I'm flying with a rocket"]
/// );
/// ```
pub struct BehavioralDuck {
    display: Cow<'static, str>,
    fly: Box<dyn FlyBehavior>,
    quack: Box<dyn QuackBehavior>,
}

impl BehavioralDuck {
    /// Create a duck with the given display line and behaviors.
    pub fn new(
        display: impl Into<Cow<'static, str>>,
        fly: Box<dyn FlyBehavior>,
        quack: Box<dyn QuackBehavior>,
    ) -> Self {
        Self {
            display: display.into(),
            fly,
            quack,
        }
    }

    /// A decoy: grounded, but it still quacks.
    pub fn model() -> Self {
        Self::new("I'm a model duck", Box::new(FlyNoWay), Box::new(LoudQuack))
    }

    /// A mallard: wings and a proper quack.
    pub fn mallard() -> Self {
        Self::new(
            "I'm a mallard duck",
            Box::new(FlyWithWings),
            Box::new(LoudQuack),
        )
    }

    /// Record the duck's display line.
    pub fn display(&self, log: &Transcript) {
        log.record(self.display.as_ref());
    }

    /// Fly with the current flight behavior.
    pub fn perform_fly(&self, log: &Transcript) {
        self.fly.fly(log);
    }

    /// Sound off with the current voice behavior.
    pub fn perform_quack(&self, log: &Transcript) {
        self.quack.quack(log);
    }

    /// Swim. Every duck swims the same way.
    pub fn swim(&self, log: &Transcript) {
        log.record("All ducks float, even decoys");
    }

    /// Replace the flight behavior.
    pub fn set_fly_behavior(&mut self, fly: Box<dyn FlyBehavior>) {
        self.fly = fly;
    }

    /// Replace the voice behavior.
    pub fn set_quack_behavior(&mut self, quack: Box<dyn QuackBehavior>) {
        self.quack = quack;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mallard_flies_and_quacks() {
        let duck = BehavioralDuck::mallard();
        let transcript = Transcript::new();

        duck.display(&transcript);
        duck.perform_quack(&transcript);
        duck.perform_fly(&transcript);

        assert_eq!(
            transcript.calls(),
            vec!["I'm a mallard duck", "Quack", "I'm flying"]
        );
    }

    #[test]
    fn test_model_duck_is_grounded() {
        let duck = BehavioralDuck::model();
        let transcript = Transcript::new();
        duck.perform_fly(&transcript);
        assert_eq!(transcript.to_text(), "I can't fly");
    }

    #[test]
    fn test_behaviors_swap_at_runtime() {
        let mut duck = BehavioralDuck::model();
        let transcript = Transcript::new();

        duck.perform_fly(&transcript);
        duck.set_fly_behavior(Box::new(FlyRocketPowered));
        duck.perform_fly(&transcript);

        duck.set_quack_behavior(Box::new(MuteQuack));
        duck.perform_quack(&transcript);

        assert_eq!(
            transcript.calls(),
            vec!["I can't fly", "I'm flying with a rocket", "Silence"]
        );
    }

    #[test]
    fn test_all_ducks_swim() {
        let transcript = Transcript::new();
        BehavioralDuck::model().swim(&transcript);
        BehavioralDuck::mallard().swim(&transcript);
        assert_eq!(
            transcript.calls(),
            vec!["All ducks float, even decoys"; 2]
        );
    }
}
