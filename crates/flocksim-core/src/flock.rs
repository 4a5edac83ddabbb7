//! Flocks: treating a group of quackers as one quacker.
//!
//! A [`Flock`] holds an ordered list of members and is itself a [`Quacker`]:
//! quacking a flock quacks every member in insertion order, recursing into
//! nested flocks. The whole pond can hang off a single top-level `quack`.

use std::borrow::Cow;
use std::fmt;

use crate::observable::Observable;
use crate::quacker::{BoxedQuacker, QuackObservable, Quacker, SharedObserver};
use crate::transcript::Transcript;

/// Identity handle for a flock member, returned by [`Flock::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemberId(u64);

/// An ordered, mutable group of quackers that quacks as one.
///
/// Members quack in exactly the order they were added, depth-first: a nested
/// flock finishes all of its own members before its parent moves on. An
/// empty flock quacks successfully and produces nothing.
///
/// Members are owned exclusively, so a flock can never end up inside its own
/// subtree, because adding a flock to another moves it.
///
/// # Example
///
/// ```
/// use flocksim_core::{Flock, MallardDuck, Quacker, RubberDuck, Transcript};
///
/// let mut flock = Flock::new();
/// flock.add(Box::new(MallardDuck::new()));
/// flock.add(Box::new(RubberDuck::new()));
///
/// let transcript = Transcript::new();
/// flock.quack(&transcript);
/// assert_eq!(transcript.len(), 2);
/// ```
pub struct Flock {
    members: Vec<(MemberId, BoxedQuacker)>,
    next_id: u64,
    observable: Observable,
}

impl Flock {
    /// Create an empty flock.
    pub fn new() -> Self {
        Self::named("Flock")
    }

    /// Create an empty flock with its own subject name.
    pub fn named(subject: impl Into<Cow<'static, str>>) -> Self {
        Self {
            members: Vec::new(),
            next_id: 0,
            observable: Observable::new(subject),
        }
    }

    /// Append a member to the end of the flock.
    ///
    /// Returns an identity handle usable with [`Flock::remove`].
    pub fn add(&mut self, member: BoxedQuacker) -> MemberId {
        let id = MemberId(self.next_id);
        self.next_id += 1;
        self.members.push((id, member));
        tracing::debug!(
            flock = %self.observable.subject(),
            member = id.0,
            size = self.members.len(),
            "Member added"
        );
        id
    }

    /// Remove a member by identity.
    ///
    /// Returns the removed quacker, or `None` if no member has this id.
    /// The order of the remaining members is unchanged.
    pub fn remove(&mut self, id: MemberId) -> Option<BoxedQuacker> {
        let index = self.members.iter().position(|(mid, _)| *mid == id)?;
        let (_, member) = self.members.remove(index);
        tracing::debug!(
            flock = %self.observable.subject(),
            member = id.0,
            size = self.members.len(),
            "Member removed"
        );
        Some(member)
    }

    /// Number of direct members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check if the flock has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl Default for Flock {
    fn default() -> Self {
        Self::new()
    }
}

impl Quacker for Flock {
    fn quack(&self, log: &Transcript) {
        for (_, member) in &self.members {
            member.quack(log);
        }
        self.observable.notify();
    }
}

impl QuackObservable for Flock {
    fn register_observer(&self, observer: &SharedObserver) {
        self.observable.register(observer);
    }

    fn notify_observers(&self) {
        self.observable.notify();
    }
}

impl fmt::Debug for Flock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flock")
            .field("subject", &self.observable.subject())
            .field("members", &self.members.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ducks::{DuckCall, MallardDuck, RedheadDuck, RubberDuck};

    #[test]
    fn test_quacks_in_insertion_order() {
        let mut flock = Flock::new();
        flock.add(Box::new(MallardDuck::new()));
        flock.add(Box::new(RedheadDuck::new()));
        flock.add(Box::new(DuckCall::new()));

        let transcript = Transcript::new();
        flock.quack(&transcript);

        assert_eq!(
            transcript.calls(),
            vec![MallardDuck::CALL, RedheadDuck::CALL, DuckCall::CALL]
        );
    }

    #[test]
    fn test_nested_flock_is_traversed_depth_first() {
        let mut inner = Flock::named("Mallard Flock");
        inner.add(Box::new(MallardDuck::new()));
        inner.add(Box::new(MallardDuck::new()));

        let mut outer = Flock::new();
        outer.add(Box::new(RubberDuck::new()));
        outer.add(Box::new(inner));
        outer.add(Box::new(DuckCall::new()));

        let transcript = Transcript::new();
        outer.quack(&transcript);

        assert_eq!(
            transcript.calls(),
            vec![
                RubberDuck::CALL,
                MallardDuck::CALL,
                MallardDuck::CALL,
                DuckCall::CALL,
            ]
        );
    }

    #[test]
    fn test_empty_flock_produces_nothing() {
        let flock = Flock::new();
        let transcript = Transcript::new();
        flock.quack(&transcript);
        assert!(transcript.is_empty());
    }

    #[test]
    fn test_remove_by_identity() {
        let mut flock = Flock::new();
        flock.add(Box::new(MallardDuck::new()));
        let redhead = flock.add(Box::new(RedheadDuck::new()));
        flock.add(Box::new(DuckCall::new()));

        assert!(flock.remove(redhead).is_some());
        assert_eq!(flock.len(), 2);

        let transcript = Transcript::new();
        flock.quack(&transcript);
        assert_eq!(transcript.calls(), vec![MallardDuck::CALL, DuckCall::CALL]);
    }

    #[test]
    fn test_remove_absent_member_is_a_noop() {
        let mut flock = Flock::new();
        let id = flock.add(Box::new(MallardDuck::new()));
        flock.remove(id);

        assert!(flock.remove(id).is_none());
        assert!(flock.is_empty());
    }

    #[test]
    fn test_flock_notifies_its_own_observers() {
        use crate::quacker::QuackObserver;
        use parking_lot::RwLock;
        use std::sync::Arc;

        struct Sightings(RwLock<Vec<String>>);
        impl QuackObserver for Sightings {
            fn update(&self, source: &Observable) {
                self.0.write().push(source.subject().to_string());
            }
        }

        let mut flock = Flock::named("Main Flock");
        flock.add(Box::new(MallardDuck::new()));

        let observer = Arc::new(Sightings(RwLock::new(Vec::new())));
        flock.register_observer(&(Arc::clone(&observer) as SharedObserver));

        flock.quack(&Transcript::new());
        assert_eq!(observer.0.read().as_slice(), ["Main Flock"]);
    }
}
