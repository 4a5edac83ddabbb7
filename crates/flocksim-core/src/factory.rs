//! Duck factories.
//!
//! A [`DuckFactory`] encapsulates which product line a driver gets: bare
//! leaves from [`StandardDuckFactory`], or decorated ones from a counting
//! factory. Drivers that only speak to the factory trait never know the
//! difference.

use crate::ducks::{DuckCall, MallardDuck, RedheadDuck, RubberDuck};
use crate::quacker::BoxedQuacker;

/// Creates one quacker per duck kind.
///
/// Factories are stateless selectors of a product line: every creator call
/// returns a new, independently owned quacker, and the two product lines
/// (standard and counting) are structurally parallel.
pub trait DuckFactory: Send + Sync {
    /// Create a mallard.
    fn create_mallard(&self) -> BoxedQuacker;

    /// Create a redhead.
    fn create_redhead(&self) -> BoxedQuacker;

    /// Create a duck call.
    fn create_duck_call(&self) -> BoxedQuacker;

    /// Create a rubber duck.
    fn create_rubber_duck(&self) -> BoxedQuacker;
}

/// The plain product line: bare, undecorated leaves.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardDuckFactory;

impl StandardDuckFactory {
    /// Create the standard factory.
    pub fn new() -> Self {
        Self
    }
}

impl DuckFactory for StandardDuckFactory {
    fn create_mallard(&self) -> BoxedQuacker {
        Box::new(MallardDuck::new())
    }

    fn create_redhead(&self) -> BoxedQuacker {
        Box::new(RedheadDuck::new())
    }

    fn create_duck_call(&self) -> BoxedQuacker {
        Box::new(DuckCall::new())
    }

    fn create_rubber_duck(&self) -> BoxedQuacker {
        Box::new(RubberDuck::new())
    }
}
