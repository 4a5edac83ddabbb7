//! Scenario configuration.
//!
//! A [`SimConfig`] describes the pond a [`Simulator`](crate::Simulator)
//! builds: which duck kinds join the main flock, how many mallards nest in
//! the sub-flock, and whether the goose shows up. Defaults reproduce the
//! classic scenario. Configs load from TOML:
//!
//! ```toml
//! roster = ["mallard", "redhead", "duck_call", "rubber_duck"]
//! nested_mallards = 3
//! include_goose = true
//! ```

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use flocksim_core::{BoxedQuacker, DuckFactory};

/// Errors raised while loading or interpreting a scenario config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read simulation config: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML for a scenario.
    #[error("failed to parse simulation config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A roster entry names no known duck kind.
    #[error("unknown duck kind: {0}")]
    UnknownDuck(String),
}

/// The duck kinds a factory can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuckKind {
    /// The common pond duck.
    Mallard,
    /// The redhead duck.
    Redhead,
    /// A hunter's duck call.
    DuckCall,
    /// A bathtub rubber duck.
    RubberDuck,
}

impl DuckKind {
    /// Create this kind of duck from the given factory.
    pub fn create(&self, factory: &dyn DuckFactory) -> BoxedQuacker {
        match self {
            DuckKind::Mallard => factory.create_mallard(),
            DuckKind::Redhead => factory.create_redhead(),
            DuckKind::DuckCall => factory.create_duck_call(),
            DuckKind::RubberDuck => factory.create_rubber_duck(),
        }
    }

    /// The kind name as used in configs and CLI flags.
    pub fn as_str(&self) -> &'static str {
        match self {
            DuckKind::Mallard => "mallard",
            DuckKind::Redhead => "redhead",
            DuckKind::DuckCall => "duck_call",
            DuckKind::RubberDuck => "rubber_duck",
        }
    }

    /// All kinds, in classic scenario order.
    pub fn all() -> [DuckKind; 4] {
        [
            DuckKind::Mallard,
            DuckKind::Redhead,
            DuckKind::DuckCall,
            DuckKind::RubberDuck,
        ]
    }
}

impl FromStr for DuckKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mallard" => Ok(DuckKind::Mallard),
            "redhead" => Ok(DuckKind::Redhead),
            "duck_call" | "duck-call" => Ok(DuckKind::DuckCall),
            "rubber_duck" | "rubber-duck" => Ok(DuckKind::RubberDuck),
            other => Err(ConfigError::UnknownDuck(other.to_string())),
        }
    }
}

impl std::fmt::Display for DuckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Scenario configuration for the compound simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Duck kinds added to the main flock, in order.
    pub roster: Vec<DuckKind>,

    /// Number of mallards in the nested sub-flock.
    pub nested_mallards: usize,

    /// Whether an adapted goose joins the main flock.
    pub include_goose: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            roster: DuckKind::all().to_vec(),
            nested_mallards: 3,
            include_goose: true,
        }
    }
}

impl SimConfig {
    /// Create the classic scenario config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load a config from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
