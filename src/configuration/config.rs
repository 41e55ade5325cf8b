//! Configuration types for loading moon scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – detector choice and per-axis threading
//! - [`ParametersConfig`] – iteration cap and progress cadence
//! - [`BodyConfig`]       – initial state for each of the four bodies
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   parallel: true
//!   detector: "tortoise_hare"   # or "visited"
//!
//! parameters:
//!   max_steps: 10000000         # optional
//!   progress_interval: 100000   # optional
//!
//! bodies:
//!   - x: [ -1,   0,  2 ]
//!   - x: [  2, -10, -7 ]
//!   - x: [  4,  -8,  8 ]
//!   - x: [  3,   5, -1 ]
//!     v: [  0,   0,  0 ]        # optional, defaults to rest
//! ```
//!
//! Every section except `bodies` may be omitted.

use serde::Deserialize;

/// Which cycle detector the engine runs per axis
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DetectorConfig {
    #[default]
    #[serde(rename = "tortoise_hare")] // slow/fast pair, constant memory, assumes the start state recurs
    TortoiseHare,

    #[serde(rename = "visited")] // remembers every state, finds cycles that start later
    Visited,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub parallel: bool, // run the three axes on separate threads
    pub detector: DetectorConfig,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ParametersConfig {
    pub max_steps: Option<u64>, // stop searching after this many iterations
    pub progress_interval: Option<u64>, // iterations between progress events
}

/// Initial state of one body
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: Vec<i64>, // position [x, y, z]
    pub v: Option<Vec<i64>>, // velocity [x, y, z], zero when absent
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }
}
