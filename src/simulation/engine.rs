//! High-level runtime engine settings
//!
//! Selects the cycle detector and whether axes run on their own threads

use crate::configuration::config::DetectorConfig;

#[derive(Debug, Clone, Default)]
pub struct Engine {
    pub parallel: bool, // false = one axis after another, true = one thread per axis
    pub detector: DetectorConfig, // tortoise/hare or visited-set
}
