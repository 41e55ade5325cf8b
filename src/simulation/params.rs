//! Numerical parameters for a period search
//!
//! `Parameters` holds runtime settings:
//! - an optional cap on detector iterations,
//! - how often the detectors report progress

/// Progress is reported every this many iterations unless configured otherwise
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 100_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameters {
    pub max_steps: Option<u64>, // give up after this many iterations
    pub progress_interval: u64, // 0 disables progress events
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            max_steps: None,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}
