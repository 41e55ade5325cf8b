//! Error types for moonsim.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    #[error("lcm({a}, {b}) overflows u64")]
    ArithmeticOverflow { a: u64, b: u64 },

    #[error("no repeat found within {limit} steps")]
    StepLimitExceeded { limit: u64 },

    #[error("expected 4 bodies, got {0}")]
    BodyCount(usize),

    #[error("body {body} has {len} components, expected 3")]
    Dimension { body: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, SimError>;
