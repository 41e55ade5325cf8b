//! Period detection for a single axis.
//!
//! [`find_period`] runs a slow copy (one step per iteration) against a fast
//! copy (two steps per iteration) and stops when they coincide. It assumes
//! the trajectory repeats from step 0, which holds for this reversible
//! dynamics started at rest: the first collision then lands exactly on the
//! minimal period. It is not a general cycle finder and will not terminate
//! on a trajectory with a pre-periodic tail unless `max_steps` is set.
//!
//! [`find_cycle`] makes no such assumption. It records every visited state
//! and reports both where the cycle is entered and its length, at the cost
//! of memory proportional to the period.

use std::collections::hash_map::{Entry, HashMap};

use tracing::debug;

use crate::error::{Result, SimError};
use super::forces::AccelSet;
use super::integrator::{step, step_n};
use super::params::Parameters;
use super::states::AxisState;

/// A repeating stretch of a trajectory: the state at `start` recurs every `period` steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cycle {
    pub start: u64,
    pub period: u64,
}

/// Smallest `T > 0` with `step^T(initial) == initial`.
pub fn find_period(initial: &AxisState, forces: &AccelSet, params: &Parameters) -> Result<u64> {
    let mut slow = *initial;
    let mut fast = *initial;
    let mut i: u64 = 0;

    // step before comparing, so a fixed point reports 1 rather than 0
    loop {
        step(&mut slow, forces);
        step_n(&mut fast, forces, 2);
        i += 1;

        if slow == fast {
            return Ok(i);
        }
        report_progress(i, params);
        check_limit(i, params)?;
    }
}

/// Entry point and length of the first cycle reached from `initial`.
pub fn find_cycle(initial: &AxisState, forces: &AccelSet, params: &Parameters) -> Result<Cycle> {
    let mut seen: HashMap<AxisState, u64> = HashMap::new();
    let mut state = *initial;
    let mut t: u64 = 0;

    loop {
        match seen.entry(state) {
            Entry::Occupied(first) => {
                let start = *first.get();
                return Ok(Cycle { start, period: t - start });
            }
            Entry::Vacant(slot) => {
                slot.insert(t);
            }
        }

        report_progress(t, params);
        check_limit(t, params)?;
        step(&mut state, forces);
        t += 1;
    }
}

fn report_progress(i: u64, params: &Parameters) {
    if params.progress_interval > 0 && i > 0 && i % params.progress_interval == 0 {
        debug!(steps = i, "still searching for a repeat");
    }
}

fn check_limit(i: u64, params: &Parameters) -> Result<()> {
    match params.max_steps {
        Some(limit) if i >= limit => Err(SimError::StepLimitExceeded { limit }),
        _ => Ok(()),
    }
}
