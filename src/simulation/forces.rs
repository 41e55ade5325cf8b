//! Velocity contributors for the moon engine
//!
//! Defines the per-axis acceleration trait and the integer gravity rule:
//! every body is pulled one unit toward each other body along the axis.

use crate::simulation::states::{AxisState, BODY_COUNT};

/// Collection of acceleration terms acting on one axis.
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single velocity change per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute the total velocity change for every body in `state`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, state: &AxisState, out: &mut [i64; BODY_COUNT]) {
        // Zero buffer
        *out = [0; BODY_COUNT];
        for term in &self.terms {
            term.acceleration(state, out);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new().with(IntegerGravity)
    }
}

/// Trait for per-axis acceleration sources operating on [`AxisState`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, state: &AxisState, out: &mut [i64; BODY_COUNT]);
}

/// Pull on a body at `a` from a body at `b`: -1 if a > b, 0 if equal, +1 if a < b
pub fn pull(a: i64, b: i64) -> i64 {
    // reversed compare: moves `a` toward `b`
    b.cmp(&a) as i64
}

/// Unit-strength gravity: each pair contributes `pull` to both bodies.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerGravity;

impl IntegerGravity {
    /// Summed pull on body `i` from the three others. Always within [-3, 3].
    pub fn net_pull(pos: &[i64; BODY_COUNT], i: usize) -> i64 {
        (0..BODY_COUNT)
            .filter(|&j| j != i)
            .map(|j| pull(pos[i], pos[j]))
            .sum()
    }
}

impl Acceleration for IntegerGravity {
    fn acceleration(&self, state: &AxisState, out: &mut [i64; BODY_COUNT]) {
        // positions are only read here, so every body sees the same snapshot
        let pos = &state.pos;
        for (i, dv) in out.iter_mut().enumerate() {
            *dv += Self::net_pull(pos, i);
        }
    }
}
