//! Core state types for the moon simulation.
//!
//! Defines the 3D body/system structs and their per-axis projection:
//! - `Body` / `System` using `NVec3` (integer 3d)
//! - `AxisState`, the positions and velocities of all bodies along one axis
//!
//! Gravity and integration never mix axes, so every axis can be advanced
//! (and checked for repeats) on its own.

use std::fmt;

use nalgebra::Vector3;
pub type NVec3 = Vector3<i64>;

/// Number of bodies in every system.
pub const BODY_COUNT: usize = 4;

/// One spatial axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index into an `NVec3`
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Body {
    pub x: NVec3, // 3d position
    pub v: NVec3, // 3d velocity
}

impl Body {
    /// Body at `x` with zero velocity
    pub fn at_rest(x: NVec3) -> Self {
        Self { x, v: NVec3::zeros() }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pos={:>3} {:>3} {:>3} vel={:>3} {:>3} {:>3}",
            self.x[0], self.x[1], self.x[2], self.v[0], self.v[1], self.v[2]
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct System {
    pub bodies: [Body; BODY_COUNT], // fixed set of moons
    pub t: u64, // steps taken
}

impl System {
    /// Build a system at rest from one `[x, y, z]` triple per body.
    pub fn from_positions(positions: [[i64; 3]; BODY_COUNT]) -> Self {
        Self {
            bodies: positions.map(|p| Body::at_rest(p.into())),
            t: 0,
        }
    }

    /// Positions and velocities of every body along `axis`
    pub fn project(&self, axis: Axis) -> AxisState {
        let k = axis.index();
        AxisState {
            pos: self.bodies.map(|b| b.x[k]),
            vel: self.bodies.map(|b| b.v[k]),
        }
    }

    /// All three projections, in `Axis::ALL` order
    pub fn axes(&self) -> [AxisState; 3] {
        Axis::ALL.map(|axis| self.project(axis))
    }

    /// Write an axis state back into the matching components of each body.
    pub fn apply(&mut self, axis: Axis, state: &AxisState) {
        let k = axis.index();
        for (i, b) in self.bodies.iter_mut().enumerate() {
            b.x[k] = state.pos[i];
            b.v[k] = state.vel[i];
        }
    }
}

impl fmt::Display for System {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Step {}", self.t)?;
        for b in &self.bodies {
            writeln!(f, "{b}")?;
        }
        Ok(())
    }
}

/// One axis of the system: `pos[i]` and `vel[i]` belong to body `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AxisState {
    pub pos: [i64; BODY_COUNT],
    pub vel: [i64; BODY_COUNT],
}

impl AxisState {
    /// Axis state with the given positions and zero velocity
    pub fn at_rest(pos: [i64; BODY_COUNT]) -> Self {
        Self { pos, vel: [0; BODY_COUNT] }
    }
}
