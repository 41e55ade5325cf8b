//! Fixed-step integer integrator for the moon system
//!
//! One step is a kick (velocity from gravity on the pre-step positions)
//! followed by a drift (position from the new velocity).

use super::forces::AccelSet;
use super::states::{Axis, AxisState, System, BODY_COUNT};

/// Advance one axis by a single step in-place.
pub fn step(state: &mut AxisState, forces: &AccelSet) {
    let mut dv = [0; BODY_COUNT];

    // Kick: every body reads the same pre-step positions
    forces.accumulate_accels(state, &mut dv);
    for (v, d) in state.vel.iter_mut().zip(dv) {
        *v += d;
    }

    // Drift: x_n+1 = x_n + v_n+1
    for (x, v) in state.pos.iter_mut().zip(state.vel) {
        *x += v;
    }
}

/// Advance one axis by `n` steps
pub fn step_n(state: &mut AxisState, forces: &AccelSet, n: u64) {
    for _ in 0..n {
        step(state, forces);
    }
}

/// Advance every axis of the full system by one step and bump `sys.t`
pub fn step_system(sys: &mut System, forces: &AccelSet) {
    for axis in Axis::ALL {
        let mut state = sys.project(axis);
        step(&mut state, forces);
        sys.apply(axis, &state);
    }
    sys.t += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::states::NVec3;

    #[test]
    fn single_step_of_hand_worked_state() {
        let mut state = AxisState::at_rest([-1, 2, 4, 3]);
        step(&mut state, &AccelSet::default());

        assert_eq!(state.vel, [3, 1, -3, -1]);
        // positions move by the new velocity, not the old (zero) one
        assert_eq!(state.pos, [2, 3, 1, 2]);
    }

    #[test]
    fn step_n_zero_is_identity() {
        let start = AxisState::at_rest([-8, -5, 11, 1]);
        let mut state = start;
        step_n(&mut state, &AccelSet::default(), 0);
        assert_eq!(state, start);
    }

    #[test]
    fn system_step_matches_axis_steps() {
        let forces = AccelSet::default();
        let mut sys = System::from_positions([[-1, 0, 2], [2, -10, -7], [4, -8, 8], [3, 5, -1]]);
        let mut axes = sys.axes();

        step_system(&mut sys, &forces);
        for a in axes.iter_mut() {
            step(a, &forces);
        }

        assert_eq!(sys.t, 1);
        assert_eq!(sys.axes(), axes);
        // first step of the published example
        assert_eq!(sys.bodies[0].x, NVec3::new(2, -1, 1));
        assert_eq!(sys.bodies[0].v, NVec3::new(3, -1, -1));
    }
}
