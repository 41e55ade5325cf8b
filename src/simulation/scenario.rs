//! Build fully-initialized scenarios and run the period search
//!
//! Takes a `ScenarioConfig` (YAML-facing) or the built-in moon positions and
//! produces a `Scenario` bundle containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - active force set (`AccelSet`)

use std::thread;

use tracing::{info, info_span, warn};

use crate::configuration::config::{BodyConfig, DetectorConfig, ScenarioConfig};
use crate::error::{Result, SimError};
use crate::simulation::cycle::{find_cycle, find_period};
use crate::simulation::engine::Engine;
use crate::simulation::forces::AccelSet;
use crate::simulation::integrator::step_system;
use crate::simulation::params::Parameters;
use crate::simulation::period::PeriodReport;
use crate::simulation::states::{Axis, Body, NVec3, System, BODY_COUNT};

/// Built-in starting positions, one `[x, y, z]` per moon
pub const MOONS: [[i64; 3]; BODY_COUNT] = [
    [-8, -9, -7],
    [-5, 2, -1],
    [11, 8, -14],
    [1, -4, -11],
];

pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
}

impl Scenario {
    /// Scenario over `system` with default engine, parameters and gravity
    pub fn new(system: System) -> Self {
        Self {
            engine: Engine::default(),
            parameters: Parameters::default(),
            system,
            forces: AccelSet::default(),
        }
    }

    /// The built-in moons, all at rest
    pub fn default_moons() -> Self {
        Self::new(System::from_positions(MOONS))
    }

    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        if cfg.bodies.len() != BODY_COUNT {
            return Err(SimError::BodyCount(cfg.bodies.len()));
        }

        // Bodies: map `BodyConfig` -> runtime `Body`, checking every vector has 3 components
        let mut bodies = [Body::at_rest(NVec3::zeros()); BODY_COUNT];
        for (i, (slot, bc)) in bodies.iter_mut().zip(&cfg.bodies).enumerate() {
            *slot = body_from_config(i, bc)?;
        }
        let system = System { bodies, t: 0 };

        let parameters = Parameters {
            max_steps: cfg.parameters.max_steps,
            progress_interval: cfg
                .parameters
                .progress_interval
                .unwrap_or(Parameters::default().progress_interval),
        };

        let engine = Engine {
            parallel: cfg.engine.parallel,
            detector: cfg.engine.detector,
        };

        Ok(Self {
            engine,
            parameters,
            system,
            forces: AccelSet::default(),
        })
    }

    /// Period of a single axis using the configured detector
    pub fn axis_period(&self, axis: Axis) -> Result<u64> {
        let _span = info_span!("axis", %axis).entered();
        let initial = self.system.project(axis);

        let period = match self.engine.detector {
            DetectorConfig::TortoiseHare => find_period(&initial, &self.forces, &self.parameters)?,
            DetectorConfig::Visited => {
                let cycle = find_cycle(&initial, &self.forces, &self.parameters)?;
                if cycle.start != 0 {
                    warn!(start = cycle.start, "cycle does not include the starting state");
                }
                cycle.period
            }
        };

        info!(period, "axis period found");
        Ok(period)
    }

    /// Per-axis periods and the period of the full system
    pub fn run(&self) -> Result<PeriodReport> {
        let [x, y, z] = if self.engine.parallel {
            thread::scope(|s| {
                let handles = Axis::ALL.map(|axis| s.spawn(move || self.axis_period(axis)));
                handles.map(|h| h.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
            })
        } else {
            Axis::ALL.map(|axis| self.axis_period(axis))
        };

        let report = PeriodReport::from_periods([x?, y?, z?])?;
        info!(system_period = report.system_period, "system period found");
        Ok(report)
    }

    /// Snapshots of the full system after each of the first `steps` steps.
    pub fn trace(&self, steps: u64) -> Vec<System> {
        let mut sys = self.system.clone();
        let mut out = Vec::new();
        for _ in 0..steps {
            step_system(&mut sys, &self.forces);
            out.push(sys.clone());
        }
        out
    }
}

fn body_from_config(i: usize, bc: &BodyConfig) -> Result<Body> {
    let x = vec3(i, &bc.x)?;
    let v = match &bc.v {
        Some(v) => vec3(i, v)?,
        None => NVec3::zeros(),
    };
    Ok(Body { x, v })
}

fn vec3(body: usize, c: &[i64]) -> Result<NVec3> {
    match c {
        [x, y, z] => Ok(NVec3::new(*x, *y, *z)),
        _ => Err(SimError::Dimension { body, len: c.len() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::config::ScenarioConfig;

    const EXAMPLE: &str = r#"
bodies:
  - x: [-1, 0, 2]
  - x: [2, -10, -7]
  - x: [4, -8, 8]
  - x: [3, 5, -1]
"#;

    #[test]
    fn example_scenario_from_yaml() {
        let cfg = ScenarioConfig::from_yaml(EXAMPLE).unwrap();
        let scenario = Scenario::build_scenario(cfg).unwrap();
        let report = scenario.run().unwrap();
        assert_eq!(report.periods, [18, 28, 44]);
        assert_eq!(report.system_period, 2772);
    }

    #[test]
    fn parallel_and_visited_agree() {
        let cfg = ScenarioConfig::from_yaml(EXAMPLE).unwrap();
        let mut scenario = Scenario::build_scenario(cfg).unwrap();
        let sequential = scenario.run().unwrap();

        scenario.engine.parallel = true;
        assert_eq!(scenario.run().unwrap(), sequential);

        scenario.engine.detector = DetectorConfig::Visited;
        assert_eq!(scenario.run().unwrap(), sequential);
    }

    #[test]
    fn wrong_body_count() {
        let cfg = ScenarioConfig::from_yaml("bodies:\n  - x: [1, 2, 3]\n").unwrap();
        assert_eq!(Scenario::build_scenario(cfg).err(), Some(SimError::BodyCount(1)));
    }

    #[test]
    fn wrong_dimension() {
        let text = "bodies:\n  - x: [1, 2, 3]\n  - x: [1, 2]\n  - x: [0, 0, 0]\n  - x: [0, 0, 0]\n";
        let cfg = ScenarioConfig::from_yaml(text).unwrap();
        assert_eq!(
            Scenario::build_scenario(cfg).err(),
            Some(SimError::Dimension { body: 1, len: 2 })
        );
    }

    #[test]
    fn step_limit_propagates_from_run() {
        let mut scenario = Scenario::build_scenario(ScenarioConfig::from_yaml(EXAMPLE).unwrap()).unwrap();
        scenario.parameters.max_steps = Some(20);
        assert_eq!(scenario.run(), Err(SimError::StepLimitExceeded { limit: 20 }));
    }

    #[test]
    fn trace_returns_one_snapshot_per_step() {
        let scenario = Scenario::build_scenario(ScenarioConfig::from_yaml(EXAMPLE).unwrap()).unwrap();
        let snaps = scenario.trace(10);
        assert_eq!(snaps.len(), 10);
        assert_eq!(snaps[9].t, 10);
        // step 10 of the published example
        assert_eq!(snaps[9].bodies[0].x, NVec3::new(2, 1, -3));
        assert_eq!(snaps[9].bodies[0].v, NVec3::new(-3, -2, 1));
    }
}
