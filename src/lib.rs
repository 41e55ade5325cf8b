pub mod simulation;
pub mod configuration;
pub mod benchmark;
pub mod error;
pub mod logging;

pub use simulation::states::{Axis, AxisState, Body, System, NVec3, BODY_COUNT};
pub use simulation::forces::{Acceleration, AccelSet, IntegerGravity, pull};
pub use simulation::integrator::{step, step_n, step_system};
pub use simulation::cycle::{Cycle, find_cycle, find_period};
pub use simulation::period::{PeriodReport, gcd, lcm, system_period};
pub use simulation::params::Parameters;
pub use simulation::scenario::{Scenario, MOONS};

pub use configuration::config::{DetectorConfig, EngineConfig, ParametersConfig, BodyConfig, ScenarioConfig};

pub use error::SimError;

pub use benchmark::benchmark::bench_periods;
