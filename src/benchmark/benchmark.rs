use std::time::Instant;

use crate::error::Result;
use crate::simulation::cycle::{find_cycle, find_period};
use crate::simulation::scenario::Scenario;
use crate::simulation::states::Axis;

/// Time both detectors on every axis of `scenario`
/// Paste output directly into excel to graph
pub fn bench_periods(scenario: &Scenario) -> Result<()> {
    println!("axis,period,tortoise_hare_ms,visited_ms");

    for axis in Axis::ALL {
        let initial = scenario.system.project(axis);

        // Warm-up
        find_period(&initial, &scenario.forces, &scenario.parameters)?;

        let t0 = Instant::now();
        let period = find_period(&initial, &scenario.forces, &scenario.parameters)?;
        let ms_th = t0.elapsed().as_secs_f64() * 1000.0;

        let t1 = Instant::now();
        let cycle = find_cycle(&initial, &scenario.forces, &scenario.parameters)?;
        let ms_visited = t1.elapsed().as_secs_f64() * 1000.0;

        debug_assert_eq!(cycle.period, period);
        println!("{},{},{:.3},{:.3}", axis, period, ms_th, ms_visited);
    }

    Ok(())
}
