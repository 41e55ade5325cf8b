use moonsim::{Scenario, ScenarioConfig};
use moonsim::bench_periods;
use moonsim::logging::init_logging;

use clap::Parser;
use anyhow::{Context, Result};

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Find when four moons under integer gravity return to their starting state")]
struct Args {
    /// Scenario file; bare names are looked up in `scenarios/`. Built-in moons when absent
    #[arg(short)]
    file_name: Option<String>,

    /// Search the three axes on separate threads
    #[arg(long)]
    parallel: bool,

    /// Print the system after each of the first N steps
    #[arg(long, value_name = "N")]
    trace: Option<u64>,

    /// Time both detectors per axis instead of printing the period
    #[arg(long)]
    bench: bool,

    /// More log output on stderr (-v info, -vv progress)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let mut config_path = PathBuf::from(file_name);
    if !config_path.exists() {
        config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    }
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose)?;

    let mut scenario = match &args.file_name {
        Some(name) => Scenario::build_scenario(load_scenario_from_yaml(name)?)?,
        None => Scenario::default_moons(),
    };
    if args.parallel {
        scenario.engine.parallel = true;
    }

    if let Some(steps) = args.trace {
        for snapshot in scenario.trace(steps) {
            println!("{snapshot}");
        }
        return Ok(());
    }

    if args.bench {
        bench_periods(&scenario)?;
        return Ok(());
    }

    let report = scenario.run()?;
    println!("{report}");

    Ok(())
}
