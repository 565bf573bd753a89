use flingsim::{ScenarioConfig, Scenario};
use flingsim::run_2d;
use flingsim::{bench_step, bench_step_curve};

use anyhow::{Context, Result};
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file inside `scenarios/`
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Time the physics pass instead of opening the viewer
    #[arg(long)]
    bench: bool,

    /// With --bench: print a CSV curve over many body counts
    #[arg(long, requires = "bench")]
    curve: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        if args.curve {
            bench_step_curve()?;
        } else {
            bench_step()?;
        }
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg).context("invalid scenario")?;

    run_2d(scenario);

    Ok(())
}
