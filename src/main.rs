use fmsim::{render_trajectory, run_solver, write_csv, Scenario, ScenarioConfig};

use anyhow::Result;
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "reference.yaml")]
    file_name: String,
}

// load here to keep main clean
fn load_scenario_from_yaml() -> Result<ScenarioConfig> {
    let args = Args::parse();
    let file_name = args.file_name;

    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(&file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let scenario_cfg = load_scenario_from_yaml().expect("failed to load scenario");

    let scenario = Scenario::build_scenario(scenario_cfg)?;
    let p = &scenario.parameters;
    println!(
        "run_solver: stepping {} samples (dt = {}, t_max = {})",
        p.num_steps(),
        p.dt,
        p.t_max
    );

    let trajectory = run_solver(&scenario)?;
    let last = trajectory.len() - 1;
    println!(
        "run_solver: done, U(t = {}) = {:+.6e}",
        trajectory.time(last),
        trajectory.u[last]
    );

    if let Some(path) = &scenario.output.csv {
        write_csv(&trajectory, path)?;
        println!("wrote {}", path.display());
    }
    if let Some(path) = &scenario.output.plot {
        render_trajectory(&trajectory, path)
            .map_err(|e| anyhow::anyhow!("failed to render plot: {e}"))?;
        println!("wrote {}", path.display());
    }

    Ok(())
}
