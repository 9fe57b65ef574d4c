use lunsim::{MissionController, ScenarioConfig};

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under the scenarios/ directory
    #[arg(short, default_value = "translunar.yaml")]
    file_name: String,

    /// Throttle ticks to the scenario's suggested frequency
    #[arg(long)]
    realtime: bool,

    /// Start with time warp engaged
    #[arg(long)]
    warp: bool,

    /// Log a telemetry line every this many ticks
    #[arg(long, default_value_t = 1000)]
    log_every: u64,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut mission = MissionController::build(scenario_cfg);

    if args.warp {
        mission.toggle_time_warp();
    }

    let t_end = mission.parameters().t_end;
    let frame = Duration::from_secs_f64(1.0 / mission.parameters().freq);

    info!(
        dt = mission.parameters().dt,
        freq = mission.parameters().freq,
        "mission start"
    );

    let mut ticks: u64 = 0;
    loop {
        let telemetry = mission.tick()?;
        ticks += 1;

        if let Some(event) = telemetry.terminal {
            info!(?event, "{telemetry}");
            break;
        }
        if telemetry.elapsed_seconds >= t_end {
            info!("time limit reached, {telemetry}");
            break;
        }
        if ticks % args.log_every == 0 {
            info!("{telemetry}");
        }

        // Purely a frame-rate throttle; simulated time per tick is dt either way
        if args.realtime {
            thread::sleep(frame);
        }
    }

    Ok(())
}
