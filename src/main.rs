//! gridhopper headless runner.
//!
//! Builds the ECS world, loads `config.ini`, and ticks the actor core at a
//! fixed rate with input coming from a script instead of a keyboard. Useful
//! for checking tunables and reproducing runs without a renderer.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --script "down,wait:15,left,wait:15,hit,wait:5,reset" --trace
//! cargo run --release -- --random-moves 20 --seed 42 --hazard=-2,-3
//! ```

use clap::Parser;
use fastrand::Rng;
use log::{info, warn};
use std::path::PathBuf;

use gridhopper::components::gridposition::GridPosition;
use gridhopper::game::{build_schedule, build_world, snapshot, spawn_hazard, tick};
use gridhopper::resources::gameconfig::GameConfig;
use gridhopper::resources::level::Level;
use gridhopper::resources::runlog::RunLog;
use gridhopper::resources::script::InputScript;

/// Upper bound on ticks when running until the script finishes.
const MAX_TICKS: u64 = 1_000_000;

/// gridhopper headless runner
#[derive(Parser)]
#[command(version, about = "Runs the gridhopper actor core headless from a script.")]
struct Cli {
    /// INI configuration file. Defaults are used when it is missing.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Write a configuration file with default values and exit.
    /// Optionally provide a path (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    create_config: Option<Option<PathBuf>>,

    /// Input script, e.g. "up,wait:12,left,hit,reset".
    #[arg(long, allow_hyphen_values = true)]
    script: Option<String>,

    /// Append N random hops to the script.
    #[arg(long, value_name = "N")]
    random_moves: Option<usize>,

    /// Seed for --random-moves.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Number of ticks to run. Without it the run ends once the script is
    /// done and the actor has settled.
    #[arg(long)]
    ticks: Option<u64>,

    /// Hazard cell as "x,y". Repeatable.
    #[arg(long = "hazard", value_name = "X,Y", allow_hyphen_values = true)]
    hazards: Vec<GridPosition>,

    /// Blocked cell as "x,y". Repeatable.
    #[arg(long = "block", value_name = "X,Y", allow_hyphen_values = true)]
    blocked: Vec<GridPosition>,

    /// Print a JSON snapshot of the actor after every tick.
    #[arg(long)]
    trace: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Early-exit: write a default config and quit
    if let Some(maybe_path) = cli.create_config {
        let path = maybe_path.unwrap_or_else(|| PathBuf::from("./config.ini"));
        if let Err(e) = GameConfig::with_path(&path).save_to_file() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        println!("Config written to {}", path.display());
        return;
    }

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }

    let mut script = match cli.script.as_deref() {
        Some(text) => match InputScript::parse(text) {
            Ok(script) => script,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
        None => InputScript::default(),
    };

    // Ticks for one hop to land, plus one to be ready again.
    let tick_delta = config.tick_delta() * config.time_scale;
    let settle_ticks = if tick_delta > 0.0 {
        (config.move_duration / tick_delta).ceil() as u32 + 1
    } else {
        1
    };

    if let Some(hops) = cli.random_moves {
        let mut rng = Rng::with_seed(cli.seed);
        info!("Appending {} random hops (seed {})", hops, cli.seed);
        script.append(InputScript::random(&mut rng, hops, settle_ticks));
    }

    let mut world = build_world(&config);
    {
        let mut level = world.resource_mut::<Level>();
        for cell in &cli.blocked {
            level.block(*cell);
        }
        if level.blocked_count() > 0 {
            info!("{} cells blocked", level.blocked_count());
        }
    }
    for cell in &cli.hazards {
        spawn_hazard(&mut world, *cell);
    }
    world.insert_resource(script);
    world.flush();

    let mut update = build_schedule();
    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    let dt = config.tick_delta();
    let mut ticks_run: u64 = 0;
    let mut settle_left = settle_ticks;
    // --------------- Main loop ---------------
    loop {
        match cli.ticks {
            Some(limit) if ticks_run >= limit => break,
            None if ticks_run >= MAX_TICKS => {
                warn!("Stopping after {} ticks", MAX_TICKS);
                break;
            }
            None if world.resource::<InputScript>().is_finished() => {
                if settle_left == 0 {
                    break;
                }
                settle_left -= 1;
            }
            _ => {}
        }

        tick(&mut world, &mut update, dt);
        ticks_run += 1;

        if cli.trace {
            match serde_json::to_string(&snapshot(&world)) {
                Ok(line) => println!("{line}"),
                Err(e) => warn!("Failed to serialize snapshot: {}", e),
            }
        }
    }

    let run_log = world.resource::<RunLog>().clone();
    let last = snapshot(&world);
    info!(
        "Ran {} ticks: {} hops, {} landings, {} deaths, {} resets; actor {:?} on {}",
        ticks_run,
        run_log.hops,
        run_log.landings,
        run_log.deaths,
        run_log.resets,
        last.state,
        last.cell
    );
    match serde_json::to_string(&serde_json::json!({ "final": last, "run": run_log })) {
        Ok(line) => println!("{line}"),
        Err(e) => warn!("Failed to serialize summary: {}", e),
    }
}
