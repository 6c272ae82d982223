/* 3rd party libraries */
use clap::{Arg, ArgMatches, Command as Cli};
use crossbeam_channel as cbc;
use log::error;
use std::io;
use std::str::FromStr;
use std::thread::Builder;

/* Custom libraries */
use elevator_sim::config::{self, Config};
use elevator_sim::simulation::{read_commands, Command, Simulation};
use elevator_sim::unwrap_or_exit;
use elevator_sim::BuildingSnapshot;

fn cli() -> Cli<'static> {
    Cli::new("elevator-sim")
        .about("Tick-driven elevator dispatch simulator. Reads commands on stdin, writes JSON snapshots to stdout.")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .takes_value(true)
                .default_value("config.toml")
                .help("Path to the configuration file"),
        )
        .arg(Arg::new("floors").long("floors").takes_value(true).help("Number of floors"))
        .arg(Arg::new("elevators").long("elevators").takes_value(true).help("Number of elevators"))
        .arg(
            Arg::new("tick-period")
                .long("tick-period")
                .takes_value(true)
                .help("Milliseconds between ticks"),
        )
        .arg(Arg::new("ticks").long("ticks").takes_value(true).help("Stop after this many ticks"))
}

fn parse_arg<T: FromStr>(matches: &ArgMatches, name: &str) -> Result<Option<T>, String> {
    match matches.value_of(name) {
        Some(value) => value
            .parse::<T>()
            .map(Some)
            .map_err(|_| format!("invalid value '{}' for --{}", value, name)),
        None => Ok(None),
    }
}

// Command line flags win over the configuration file
fn apply_overrides(config: &mut Config, matches: &ArgMatches) -> Result<(), String> {
    if let Some(n_floors) = parse_arg(matches, "floors")? {
        config.building.n_floors = n_floors;
    }
    if let Some(n_elevators) = parse_arg(matches, "elevators")? {
        config.building.n_elevators = n_elevators;
    }
    if let Some(tick_period) = parse_arg(matches, "tick-period")? {
        config.simulation.tick_period = tick_period;
    }
    if let Some(max_ticks) = parse_arg(matches, "ticks")? {
        config.simulation.max_ticks = Some(max_ticks);
    }
    Ok(())
}

/* Main */
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Load the configuration
    let matches = cli().get_matches();
    let config_path = matches.value_of("config").unwrap_or("config.toml");
    let mut config = unwrap_or_exit!(config::load_config(config_path));
    unwrap_or_exit!(apply_overrides(&mut config, &matches));
    unwrap_or_exit!(config.validate());

    // Initialize channels
    let (command_tx, command_rx) = cbc::unbounded::<Command>();
    let (snapshot_tx, snapshot_rx) = cbc::unbounded::<BuildingSnapshot>();
    let (terminate_tx, terminate_rx) = cbc::unbounded::<()>();

    // Start the simulation
    let simulation = Simulation::new(&config, command_rx, snapshot_tx, terminate_rx);
    let simulation_thread = unwrap_or_exit!(Builder::new()
        .name("simulation".into())
        .spawn(move || simulation.run()));

    // Start reading commands
    let _input_thread = unwrap_or_exit!(Builder::new()
        .name("input".into())
        .spawn(move || read_commands(io::stdin().lock(), command_tx)));

    // Render every snapshot as one JSON line
    for snapshot in snapshot_rx.iter() {
        match serde_json::to_string(&snapshot) {
            Ok(line) => println!("{}", line),
            Err(e) => error!("Failed to serialize snapshot: {}", e),
        }
    }

    let _ = terminate_tx.send(());
    if simulation_thread.join().is_err() {
        error!("Simulation thread panicked");
        std::process::exit(1);
    }
}
