//! Drivetrain - Main entry point
//!
//! A small demo binary: build a car with one engine, run it, swap the engine
//! in place, run it again.

mod car;
mod cli;
mod config_file;
mod engine;
mod error;
mod types;

use std::io::{self, Write};

use tracing::{debug, error, info};

use crate::car::Car;
use crate::cli::{Cli, Commands};
use crate::config_file::DemoConfig;
use crate::types::EngineKind;

/// Initialize the tracing subscriber with appropriate settings
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    // Diagnostics go to stderr; stdout belongs to the demo output.
    tracing_subscriber::fmt()
        .with_env_filter(
            // Allows RUST_LOG env var to override
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

/// Main application entry point
fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    info!("drivetrain starting up");

    let cli = Cli::parse_args();
    debug!("CLI arguments parsed");

    match cli.command {
        Some(Commands::Validate { config }) => {
            info!("Validating configuration file: {:?}", config);
            match DemoConfig::load_from_file(&config) {
                Ok(config) => match config.validate() {
                    Ok(_) => {
                        info!("Configuration validation successful");
                        println!("✓ Configuration file is valid: {:?}", config);
                    }
                    Err(e) => {
                        error!("Configuration validation failed: {}", e);
                        eprintln!("✗ Configuration validation failed: {}", e);
                        std::process::exit(1);
                    }
                },
                Err(e) => {
                    error!("Failed to load configuration file: {}", e);
                    eprintln!("✗ Failed to load configuration file: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::Demo {
            first,
            second,
            config,
        }) => {
            if let Some(config_path) = config {
                info!("Running demo with config: {:?}", config_path);
                run_demo_with_config(&config_path)?;
            } else {
                run_demo(parse_engine_kind(&first), parse_engine_kind(&second))?;
            }
        }
        Some(Commands::Engines) => {
            list_engines();
        }
        None => {
            info!("No command specified, running demo with defaults");
            run_demo(EngineKind::Petrol, EngineKind::Electric)?;
        }
    }

    Ok(())
}

/// Parse an engine kind name, exiting with a friendly message on failure
fn parse_engine_kind(name: &str) -> EngineKind {
    name.parse().unwrap_or_else(|_| {
        eprintln!("❌ Unknown engine kind: {}", name);
        eprintln!("   Valid kinds: petrol, electric, hybrid");
        std::process::exit(1);
    })
}

/// Run the demonstration sequence with engines loaded from a config file
fn run_demo_with_config(config_path: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
    let config = DemoConfig::load_from_file(config_path)?;
    config.validate()?;
    info!(
        first = %config.first_engine,
        second = %config.second_engine,
        "configuration loaded and validated"
    );

    run_demo(config.first_engine, config.second_engine)
}

/// Run the demonstration sequence: start/stop with the first engine, swap in
/// the second, start/stop again
fn run_demo(first: EngineKind, second: EngineKind) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut car = Car::new(first.build());
    car.start(&mut out)?;
    car.stop(&mut out)?;

    car.set_engine(second.build(), &mut out)?;
    car.start(&mut out)?;
    car.stop(&mut out)?;

    out.flush()?;
    Ok(())
}

/// List the built-in engine kinds with the labels they report
fn list_engines() {
    use strum::IntoEnumIterator;

    println!("Available engine kinds:");
    for kind in EngineKind::iter() {
        println!("  {:<10} {}", kind.to_string(), kind.build().label());
    }
}
