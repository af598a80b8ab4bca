use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Drivetrain - a car with a swappable engine
#[derive(Parser)]
#[command(name = "drivetrain")]
#[command(about = "Demonstrates delegation to an injected, replaceable engine")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the engine replacement demonstration
    Demo {
        /// Engine the car is built with (petrol, electric, hybrid)
        #[arg(long, default_value = "petrol")]
        first: String,

        /// Engine swapped in after the first start/stop cycle
        #[arg(long, default_value = "electric")]
        second: String,

        /// Path to configuration file to use (overrides --first/--second)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Validate a demo configuration file
    Validate {
        /// Path to configuration file to validate
        config: PathBuf,
    },
    /// List the built-in engine kinds
    Engines,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
