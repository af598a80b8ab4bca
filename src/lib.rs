//! Drivetrain Library
//!
//! This library provides the core functionality for the drivetrain demo: a
//! car composed with a replaceable engine behind a trait, plus the config
//! handling used by the CLI wrapper.

pub mod car;
pub mod cli;
pub mod config_file;
pub mod engine;
pub mod error;
pub mod types;

// Re-export main types for convenience
pub use car::Car;
pub use config_file::DemoConfig;
pub use engine::{Electric, Engine, Hybrid, Petrol};
pub use error::DrivetrainError;
pub use types::EngineKind;
