//! Type-safe engine selection for drivetrain
//!
//! This module replaces stringly-typed engine selection with a proper Rust
//! enum that provides compile-time validation and exhaustive matching.
//!
//! `EngineKind` exists only for the outer surfaces (CLI flags, config files):
//! it builds a boxed [`Engine`](crate::engine::Engine) and steps out of the
//! way. The car itself only ever sees the trait, so the set of kinds listed
//! here does not limit which engines a car can hold.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::engine::{Electric, Engine, Hybrid, Petrol};

/// Built-in engine variant selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    #[default]
    #[strum(serialize = "petrol")]
    Petrol,
    #[strum(serialize = "electric")]
    Electric,
    #[strum(serialize = "hybrid")]
    Hybrid,
}

impl EngineKind {
    /// Build a fresh boxed engine of this kind.
    ///
    /// Each call returns a new instance; engines are single-owner and travel
    /// with whichever car they are injected into.
    pub fn build(self) -> Box<dyn Engine> {
        match self {
            Self::Petrol => Box::new(Petrol),
            Self::Electric => Box::new(Electric),
            Self::Hybrid => Box::new(Hybrid),
        }
    }
}
