//! Car component that delegates engine behavior to the injected engine.
//!
//! The car holds exactly one engine at a time and forwards every
//! engine-specific call through it. Output ordering is part of the contract:
//! the car's own announcement line is written before the engine's report
//! line.
//!
//! # Design Principles
//!
//! - **Single Source of Truth**: The `Car` owns the current engine; nothing
//!   bypasses it.
//! - **No Absent State**: `Car::new` takes the engine by value, so a car
//!   without an engine is unrepresentable.
//! - **Injected Output**: All observable lines go to a caller-supplied sink,
//!   never to a hardwired stream.

use std::io::Write;

use tracing::debug;

use crate::engine::Engine;
use crate::error::Result;

/// A car composed with a replaceable engine.
pub struct Car {
    /// The currently held engine. Swapped only by [`Car::set_engine`].
    engine: Box<dyn Engine>,
}

impl Car {
    /// Create a car holding `engine` as its current engine.
    pub fn new(engine: Box<dyn Engine>) -> Self {
        debug!(engine = engine.label(), "car constructed");
        Self { engine }
    }

    /// Label of the currently held engine.
    #[allow(dead_code)] // API: status display for external consumers
    pub fn engine_label(&self) -> &'static str {
        self.engine.label()
    }

    /// Start the car: announce the current engine, then delegate to it.
    ///
    /// Writes two lines to `out`, in order:
    /// `Car is starting with <label>` followed by the engine's own start
    /// report.
    pub fn start(&mut self, out: &mut impl Write) -> Result<()> {
        debug!(engine = self.engine.label(), "starting car");
        writeln!(out, "Car is starting with {}", self.engine.label())?;
        writeln!(out, "{}", self.engine.start())?;
        Ok(())
    }

    /// Stop the car: announce the current engine, then delegate to it.
    pub fn stop(&mut self, out: &mut impl Write) -> Result<()> {
        debug!(engine = self.engine.label(), "stopping car");
        writeln!(out, "Car is stopping with {}", self.engine.label())?;
        writeln!(out, "{}", self.engine.stop())?;
        Ok(())
    }

    /// Replace the held engine, returning the previous one.
    ///
    /// Takes effect immediately: every subsequent [`start`](Car::start) or
    /// [`stop`](Car::stop) delegates to the new engine. The previous engine
    /// is handed back so the caller can re-inject it elsewhere.
    pub fn set_engine(
        &mut self,
        engine: Box<dyn Engine>,
        out: &mut impl Write,
    ) -> Result<Box<dyn Engine>> {
        let previous = std::mem::replace(&mut self.engine, engine);
        debug!(
            from = previous.label(),
            to = self.engine.label(),
            "engine replaced"
        );
        writeln!(out, "Engine replaced with: {}", self.engine.label())?;
        Ok(previous)
    }
}
