//! Hybrid engine variant.
//!
//! The contract requires no internal state, so this stays a unit struct like
//! the other variants. A real hybrid would track which power source is active;
//! the `&mut self` receivers on [`Engine`] leave room for that.

use super::Engine;

/// Combined petrol/electric engine.
#[derive(Debug, Default, Clone, Copy)]
pub struct Hybrid;

impl Engine for Hybrid {
    fn start(&mut self) -> String {
        "Hybrid engine is starting...".to_string()
    }

    fn stop(&mut self) -> String {
        "Hybrid engine is stopping...".to_string()
    }

    fn label(&self) -> &'static str {
        "Hybrid Engine"
    }
}
