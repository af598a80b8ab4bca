//! Electric engine variant.

use super::Engine;

/// Battery-electric engine.
#[derive(Debug, Default, Clone, Copy)]
pub struct Electric;

impl Engine for Electric {
    fn start(&mut self) -> String {
        "Electric engine is starting...".to_string()
    }

    fn stop(&mut self) -> String {
        "Electric engine is stopping...".to_string()
    }

    fn label(&self) -> &'static str {
        "Electric Engine"
    }
}
