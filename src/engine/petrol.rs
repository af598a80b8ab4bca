//! Petrol (combustion) engine variant.

use super::Engine;

/// Conventional petrol engine.
///
/// Stateless: starting and stopping only produce report lines. The unit
/// struct keeps construction trivial for callers injecting it into a car.
#[derive(Debug, Default, Clone, Copy)]
pub struct Petrol;

impl Engine for Petrol {
    fn start(&mut self) -> String {
        "Petrol engine is starting...".to_string()
    }

    fn stop(&mut self) -> String {
        "Petrol engine is stopping...".to_string()
    }

    fn label(&self) -> &'static str {
        "Petrol Engine"
    }
}
