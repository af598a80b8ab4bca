//! Engine capability and its built-in variants.
//!
//! The engine layer is the seam the car delegates through: the [`Engine`]
//! trait defines the contract, and each submodule provides one concrete
//! variant. The car never names a variant, so new engines plug in without
//! touching it.

pub mod electric;
pub mod hybrid;
pub mod petrol;

pub use electric::Electric;
pub use hybrid::Hybrid;
pub use petrol::Petrol;

/// Polymorphic engine contract.
///
/// Implementors produce their report lines; whoever holds the engine decides
/// where those lines go. Keeping emission out of the trait is what makes the
/// contract assertable in tests without capturing stdout.
///
/// # Contract
///
/// - `start()` / `stop()`: Return the report line for the transition
///   (e.g., `"Petrol engine is starting..."`). They never write it anywhere.
/// - `label()`: Returns a stable, human-readable variant label
///   (e.g., `"Petrol Engine"`). Pure, no side effects.
///
/// # Invariants
///
/// - `label()` MUST return the identical string on every call.
/// - Implementing this trait is all a new variant needs; the car component
///   never has to change.
pub trait Engine {
    /// Start the engine, returning the line it reports.
    fn start(&mut self) -> String;

    /// Stop the engine, returning the line it reports.
    fn stop(&mut self) -> String;

    /// Get the variant label.
    ///
    /// Stable across calls and shared by every instance of the variant.
    fn label(&self) -> &'static str;
}
