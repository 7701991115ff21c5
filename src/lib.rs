//! Dual Gateway - career and wealth simulation wizards over a shared currency
//!
//! This library provides:
//! - A closed currency registry with conversion and formatting
//! - An owned currency session with change notification
//! - Deterministic projection generators for the career and wealth engines
//! - A generic Input → Pending → Result wizard with cancellable timers
//! - Historical crisis replays with drawdowns
//! - Report hand-off (JSON, series CSV) and multi-currency sweeps

pub mod advisor;
pub mod config;
pub mod crisis;
pub mod currency;
pub mod error;
pub mod gateway;
pub mod mode;
pub mod projection;
pub mod report;
pub mod scenario;
pub mod wizard;

// Re-export commonly used types
pub use config::SimulatorConfig;
pub use currency::{Currency, CurrencySession};
pub use error::{ConfigError, SimulationError};
pub use gateway::{Completion, Gateway};
pub use projection::{Engine, Money, ProjectionGenerator};
pub use report::Report;
pub use scenario::CurrencySweep;
pub use wizard::{Resolution, Wizard, WizardState};
