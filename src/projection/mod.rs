//! Projection generators for the career and wealth engines
//!
//! Both generators are pure: the same `(input, currency)` pair always
//! produces the same output, so results can be regenerated on a currency
//! change instead of being relabeled.

mod money;
pub mod career;
pub mod wealth;

pub use money::Money;
pub use career::{
    CareerField, CareerGenerator, CareerInput, CareerPoint, CareerProjection, Country,
    EducationLevel,
};
pub use wealth::{
    InvestmentGoal, Region, RiskProfile, WealthField, WealthGenerator, WealthInput, WealthPoint,
    WealthProjection,
};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::currency::Currency;
use crate::error::SimulationError;

/// The two simulation domains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    Career,
    Wealth,
}

impl Engine {
    pub fn label(&self) -> &'static str {
        match self {
            Engine::Career => "career",
            Engine::Wealth => "wealth",
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A wizard form that is edited one field at a time
pub trait FormInput: Clone + fmt::Debug {
    type Field: fmt::Debug;

    /// Replace a single field
    fn apply(&mut self, field: Self::Field);
}

/// Deterministic producer of an engine's result payload
pub trait ProjectionGenerator {
    type Input: FormInput;
    type Output: Clone + fmt::Debug + PartialEq + Serialize;

    /// Engine this generator belongs to
    const ENGINE: Engine;

    fn generate(&self, input: &Self::Input, currency: Currency)
        -> Result<Self::Output, SimulationError>;
}
