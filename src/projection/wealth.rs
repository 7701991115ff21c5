//! Wealth engine: investment form and its projection generator
//!
//! The projection is synthetic. Headline figures are fixed base-currency
//! constants scaled by the selected currency's multiplier, and the yearly
//! series grows linearly with a fixed step per risk tier. Only `principal`
//! validation and `duration_years` actually depend on the form.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::{Engine, FormInput, ProjectionGenerator};
use crate::currency::{self, Currency};
use crate::error::SimulationError;

/// Shortest and longest investment horizon accepted by the form
pub const MIN_DURATION_YEARS: u32 = 1;
pub const MAX_DURATION_YEARS: u32 = 30;

pub const BEST_CASE_BASE: f64 = 3_450_200.0;
pub const WORST_CASE_BASE: f64 = 1_120_500.0;
pub const CONFIDENCE_PCT: u8 = 88;
pub const EXPECTED_RETURN_RANGE: &str = "12.4% - 15.1%";

// Series shape, in base-currency units
const SERIES_START: f64 = 1_000.0;
const BASELINE_STEP: f64 = 150.0;
const CONSERVATIVE_STEP: f64 = 80.0;
const AGGRESSIVE_STEP: f64 = 250.0;

/// Investor risk appetite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RiskProfile {
    Conservative,
    Balanced,
    Aggressive,
}

impl RiskProfile {
    pub fn label(&self) -> &'static str {
        match self {
            RiskProfile::Conservative => "conservative",
            RiskProfile::Balanced => "balanced",
            RiskProfile::Aggressive => "aggressive",
        }
    }
}

/// Market region the portfolio targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    GlobalDiversified,
    UsMarkets,
    AsiaPacific,
    EmergingMarkets,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Region::GlobalDiversified => "Global Diversified",
            Region::UsMarkets => "US Markets",
            Region::AsiaPacific => "Asia Pacific",
            Region::EmergingMarkets => "Emerging Markets",
        };
        f.write_str(label)
    }
}

/// Investment objective, kept in step with the risk profile by
/// [`crate::advisor::fields_for_risk_score`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentGoal {
    Safety,
    Growth,
    MaxGrowth,
}

/// Live form of the wealth wizard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WealthInput {
    /// Raw text as typed; validated only when a projection is generated
    pub principal: String,
    duration_years: u32,
    pub risk_profile: RiskProfile,
    pub region: Region,
    pub goal: InvestmentGoal,
}

impl WealthInput {
    pub fn new(
        principal: impl Into<String>,
        duration_years: u32,
        risk_profile: RiskProfile,
        region: Region,
    ) -> Self {
        Self {
            principal: principal.into(),
            duration_years: clamp_duration(duration_years),
            risk_profile,
            region,
            goal: InvestmentGoal::Growth,
        }
    }

    /// Horizon in years, always within `[1, 30]`
    pub fn duration_years(&self) -> u32 {
        self.duration_years
    }

    pub fn set_duration_years(&mut self, years: u32) {
        self.duration_years = clamp_duration(years);
    }

    /// Parse `principal` into a usable amount
    pub fn parsed_principal(&self) -> Result<f64, SimulationError> {
        parse_principal(&self.principal)
    }
}

impl Default for WealthInput {
    fn default() -> Self {
        Self::new("1000000", 10, RiskProfile::Balanced, Region::GlobalDiversified)
    }
}

/// Single-field edits accepted by the wealth form
#[derive(Debug, Clone, PartialEq)]
pub enum WealthField {
    Principal(String),
    DurationYears(u32),
    RiskProfile(RiskProfile),
    Region(Region),
    Goal(InvestmentGoal),
}

impl FormInput for WealthInput {
    type Field = WealthField;

    fn apply(&mut self, field: WealthField) {
        match field {
            WealthField::Principal(raw) => self.principal = raw,
            WealthField::DurationYears(years) => self.set_duration_years(years),
            WealthField::RiskProfile(risk) => self.risk_profile = risk,
            WealthField::Region(region) => self.region = region,
            WealthField::Goal(goal) => self.goal = goal,
        }
    }
}

fn clamp_duration(years: u32) -> u32 {
    years.clamp(MIN_DURATION_YEARS, MAX_DURATION_YEARS)
}

/// Parse a raw principal, rejecting anything that is not a finite,
/// non-negative number
pub fn parse_principal(raw: &str) -> Result<f64, SimulationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SimulationError::invalid_input("principal", "value is empty"));
    }

    let value: f64 = trimmed.parse().map_err(|_| {
        SimulationError::invalid_input("principal", format!("`{}` is not a number", trimmed))
    })?;

    if !value.is_finite() {
        return Err(SimulationError::invalid_input(
            "principal",
            "value must be a finite number",
        ));
    }
    if value < 0.0 {
        return Err(SimulationError::invalid_input(
            "principal",
            "value must not be negative",
        ));
    }

    Ok(value)
}

/// One year of the wealth series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WealthPoint {
    pub period: String,
    pub baseline: Money,
    pub conservative: Money,
    pub aggressive: Money,
}

/// Result of a wealth projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WealthProjection {
    pub expected_return_range: String,
    pub best_case: Money,
    pub worst_case: Money,
    pub confidence_pct: u8,
    pub series: Vec<WealthPoint>,
}

impl WealthProjection {
    /// Currency every money field was generated in
    pub fn currency(&self) -> Currency {
        self.best_case.currency
    }
}

/// Generator for the wealth engine
#[derive(Debug, Clone, Copy, Default)]
pub struct WealthGenerator;

impl WealthGenerator {
    fn series(years: u32, currency: Currency) -> Vec<WealthPoint> {
        let m = currency::multiplier(currency);
        let base_start = SERIES_START * m;

        (0..years)
            .map(|year| {
                let i = year as f64;
                WealthPoint {
                    period: format!("Y{}", year + 1),
                    baseline: Money::new(base_start + i * BASELINE_STEP * m, currency),
                    conservative: Money::new(base_start + i * CONSERVATIVE_STEP * m, currency),
                    aggressive: Money::new(base_start + i * AGGRESSIVE_STEP * m, currency),
                }
            })
            .collect()
    }
}

impl ProjectionGenerator for WealthGenerator {
    type Input = WealthInput;
    type Output = WealthProjection;

    const ENGINE: Engine = Engine::Wealth;

    fn generate(
        &self,
        input: &WealthInput,
        currency: Currency,
    ) -> Result<WealthProjection, SimulationError> {
        input.parsed_principal()?;

        Ok(WealthProjection {
            expected_return_range: EXPECTED_RETURN_RANGE.to_string(),
            best_case: Money::from_base(BEST_CASE_BASE, currency),
            worst_case: Money::from_base(WORST_CASE_BASE, currency),
            confidence_pct: CONFIDENCE_PCT,
            series: Self::series(input.duration_years(), currency),
        })
    }
}
