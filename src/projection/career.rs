//! Career engine: education pathway form and its projection generator
//!
//! The form fields are collected and echoed into reports but do not change
//! the projection. Every result is the same canned pathway with money
//! fields scaled into the requested currency.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::{Engine, FormInput, ProjectionGenerator};
use crate::currency::Currency;
use crate::error::SimulationError;

pub const PATHWAY_LABEL: &str = "B.Sc Computer Science -> Internship";
pub const SUCCESS_PROBABILITY_PCT: u8 = 92;
pub const SCHOLARSHIP_TIER: &str = "High Potential (85%)";
pub const PROJECTED_COST_BASE: f64 = 120_000.0;
pub const PROJECTED_INCOME_BASE: f64 = 95_000.0;

// (label, cost, income) in base-currency units
const SERIES: [(&str, f64, f64); 5] = [
    ("Year 1", 30_000.0, 0.0),
    ("Year 2", 30_000.0, 5_000.0),
    ("Year 3", 30_000.0, 12_000.0),
    ("Year 4", 30_000.0, 25_000.0),
    ("Job Y1", 0.0, 95_000.0),
];

/// Destination country for study
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Country {
    Usa,
    Uk,
    Australia,
    Canada,
    Singapore,
    Germany,
    Japan,
    Uae,
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Country::Usa => "USA",
            Country::Uk => "UK",
            Country::Australia => "Australia",
            Country::Canada => "Canada",
            Country::Singapore => "Singapore",
            Country::Germany => "Germany",
            Country::Japan => "Japan",
            Country::Uae => "UAE",
        };
        f.write_str(label)
    }
}

/// Current education background
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    HighSchool,
    Undergraduate,
    Graduate,
    Professional,
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EducationLevel::HighSchool => "High School",
            EducationLevel::Undergraduate => "Undergraduate",
            EducationLevel::Graduate => "Graduate",
            EducationLevel::Professional => "Professional",
        };
        f.write_str(label)
    }
}

/// Live form of the career wizard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerInput {
    pub goal: String,
    pub country_of_interest: Country,
    pub education_level: EducationLevel,
}

impl Default for CareerInput {
    fn default() -> Self {
        Self {
            goal: "Software Engineer".to_string(),
            country_of_interest: Country::Usa,
            education_level: EducationLevel::HighSchool,
        }
    }
}

/// Single-field edits accepted by the career form
#[derive(Debug, Clone, PartialEq)]
pub enum CareerField {
    Goal(String),
    CountryOfInterest(Country),
    EducationLevel(EducationLevel),
}

impl FormInput for CareerInput {
    type Field = CareerField;

    fn apply(&mut self, field: CareerField) {
        match field {
            CareerField::Goal(goal) => self.goal = goal,
            CareerField::CountryOfInterest(country) => self.country_of_interest = country,
            CareerField::EducationLevel(level) => self.education_level = level,
        }
    }
}

/// One stage of the career pathway series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerPoint {
    pub label: String,
    pub cost: Money,
    pub income: Money,
}

/// Result of a career projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerProjection {
    pub pathway_label: String,
    pub success_probability_pct: u8,
    pub projected_cost: Money,
    pub projected_annual_income: Money,
    pub scholarship_tier: String,
    pub series: Vec<CareerPoint>,
}

impl CareerProjection {
    pub fn currency(&self) -> Currency {
        self.projected_cost.currency
    }

    /// Income line as shown to the user, e.g. `$95,000 / yr`
    pub fn income_per_year(&self) -> String {
        format!("{} / yr", self.projected_annual_income)
    }
}

/// Generator for the career engine
#[derive(Debug, Clone, Copy, Default)]
pub struct CareerGenerator;

impl ProjectionGenerator for CareerGenerator {
    type Input = CareerInput;
    type Output = CareerProjection;

    const ENGINE: Engine = Engine::Career;

    fn generate(
        &self,
        _input: &CareerInput,
        currency: Currency,
    ) -> Result<CareerProjection, SimulationError> {
        let series = SERIES
            .iter()
            .map(|&(label, cost, income)| CareerPoint {
                label: label.to_string(),
                cost: Money::from_base(cost, currency),
                income: Money::from_base(income, currency),
            })
            .collect();

        Ok(CareerProjection {
            pathway_label: PATHWAY_LABEL.to_string(),
            success_probability_pct: SUCCESS_PROBABILITY_PCT,
            projected_cost: Money::from_base(PROJECTED_COST_BASE, currency),
            projected_annual_income: Money::from_base(PROJECTED_INCOME_BASE, currency),
            scholarship_tier: SCHOLARSHIP_TIER.to_string(),
            series,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usd_projection() {
        let result = CareerGenerator
            .generate(&CareerInput::default(), Currency::Usd)
            .unwrap();

        assert_eq!(result.pathway_label, PATHWAY_LABEL);
        assert_eq!(result.success_probability_pct, 92);
        assert_eq!(result.projected_cost.to_string(), "$120,000");
        assert_eq!(result.income_per_year(), "$95,000 / yr");
        assert_eq!(result.series.len(), 5);
        assert_eq!(result.series[4].label, "Job Y1");
        assert_eq!(result.series[4].cost.amount, 0.0);
        assert_eq!(result.series[2].income.amount, 12_000.0);
    }

    #[test]
    fn test_money_fields_follow_currency() {
        let result = CareerGenerator
            .generate(&CareerInput::default(), Currency::Gbp)
            .unwrap();

        assert_eq!(result.currency(), Currency::Gbp);
        assert_eq!(result.projected_cost.to_string(), "£94,800");
        assert!(result
            .series
            .iter()
            .all(|p| p.cost.currency == Currency::Gbp && p.income.currency == Currency::Gbp));
    }

    #[test]
    fn test_inputs_do_not_change_projection() {
        let baseline = CareerGenerator
            .generate(&CareerInput::default(), Currency::Eur)
            .unwrap();

        let variants = [
            CareerInput {
                goal: "Marine Biologist".to_string(),
                country_of_interest: Country::Japan,
                education_level: EducationLevel::Graduate,
            },
            CareerInput {
                goal: String::new(),
                country_of_interest: Country::Uae,
                education_level: EducationLevel::Professional,
            },
        ];

        for form in &variants {
            let other = CareerGenerator.generate(form, Currency::Eur).unwrap();
            assert_eq!(other, baseline);
        }
    }

    #[test]
    fn test_field_updates() {
        let mut form = CareerInput::default();
        form.apply(CareerField::Goal("Architect".into()));
        form.apply(CareerField::CountryOfInterest(Country::Germany));
        assert_eq!(form.goal, "Architect");
        assert_eq!(form.country_of_interest, Country::Germany);
        assert_eq!(form.education_level, EducationLevel::HighSchool);
    }
}
