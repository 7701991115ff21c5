//! Read-only hand-off of a finished projection to report/export consumers

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::currency::Currency;
use crate::projection::{
    CareerInput, CareerProjection, Country, EducationLevel, Engine, Region, RiskProfile,
    WealthInput, WealthProjection,
};

/// Engine-specific part of a report: the echoed inputs and the result
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "engine", rename_all = "lowercase")]
pub enum ReportBody {
    Career {
        goal: String,
        country_of_interest: Country,
        education_level: EducationLevel,
        projection: CareerProjection,
    },
    Wealth {
        principal: String,
        duration_years: u32,
        risk_profile: RiskProfile,
        region: Region,
        projection: WealthProjection,
    },
}

/// A finalized projection plus the subset of inputs that produced it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub currency: Currency,
    #[serde(flatten)]
    pub body: ReportBody,
}

impl Report {
    pub fn career(input: &CareerInput, projection: &CareerProjection) -> Self {
        Self {
            generated_at: Utc::now(),
            currency: projection.currency(),
            body: ReportBody::Career {
                goal: input.goal.clone(),
                country_of_interest: input.country_of_interest,
                education_level: input.education_level,
                projection: projection.clone(),
            },
        }
    }

    pub fn wealth(input: &WealthInput, projection: &WealthProjection) -> Self {
        Self {
            generated_at: Utc::now(),
            currency: projection.currency(),
            body: ReportBody::Wealth {
                principal: input.principal.clone(),
                duration_years: input.duration_years(),
                risk_profile: input.risk_profile,
                region: input.region,
                projection: projection.clone(),
            },
        }
    }

    /// Pin the timestamp, e.g. for reproducible exports
    pub fn with_timestamp(mut self, generated_at: DateTime<Utc>) -> Self {
        self.generated_at = generated_at;
        self
    }

    pub fn engine(&self) -> Engine {
        match self.body {
            ReportBody::Career { .. } => Engine::Career,
            ReportBody::Wealth { .. } => Engine::Wealth,
        }
    }

    /// Headline label/value pairs, money already formatted
    pub fn headline(&self) -> Vec<(&'static str, String)> {
        match &self.body {
            ReportBody::Career {
                goal,
                country_of_interest,
                education_level,
                projection,
            } => vec![
                ("Goal", goal.clone()),
                ("Country", country_of_interest.to_string()),
                ("Background", education_level.to_string()),
                ("Pathway", projection.pathway_label.clone()),
                (
                    "Success probability",
                    format!("{}%", projection.success_probability_pct),
                ),
                ("Projected cost", projection.projected_cost.to_string()),
                ("Projected income", projection.income_per_year()),
                ("Scholarship", projection.scholarship_tier.clone()),
            ],
            ReportBody::Wealth {
                principal,
                duration_years,
                risk_profile,
                region,
                projection,
            } => vec![
                ("Principal", principal.clone()),
                ("Duration", format!("{} years", duration_years)),
                ("Risk profile", risk_profile.label().to_string()),
                ("Region", region.to_string()),
                ("Expected return", projection.expected_return_range.clone()),
                ("Best case", projection.best_case.to_string()),
                ("Worst case", projection.worst_case.to_string()),
                ("Confidence", format!("{}%", projection.confidence_pct)),
            ],
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Write the projection series as CSV with raw (unformatted) amounts
    pub fn write_series_csv<W: Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut out = csv::Writer::from_writer(writer);
        let code = self.currency.code();

        match &self.body {
            ReportBody::Career { projection, .. } => {
                out.write_record(["Label", "Cost", "Income", "Currency"])?;
                for point in &projection.series {
                    out.write_record([
                        point.label.clone(),
                        format!("{:.2}", point.cost.amount),
                        format!("{:.2}", point.income.amount),
                        code.to_string(),
                    ])?;
                }
            }
            ReportBody::Wealth { projection, .. } => {
                out.write_record(["Period", "Baseline", "Conservative", "Aggressive", "Currency"])?;
                for point in &projection.series {
                    out.write_record([
                        point.period.clone(),
                        format!("{:.2}", point.baseline.amount),
                        format!("{:.2}", point.conservative.amount),
                        format!("{:.2}", point.aggressive.amount),
                        code.to_string(),
                    ])?;
                }
            }
        }

        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{CareerGenerator, ProjectionGenerator, WealthGenerator};
    use chrono::TimeZone;

    fn wealth_report() -> Report {
        let input = WealthInput::new("1000000", 3, RiskProfile::Balanced, Region::UsMarkets);
        let projection = WealthGenerator.generate(&input, Currency::Usd).unwrap();
        Report::wealth(&input, &projection)
            .with_timestamp(Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap())
    }

    #[test]
    fn test_wealth_headline() {
        let report = wealth_report();
        assert_eq!(report.engine(), Engine::Wealth);
        let headline = report.headline();
        assert!(headline.contains(&("Best case", "$3,450,200".to_string())));
        assert!(headline.contains(&("Principal", "1000000".to_string())));
        assert!(headline.contains(&("Region", "US Markets".to_string())));
    }

    #[test]
    fn test_wealth_series_csv() {
        let mut buf = Vec::new();
        wealth_report().write_series_csv(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "Period,Baseline,Conservative,Aggressive,Currency");
        assert_eq!(lines[1], "Y1,1000.00,1000.00,1000.00,USD");
        assert_eq!(lines[3], "Y3,1300.00,1160.00,1500.00,USD");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_json_is_tagged_by_engine() {
        let json = wealth_report().to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["engine"], "wealth");
        assert_eq!(value["currency"], "USD");
        assert_eq!(value["projection"]["confidence_pct"], 88);
        assert_eq!(value["generated_at"], "2024-01-02T03:04:05Z");
    }

    #[test]
    fn test_career_report_echoes_goal() {
        let input = CareerInput {
            goal: "Data Scientist".to_string(),
            ..CareerInput::default()
        };
        let projection = CareerGenerator.generate(&input, Currency::Sgd).unwrap();
        let report = Report::career(&input, &projection);

        assert_eq!(report.currency, Currency::Sgd);
        let headline = report.headline();
        assert_eq!(headline[0], ("Goal", "Data Scientist".to_string()));
        assert!(headline.contains(&("Projected cost", "S$160,800".to_string())));
    }
}
