//! Historical crisis replays for the wealth engine
//!
//! Each scenario is a fixed series of portfolio and market values indexed
//! to 100 at the start of the episode. Replaying a scenario reports the
//! peak-to-trough drawdown of both lines.

use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

pub const STRESS_WARNING: &str = "STRESS TEST WARNING: Emotional resilience required.";

/// One observation in a crisis series
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CrisisPoint {
    pub label: &'static str,
    pub portfolio: f64,
    pub market: f64,
}

const fn point(label: &'static str, portfolio: f64, market: f64) -> CrisisPoint {
    CrisisPoint {
        label,
        portfolio,
        market,
    }
}

const GFC_2008: [CrisisPoint; 8] = [
    point("Q1", 100.0, 100.0),
    point("Q2", 95.0, 92.0),
    point("Q3", 88.0, 75.0),
    point("Q4", 72.0, 55.0),
    point("Q5", 68.0, 52.0),
    point("Q6", 75.0, 65.0),
    point("Q7", 82.0, 78.0),
    point("Q8", 90.0, 85.0),
];

const COVID_2020: [CrisisPoint; 7] = [
    point("Feb", 100.0, 100.0),
    point("Mar 1", 92.0, 85.0),
    point("Mar 15", 75.0, 66.0),
    point("Apr", 85.0, 80.0),
    point("May", 92.0, 90.0),
    point("Jun", 98.0, 96.0),
    point("Jul", 102.0, 101.0),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum)]
pub enum CrisisScenario {
    #[serde(rename = "gfc2008")]
    #[value(name = "gfc2008")]
    Gfc2008,
    #[serde(rename = "covid2020")]
    #[value(name = "covid2020")]
    Covid2020,
}

impl CrisisScenario {
    pub const ALL: [CrisisScenario; 2] = [CrisisScenario::Gfc2008, CrisisScenario::Covid2020];

    pub fn key(&self) -> &'static str {
        match self {
            CrisisScenario::Gfc2008 => "gfc2008",
            CrisisScenario::Covid2020 => "covid2020",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CrisisScenario::Gfc2008 => "2008 Global Financial Crisis",
            CrisisScenario::Covid2020 => "2020 Pandemic Flash Crash",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CrisisScenario::Gfc2008 => {
                "A liquidity crisis triggering a -50% global equity drawdown."
            }
            CrisisScenario::Covid2020 => {
                "Rapid -34% drop followed by unprecedented V-shaped recovery."
            }
        }
    }

    pub fn series(&self) -> &'static [CrisisPoint] {
        match self {
            CrisisScenario::Gfc2008 => &GFC_2008,
            CrisisScenario::Covid2020 => &COVID_2020,
        }
    }

    pub fn replay(&self) -> CrisisReplay {
        let series = self.series();
        CrisisReplay {
            scenario: *self,
            name: self.name(),
            description: self.description(),
            portfolio_drawdown_pct: max_drawdown_pct(series.iter().map(|p| p.portfolio)),
            market_drawdown_pct: max_drawdown_pct(series.iter().map(|p| p.market)),
            series: series.to_vec(),
        }
    }
}

impl fmt::Display for CrisisScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A replayed scenario with its drawdowns
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrisisReplay {
    pub scenario: CrisisScenario,
    pub name: &'static str,
    pub description: &'static str,
    pub series: Vec<CrisisPoint>,
    pub portfolio_drawdown_pct: f64,
    pub market_drawdown_pct: f64,
}

impl CrisisReplay {
    /// Drawdown avoided by the portfolio relative to the market, in points
    pub fn protection_pct(&self) -> f64 {
        self.market_drawdown_pct - self.portfolio_drawdown_pct
    }
}

/// Largest fall from a running peak, as a percentage of that peak
pub fn max_drawdown_pct(values: impl IntoIterator<Item = f64>) -> f64 {
    let mut peak = f64::NEG_INFINITY;
    let mut worst: f64 = 0.0;
    for value in values {
        peak = peak.max(value);
        if peak > 0.0 {
            worst = worst.max((peak - value) / peak * 100.0);
        }
    }
    worst
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_gfc_drawdowns() {
        let replay = CrisisScenario::Gfc2008.replay();
        assert_eq!(replay.series.len(), 8);
        assert_relative_eq!(replay.portfolio_drawdown_pct, 32.0, epsilon = 1e-9);
        assert_relative_eq!(replay.market_drawdown_pct, 48.0, epsilon = 1e-9);
        assert_relative_eq!(replay.protection_pct(), 16.0, epsilon = 1e-9);
    }

    #[test]
    fn test_covid_drawdowns() {
        let replay = CrisisScenario::Covid2020.replay();
        assert_eq!(replay.series.last().map(|p| p.label), Some("Jul"));
        assert_relative_eq!(replay.portfolio_drawdown_pct, 25.0, epsilon = 1e-9);
        assert_relative_eq!(replay.market_drawdown_pct, 34.0, epsilon = 1e-9);
    }

    #[test]
    fn test_drawdown_measures_from_running_peak() {
        // Later peak of 120 makes the fall to 90 the deepest (25%)
        assert_relative_eq!(
            max_drawdown_pct([100.0, 95.0, 120.0, 90.0, 130.0]),
            25.0,
            epsilon = 1e-9
        );
        assert_eq!(max_drawdown_pct([100.0, 110.0, 120.0]), 0.0);
        assert_eq!(max_drawdown_pct(std::iter::empty::<f64>()), 0.0);
    }

    #[test]
    fn test_scenario_keys_serialize() {
        let json = serde_json::to_string(&CrisisScenario::ALL).unwrap();
        assert_eq!(json, r#"["gfc2008","covid2020"]"#);
        assert_eq!(CrisisScenario::Covid2020.key(), "covid2020");
    }
}
