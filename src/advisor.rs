//! Advisor helpers around the wizards
//!
//! - risk score (0-100) to wealth risk profile and goal
//! - "quick check" outlook for a short horizon slider

use serde::Serialize;

use crate::projection::{Engine, InvestmentGoal, RiskProfile, WealthField};

pub const MAX_RISK_SCORE: u8 = 100;

pub const QUICK_CHECK_MIN_YEARS: u32 = 1;
pub const QUICK_CHECK_MAX_YEARS: u32 = 15;

/// Map a risk score onto the wealth form's profile and goal
pub fn profile_for_score(score: u8) -> (RiskProfile, InvestmentGoal) {
    let score = score.min(MAX_RISK_SCORE);
    if score < 30 {
        (RiskProfile::Conservative, InvestmentGoal::Safety)
    } else if score > 70 {
        (RiskProfile::Aggressive, InvestmentGoal::MaxGrowth)
    } else {
        (RiskProfile::Balanced, InvestmentGoal::Growth)
    }
}

/// Field edits that bring a wealth form in line with `score`
pub fn fields_for_risk_score(score: u8) -> [WealthField; 2] {
    let (risk, goal) = profile_for_score(score);
    [WealthField::RiskProfile(risk), WealthField::Goal(goal)]
}

/// Investor persona shown next to the risk slider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Persona {
    Guardian,
    Strategist,
    Maverick,
}

impl Persona {
    pub fn for_profile(profile: RiskProfile) -> Self {
        match profile {
            RiskProfile::Conservative => Persona::Guardian,
            RiskProfile::Balanced => Persona::Strategist,
            RiskProfile::Aggressive => Persona::Maverick,
        }
    }

    /// Persona bands are wider than the profile bands at the top end: a
    /// score of 70 is already a Maverick but still a Balanced profile.
    pub fn for_score(score: u8) -> Self {
        if score < 30 {
            Persona::Guardian
        } else if score < 70 {
            Persona::Strategist
        } else {
            Persona::Maverick
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Persona::Guardian => "Prioritizes safety over growth. Prone to panic selling.",
            Persona::Strategist => "Balanced view. Can handle volatility for long-term gain.",
            Persona::Maverick => "Seeks maximum yield. Risks overexposure.",
        }
    }
}

/// Short outlook for a horizon picked on the quick-check slider
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickCheck {
    pub years: u32,
    pub question: String,
    pub summary: &'static str,
    pub outlook: &'static str,
}

pub fn quick_check(engine: Engine, years: u32) -> QuickCheck {
    let years = years.clamp(QUICK_CHECK_MIN_YEARS, QUICK_CHECK_MAX_YEARS);

    let (question, summary, outlook) = match engine {
        Engine::Wealth => {
            let (summary, outlook) = if years < 3 {
                ("Short-term volatility high. Risk level: Medium-High.", "Confidence: 62%")
            } else if years < 8 {
                ("Growth phase initiating. Compounding starts.", "Confidence: 78%")
            } else {
                ("Full market cycle captured. Max resilience.", "Confidence: 94%")
            };
            (format!("What happens if I invest for {} years?", years), summary, outlook)
        }
        Engine::Career => {
            let (summary, outlook) = if years < 2 {
                ("Certificate level. Quick entry, flexible mobility.", "Global Demand: Moderate")
            } else if years < 5 {
                ("Degree level. High visa probability unlocked.", "Global Demand: High")
            } else {
                ("Research/Expert level. Elite global mobility.", "Global Demand: Very High")
            };
            (format!("What happens if I study for {} years?", years), summary, outlook)
        }
    };

    QuickCheck {
        years,
        question,
        summary,
        outlook,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_bands() {
        assert_eq!(
            profile_for_score(0),
            (RiskProfile::Conservative, InvestmentGoal::Safety)
        );
        assert_eq!(profile_for_score(29).0, RiskProfile::Conservative);
        assert_eq!(profile_for_score(30).0, RiskProfile::Balanced);
        assert_eq!(profile_for_score(70).0, RiskProfile::Balanced);
        assert_eq!(
            profile_for_score(71),
            (RiskProfile::Aggressive, InvestmentGoal::MaxGrowth)
        );
        assert_eq!(profile_for_score(255).0, RiskProfile::Aggressive);
    }

    #[test]
    fn test_persona_bands() {
        assert_eq!(Persona::for_score(29), Persona::Guardian);
        assert_eq!(Persona::for_score(30), Persona::Strategist);
        assert_eq!(Persona::for_score(69), Persona::Strategist);
        assert_eq!(Persona::for_score(70), Persona::Maverick);
        assert_eq!(Persona::for_score(100), Persona::Maverick);
    }

    #[test]
    fn test_persona_and_profile_differ_at_70() {
        assert_eq!(profile_for_score(70).0, RiskProfile::Balanced);
        assert_eq!(Persona::for_score(70), Persona::Maverick);
        assert_eq!(Persona::for_profile(RiskProfile::Balanced), Persona::Strategist);
    }

    #[test]
    fn test_quick_check_wealth() {
        assert_eq!(quick_check(Engine::Wealth, 2).outlook, "Confidence: 62%");
        assert_eq!(quick_check(Engine::Wealth, 5).outlook, "Confidence: 78%");
        let long = quick_check(Engine::Wealth, 40);
        assert_eq!(long.years, 15);
        assert_eq!(long.outlook, "Confidence: 94%");
        assert_eq!(long.question, "What happens if I invest for 15 years?");
    }

    #[test]
    fn test_quick_check_career() {
        assert_eq!(quick_check(Engine::Career, 0).outlook, "Global Demand: Moderate");
        assert_eq!(quick_check(Engine::Career, 4).outlook, "Global Demand: High");
        assert_eq!(quick_check(Engine::Career, 5).outlook, "Global Demand: Very High");
    }
}
