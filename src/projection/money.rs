//! Currency-tagged monetary values

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::currency::{self, Currency};

/// An amount tagged with the currency it was generated in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Money {
    pub amount: f64,
    pub currency: Currency,
}

impl Money {
    pub fn new(amount: f64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Scale a base-currency constant into `currency`
    pub fn from_base(base_amount: f64, currency: Currency) -> Self {
        Self::new(base_amount * currency::multiplier(currency), currency)
    }

    /// Formatted with the tagged currency's symbol and rounding
    pub fn display(&self) -> String {
        currency::format(self.amount, self.currency)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_base_scales_by_rate() {
        let m = Money::from_base(1_000.0, Currency::Sgd);
        assert!((m.amount - 1_340.0).abs() < 1e-9);
        assert_eq!(m.currency, Currency::Sgd);
        assert_eq!(m.to_string(), "S$1,340");
    }
}
