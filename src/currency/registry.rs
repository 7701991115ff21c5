//! Fixed exchange-rate and symbol tables with pure conversion helpers
//!
//! Rates are quoted as units of the currency per one unit of the base
//! currency (USD). The table is closed: there is no runtime registration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SimulationError;

/// Supported currency codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
    Jpy,
    Aud,
    Cad,
    Chf,
    Cny,
    Sek,
    Nzd,
    Mxn,
    Sgd,
    Hkd,
    Nok,
    Krw,
    Try,
    Inr,
    Rub,
    Brl,
    Zar,
    Myr,
}

/// The pivot currency for every conversion
pub const BASE_CURRENCY: Currency = Currency::Usd;

impl Currency {
    /// Every supported currency, in display order
    pub const ALL: [Currency; 21] = [
        Currency::Usd,
        Currency::Eur,
        Currency::Gbp,
        Currency::Jpy,
        Currency::Aud,
        Currency::Cad,
        Currency::Chf,
        Currency::Cny,
        Currency::Sek,
        Currency::Nzd,
        Currency::Mxn,
        Currency::Sgd,
        Currency::Hkd,
        Currency::Nok,
        Currency::Krw,
        Currency::Try,
        Currency::Inr,
        Currency::Rub,
        Currency::Brl,
        Currency::Zar,
        Currency::Myr,
    ];

    /// ISO-style three letter code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Jpy => "JPY",
            Currency::Aud => "AUD",
            Currency::Cad => "CAD",
            Currency::Chf => "CHF",
            Currency::Cny => "CNY",
            Currency::Sek => "SEK",
            Currency::Nzd => "NZD",
            Currency::Mxn => "MXN",
            Currency::Sgd => "SGD",
            Currency::Hkd => "HKD",
            Currency::Nok => "NOK",
            Currency::Krw => "KRW",
            Currency::Try => "TRY",
            Currency::Inr => "INR",
            Currency::Rub => "RUB",
            Currency::Brl => "BRL",
            Currency::Zar => "ZAR",
            Currency::Myr => "MYR",
        }
    }

    /// Units of this currency per one unit of [`BASE_CURRENCY`]
    pub fn rate_to_base(&self) -> f64 {
        match self {
            Currency::Usd => 1.0,
            Currency::Eur => 0.92,
            Currency::Gbp => 0.79,
            Currency::Jpy => 148.5,
            Currency::Aud => 1.52,
            Currency::Cad => 1.35,
            Currency::Chf => 0.88,
            Currency::Cny => 7.19,
            Currency::Sek => 10.4,
            Currency::Nzd => 1.63,
            Currency::Mxn => 17.1,
            Currency::Sgd => 1.34,
            Currency::Hkd => 7.82,
            Currency::Nok => 10.5,
            Currency::Krw => 1330.0,
            Currency::Try => 30.2,
            Currency::Inr => 83.1,
            Currency::Rub => 89.5,
            Currency::Brl => 4.95,
            Currency::Zar => 18.9,
            Currency::Myr => 4.72,
        }
    }

    /// Display symbol used as the prefix of formatted amounts
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Jpy => "¥",
            Currency::Aud => "A$",
            Currency::Cad => "C$",
            Currency::Chf => "Fr",
            Currency::Cny => "¥",
            Currency::Sek => "kr",
            Currency::Nzd => "NZ$",
            Currency::Mxn => "$",
            Currency::Sgd => "S$",
            Currency::Hkd => "HK$",
            Currency::Nok => "kr",
            Currency::Krw => "₩",
            Currency::Try => "₺",
            Currency::Inr => "₹",
            Currency::Rub => "₽",
            Currency::Brl => "R$",
            Currency::Zar => "R",
            Currency::Myr => "RM",
        }
    }

    pub fn is_base(&self) -> bool {
        *self == BASE_CURRENCY
    }
}

impl Default for Currency {
    fn default() -> Self {
        BASE_CURRENCY
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Currency::ALL
            .iter()
            .copied()
            .find(|c| c.code().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SimulationError::UnsupportedCurrency(wanted.to_string()))
    }
}

/// Convert an amount between two currencies by pivoting through the base
pub fn convert(amount: f64, from: Currency, to: Currency) -> f64 {
    let amount_in_base = amount / from.rate_to_base();
    amount_in_base * to.rate_to_base()
}

/// Scalar applied to every synthetic base-currency constant
pub fn multiplier(currency: Currency) -> f64 {
    convert(1.0, BASE_CURRENCY, currency)
}

/// Format an amount with the currency symbol, thousands separators and no
/// fractional digits.
///
/// Rounding is half-to-even on the whole unit, so `2.5` renders as `2` and
/// `3.5` as `4`. Negative amounts put the sign before the symbol.
pub fn format(amount: f64, currency: Currency) -> String {
    debug_assert!(amount.is_finite(), "non-finite amount reached format()");

    let rounded = amount.round_ties_even();
    let digits = format!("{:.0}", rounded.abs());
    let grouped = group_thousands(&digits);

    // -0.0 is not < 0.0, so a value that rounds to zero never gets a sign
    if rounded < 0.0 {
        format!("-{}{}", currency.symbol(), grouped)
    } else {
        format!("{}{}", currency.symbol(), grouped)
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_single_base_currency() {
        let bases: Vec<_> = Currency::ALL
            .iter()
            .filter(|c| c.rate_to_base() == 1.0)
            .collect();
        assert_eq!(bases, vec![&Currency::Usd]);
        assert!(Currency::Usd.is_base());
    }

    #[test]
    fn test_rates_positive_and_finite() {
        for c in Currency::ALL {
            let rate = c.rate_to_base();
            assert!(rate.is_finite() && rate > 0.0, "{} has bad rate {}", c, rate);
        }
    }

    #[test]
    fn test_convert_round_trip_all_pairs() {
        let amounts = [0.0, 1.0, 1234.56, 3_450_200.0];
        for a in Currency::ALL {
            for b in Currency::ALL {
                for &x in &amounts {
                    let back = convert(convert(x, a, b), b, a);
                    assert_relative_eq!(back, x, max_relative = 1e-12, epsilon = 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_convert_via_base() {
        // 100 EUR -> USD -> GBP
        let gbp = convert(100.0, Currency::Eur, Currency::Gbp);
        assert_relative_eq!(gbp, 100.0 / 0.92 * 0.79, max_relative = 1e-12);
        assert_relative_eq!(multiplier(Currency::Myr), 4.72);
        assert_relative_eq!(multiplier(Currency::Usd), 1.0);
    }

    #[test]
    fn test_format_grouping() {
        assert_eq!(format(3_450_200.0, Currency::Usd), "$3,450,200");
        assert_eq!(format(0.0, Currency::Usd), "$0");
        assert_eq!(format(999.0, Currency::Eur), "€999");
        assert_eq!(format(1000.0, Currency::Gbp), "£1,000");
        assert_eq!(format(4_588_766_000.0, Currency::Krw), "₩4,588,766,000");
    }

    #[test]
    fn test_format_rounds_half_to_even() {
        assert_eq!(format(2.5, Currency::Usd), "$2");
        assert_eq!(format(3.5, Currency::Usd), "$4");
        assert_eq!(format(1_000.49, Currency::Usd), "$1,000");
        assert_eq!(format(1_000.51, Currency::Usd), "$1,001");
    }

    #[test]
    fn test_format_negative_and_negative_zero() {
        assert_eq!(format(-1_234.0, Currency::Myr), "-RM1,234");
        assert_eq!(format(-0.4, Currency::Usd), "$0");
    }

    #[test]
    fn test_parse_codes() {
        assert_eq!("myr".parse::<Currency>().unwrap(), Currency::Myr);
        assert_eq!(" USD ".parse::<Currency>().unwrap(), Currency::Usd);
        assert_eq!(
            "XYZ".parse::<Currency>(),
            Err(SimulationError::UnsupportedCurrency("XYZ".to_string()))
        );
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&Currency::Try).unwrap();
        assert_eq!(json, "\"TRY\"");
        let back: Currency = serde_json::from_str("\"SGD\"").unwrap();
        assert_eq!(back, Currency::Sgd);
    }
}
