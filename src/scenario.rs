//! Run one form through a generator in many currencies at once
//!
//! Useful for comparison tables and for checking that every currency in
//! the registry produces a well-formed result.

use rayon::prelude::*;

use crate::currency::Currency;
use crate::error::SimulationError;
use crate::projection::ProjectionGenerator;

/// Parallel multi-currency runner for a single generator
///
/// # Example
/// ```ignore
/// let sweep = CurrencySweep::new(WealthGenerator);
/// for (currency, result) in sweep.run_all(&WealthInput::default())? {
///     println!("{}: {}", currency, result.best_case);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct CurrencySweep<G> {
    generator: G,
}

impl<G> CurrencySweep<G>
where
    G: ProjectionGenerator + Sync,
    G::Input: Sync,
    G::Output: Send,
{
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Generate in every supported currency, in registry order
    pub fn run_all(&self, input: &G::Input) -> Result<Vec<(Currency, G::Output)>, SimulationError> {
        self.run(input, &Currency::ALL)
    }

    /// Generate in each of `currencies`, preserving their order
    pub fn run(
        &self,
        input: &G::Input,
        currencies: &[Currency],
    ) -> Result<Vec<(Currency, G::Output)>, SimulationError> {
        currencies
            .par_iter()
            .map(|&currency| {
                self.generator
                    .generate(input, currency)
                    .map(|output| (currency, output))
            })
            .collect()
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{
        CareerGenerator, CareerInput, FormInput, WealthField, WealthGenerator, WealthInput,
    };

    #[test]
    fn test_sweep_matches_single_generation() {
        let sweep = CurrencySweep::new(WealthGenerator);
        let input = WealthInput::default();
        let results = sweep.run_all(&input).unwrap();

        assert_eq!(results.len(), Currency::ALL.len());
        for (i, (currency, result)) in results.iter().enumerate() {
            assert_eq!(*currency, Currency::ALL[i]);
            assert_eq!(result, &WealthGenerator.generate(&input, *currency).unwrap());
        }
    }

    #[test]
    fn test_sweep_propagates_invalid_input() {
        let sweep = CurrencySweep::new(WealthGenerator);
        let mut input = WealthInput::default();
        input.apply(WealthField::Principal("lots".into()));

        let err = sweep.run(&input, &[Currency::Usd, Currency::Eur]).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidInput { field: "principal", .. }));
    }

    #[test]
    fn test_career_sweep_subset() {
        let sweep = CurrencySweep::new(CareerGenerator);
        let results = sweep
            .run(&CareerInput::default(), &[Currency::Krw, Currency::Usd])
            .unwrap();
        assert_eq!(results[0].0, Currency::Krw);
        assert_eq!(results[0].1.projected_cost.to_string(), "₩159,600,000");
        assert_eq!(results[1].1.projected_cost.to_string(), "$120,000");
    }
}
