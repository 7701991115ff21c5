//! Selected-currency session state
//!
//! The session is an owned value rather than ambient global state. Its only
//! mutation entry point is [`CurrencySession::select`]; presentation code
//! observes changes through [`CurrencySession::subscribe`].

use log::info;
use tokio::sync::watch;

use super::registry::{self, Currency};

/// Holds the currency every monetary display is rendered in
#[derive(Debug)]
pub struct CurrencySession {
    selected: watch::Sender<Currency>,
}

impl CurrencySession {
    pub fn new(initial: Currency) -> Self {
        let (selected, _rx) = watch::channel(initial);
        Self { selected }
    }

    /// Currently selected currency
    pub fn selected(&self) -> Currency {
        *self.selected.borrow()
    }

    /// Replace the selected currency.
    ///
    /// Returns `true` when the value actually changed. Subscribers are only
    /// woken on a change, so re-selecting the current currency is a no-op.
    pub fn select(&self, currency: Currency) -> bool {
        let changed = self.selected.send_if_modified(|current| {
            if *current == currency {
                false
            } else {
                *current = currency;
                true
            }
        });
        if changed {
            info!("Currency changed to {}", currency);
        }
        changed
    }

    /// Receiver that observes every future currency change
    pub fn subscribe(&self) -> watch::Receiver<Currency> {
        self.selected.subscribe()
    }

    pub fn symbol(&self) -> &'static str {
        self.selected().symbol()
    }

    /// Format an amount in the selected currency
    pub fn format(&self, amount: f64) -> String {
        registry::format(amount, self.selected())
    }

    /// Convert an amount held in `from` into the selected currency
    pub fn convert(&self, amount: f64, from: Currency) -> f64 {
        registry::convert(amount, from, self.selected())
    }

    /// Multiplier for the selected currency
    pub fn multiplier(&self) -> f64 {
        registry::multiplier(self.selected())
    }
}

impl Default for CurrencySession {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}
