//! Single owner of the currency session, both wizards and their timers
//!
//! All reads and writes of the selected currency go through the gateway,
//! so a projection can never be generated against a half-applied currency
//! change. Presentation code reads wizard state through [`Gateway::career`]
//! and [`Gateway::wealth`] and acts only through the gateway's methods.

use log::info;
use tokio::sync::watch;

use crate::advisor;
use crate::config::SimulatorConfig;
use crate::currency::{Currency, CurrencySession};
use crate::error::SimulationError;
use crate::mode::ModeSelector;
use crate::projection::{
    CareerField, CareerGenerator, CareerInput, Engine, WealthField, WealthGenerator, WealthInput,
};
use crate::report::Report;
use crate::wizard::{PendingScheduler, RequestId, Resolution, Wizard};

/// What happened when a Pending timer fired
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub engine: Engine,
    pub request_id: RequestId,
    pub resolution: Resolution,
}

#[derive(Debug)]
pub struct Gateway {
    session: CurrencySession,
    mode: ModeSelector,
    career: Wizard<CareerGenerator>,
    wealth: Wizard<WealthGenerator>,
    scheduler: PendingScheduler,
}

impl Gateway {
    pub fn new(config: &SimulatorConfig) -> Self {
        Self {
            session: CurrencySession::new(config.default_currency),
            mode: ModeSelector::new(config.default_mode),
            career: Wizard::new(
                CareerGenerator,
                CareerInput::default(),
                config.latency(Engine::Career),
            ),
            wealth: Wizard::new(
                WealthGenerator,
                WealthInput::default(),
                config.latency(Engine::Wealth),
            ),
            scheduler: PendingScheduler::new(),
        }
    }

    pub fn career(&self) -> &Wizard<CareerGenerator> {
        &self.career
    }

    pub fn wealth(&self) -> &Wizard<WealthGenerator> {
        &self.wealth
    }

    pub fn session(&self) -> &CurrencySession {
        &self.session
    }

    pub fn currency(&self) -> Currency {
        self.session.selected()
    }

    pub fn subscribe_currency(&self) -> watch::Receiver<Currency> {
        self.session.subscribe()
    }

    /// Change the selected currency and regenerate every displayed result.
    ///
    /// Wizards are refreshed in a fixed order, career then wealth. Returns
    /// whether the currency changed.
    pub fn select_currency(&mut self, currency: Currency) -> Result<bool, SimulationError> {
        if !self.session.select(currency) {
            return Ok(false);
        }

        let career = self.career.currency_changed(currency);
        let wealth = self.wealth.currency_changed(currency);
        career?;
        wealth?;
        Ok(true)
    }

    pub fn mode(&self) -> Engine {
        self.mode.active()
    }

    pub fn set_mode(&mut self, engine: Engine) {
        self.mode.select(engine);
    }

    pub fn toggle_mode(&mut self) -> Engine {
        self.mode.toggle()
    }

    pub fn update_career(&mut self, field: CareerField) -> Result<(), SimulationError> {
        if self.career.update_field(field)?.is_some() {
            self.scheduler.cancel(Engine::Career);
        }
        Ok(())
    }

    pub fn update_wealth(&mut self, field: WealthField) -> Result<(), SimulationError> {
        if self.wealth.update_field(field)?.is_some() {
            self.scheduler.cancel(Engine::Wealth);
        }
        Ok(())
    }

    /// Set the wealth risk profile and goal from a 0-100 risk score
    pub fn apply_risk_score(&mut self, score: u8) -> Result<(), SimulationError> {
        for field in advisor::fields_for_risk_score(score) {
            self.update_wealth(field)?;
        }
        Ok(())
    }

    /// Move `engine`'s wizard to Pending and start its timer.
    ///
    /// Must be called from within a tokio runtime.
    pub fn submit(&mut self, engine: Engine) -> Result<RequestId, SimulationError> {
        let ticket = match engine {
            Engine::Career => self.career.submit()?,
            Engine::Wealth => self.wealth.submit()?,
        };
        self.scheduler.schedule(ticket);
        Ok(ticket.request_id)
    }

    /// Return `engine`'s wizard to Input with its last submitted values
    pub fn reset(&mut self, engine: Engine) {
        let abandoned = match engine {
            Engine::Career => self.career.reset(),
            Engine::Wealth => self.wealth.reset(),
        };
        if abandoned.is_some() {
            self.scheduler.cancel(engine);
        }
    }

    /// Discard any in-flight run of `engine` without a result
    pub fn dispose(&mut self, engine: Engine) {
        match engine {
            Engine::Career => self.career.cancel_pending(),
            Engine::Wealth => self.wealth.cancel_pending(),
        };
        self.scheduler.cancel(engine);
    }

    pub fn has_pending(&self) -> bool {
        self.scheduler.outstanding() > 0
    }

    /// Wait for the next Pending timer and apply it to its wizard.
    ///
    /// The generator runs with the currency selected at the moment the timer
    /// fires. Returns `None` when nothing is pending.
    pub async fn next_completion(&mut self) -> Option<Completion> {
        let fired = self.scheduler.next_fired().await?;
        let currency = self.session.selected();

        let resolution = match fired.engine {
            Engine::Career => self.career.resolve(fired.request_id, currency),
            Engine::Wealth => self.wealth.resolve(fired.request_id, currency),
        };
        if resolution == Resolution::Completed {
            info!("{} projection ready ({})", fired.engine, currency);
        }

        Some(Completion {
            engine: fired.engine,
            request_id: fired.request_id,
            resolution,
        })
    }

    /// Report for `engine`'s current Result, if it has one
    pub fn report(&self, engine: Engine) -> Option<Report> {
        match engine {
            Engine::Career => {
                let result = self.career.result()?;
                Some(Report::career(self.career.state().inputs(), result))
            }
            Engine::Wealth => {
                let result = self.wealth.result()?;
                Some(Report::wealth(self.wealth.state().inputs(), result))
            }
        }
    }
}

impl Default for Gateway {
    fn default() -> Self {
        Self::new(&SimulatorConfig::default())
    }
}
