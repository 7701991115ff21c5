//! Input → Pending → Result state machine shared by both engines
//!
//! The machine itself never sleeps or spawns. `submit` hands back a
//! [`PendingTicket`] describing the timer to schedule, and the owner calls
//! [`Wizard::resolve`] when that timer fires. Any firing whose request id
//! does not match the current Pending state is ignored, so a timer that
//! escaped cancellation can never overwrite newer state.

use log::{debug, info, warn};
use std::time::Duration;

use super::state::{InputIssue, PendingTicket, RequestId, Resolution, WizardState};
use crate::currency::Currency;
use crate::error::SimulationError;
use crate::projection::{Engine, FormInput, ProjectionGenerator};

type FieldOf<G> = <<G as ProjectionGenerator>::Input as FormInput>::Field;

/// One simulation wizard, generic over its engine's generator
#[derive(Debug)]
pub struct Wizard<G: ProjectionGenerator> {
    generator: G,
    state: WizardState<G::Input, G::Output>,
    latency: Duration,
    last_request: u64,
}

impl<G: ProjectionGenerator> Wizard<G> {
    /// Create a wizard in the Input state
    pub fn new(generator: G, initial: G::Input, latency: Duration) -> Self {
        Self {
            generator,
            state: WizardState::Input {
                form: initial,
                issue: None,
            },
            latency,
            last_request: 0,
        }
    }

    pub fn engine(&self) -> Engine {
        G::ENGINE
    }

    /// Read-only view for the presentation layer
    pub fn state(&self) -> &WizardState<G::Input, G::Output> {
        &self.state
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    pub fn result(&self) -> Option<&G::Output> {
        self.state.result()
    }

    /// Replace one form field.
    ///
    /// Editing while Pending abandons the in-flight run and returns to Input
    /// seeded from its snapshot; the abandoned request id is returned so the
    /// caller can cancel its timer.
    pub fn update_field(&mut self, field: FieldOf<G>) -> Result<Option<RequestId>, SimulationError> {
        match &mut self.state {
            WizardState::Input { form, issue } => {
                form.apply(field);
                *issue = None;
                Ok(None)
            }
            WizardState::Pending {
                snapshot,
                request_id,
            } => {
                let abandoned = *request_id;
                let mut form = snapshot.clone();
                form.apply(field);
                debug!("{} wizard: edit abandons pending run {}", G::ENGINE, abandoned);
                self.state = WizardState::Input { form, issue: None };
                Ok(Some(abandoned))
            }
            WizardState::Result { .. } => Err(self.rejected("update_field")),
        }
    }

    /// Start a simulated computation for the current form.
    ///
    /// From Pending this supersedes the in-flight run with a fresh request
    /// id; the caller must replace the old timer with the new ticket.
    pub fn submit(&mut self) -> Result<PendingTicket, SimulationError> {
        let snapshot = match &self.state {
            WizardState::Input { form, .. } => form.clone(),
            WizardState::Pending {
                snapshot,
                request_id,
            } => {
                debug!("{} wizard: resubmit supersedes {}", G::ENGINE, request_id);
                snapshot.clone()
            }
            WizardState::Result { .. } => return Err(self.rejected("submit")),
        };

        self.last_request += 1;
        let request_id = RequestId(self.last_request);
        self.state = WizardState::Pending {
            snapshot,
            request_id,
        };
        debug!(
            "{} wizard: pending {} for {:?}",
            G::ENGINE,
            request_id,
            self.latency
        );

        Ok(PendingTicket {
            engine: G::ENGINE,
            request_id,
            latency: self.latency,
        })
    }

    /// Finish the Pending run identified by `request_id`
    pub fn resolve(&mut self, request_id: RequestId, currency: Currency) -> Resolution {
        let snapshot = match &self.state {
            WizardState::Pending {
                snapshot,
                request_id: current,
            } if *current == request_id => snapshot.clone(),
            _ => {
                debug!("{} wizard: ignoring stale run {}", G::ENGINE, request_id);
                return Resolution::Stale;
            }
        };

        match self.generator.generate(&snapshot, currency) {
            Ok(result) => {
                info!("{} wizard: run {} completed in {}", G::ENGINE, request_id, currency);
                self.state = WizardState::Result { snapshot, result };
                Resolution::Completed
            }
            Err(err) => {
                warn!("{} wizard: run {} rejected: {}", G::ENGINE, request_id, err);
                self.state = WizardState::Input {
                    form: snapshot,
                    issue: Some(InputIssue::from_error(&err)),
                };
                Resolution::Rejected(err)
            }
        }
    }

    /// Return to Input, keeping the last submitted values.
    ///
    /// Returns the abandoned request id when called while Pending.
    pub fn reset(&mut self) -> Option<RequestId> {
        let (form, abandoned) = match &self.state {
            WizardState::Input { .. } => return None,
            WizardState::Pending {
                snapshot,
                request_id,
            } => (snapshot.clone(), Some(*request_id)),
            WizardState::Result { snapshot, .. } => (snapshot.clone(), None),
        };

        debug!("{} wizard: reset to input", G::ENGINE);
        self.state = WizardState::Input { form, issue: None };
        abandoned
    }

    /// Drop any in-flight run without producing a result
    pub fn cancel_pending(&mut self) -> Option<RequestId> {
        if self.state.is_pending() {
            self.reset()
        } else {
            None
        }
    }

    /// Regenerate the displayed result in `currency`.
    ///
    /// Only a wizard in Result is affected; returns whether it regenerated.
    pub fn currency_changed(&mut self, currency: Currency) -> Result<bool, SimulationError> {
        let WizardState::Result { snapshot, result } = &mut self.state else {
            return Ok(false);
        };

        match self.generator.generate(snapshot, currency) {
            Ok(fresh) => {
                *result = fresh;
                debug!("{} wizard: result regenerated in {}", G::ENGINE, currency);
                Ok(true)
            }
            Err(err) => {
                let form = snapshot.clone();
                self.state = WizardState::Input {
                    form,
                    issue: Some(InputIssue::from_error(&err)),
                };
                Err(err)
            }
        }
    }

    fn rejected(&self, action: &'static str) -> SimulationError {
        SimulationError::InvalidTransition {
            action,
            state: self.state.name(),
        }
    }
}
