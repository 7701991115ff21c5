//! Simulation wizard state machine and its Pending-state timers

mod state;
mod machine;
mod scheduler;

pub use state::{InputIssue, PendingTicket, RequestId, Resolution, WizardState};
pub use machine::Wizard;
pub use scheduler::{PendingScheduler, TimerFired};
