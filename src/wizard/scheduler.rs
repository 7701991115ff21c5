//! Cancellable timers for wizards in the Pending state
//!
//! Each scheduled ticket becomes a tokio task that sleeps for the ticket's
//! latency and then posts a [`TimerFired`] on a channel owned by the
//! scheduler. At most one timer per engine is outstanding: scheduling a new
//! ticket aborts the previous task first. Firings that still arrive for an
//! aborted timer are filtered out by request id before they reach a wizard.

use log::debug;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::state::{PendingTicket, RequestId};
use crate::projection::Engine;

/// Notification that a Pending latency has elapsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerFired {
    pub engine: Engine,
    pub request_id: RequestId,
}

#[derive(Debug)]
struct PendingTimer {
    request_id: RequestId,
    handle: JoinHandle<()>,
}

/// Owns the outstanding Pending timers of every wizard
#[derive(Debug)]
pub struct PendingScheduler {
    tx: mpsc::UnboundedSender<TimerFired>,
    rx: mpsc::UnboundedReceiver<TimerFired>,
    timers: HashMap<Engine, PendingTimer>,
}

impl PendingScheduler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            tx,
            rx,
            timers: HashMap::new(),
        }
    }

    /// Start the timer for `ticket`, cancelling the engine's previous one.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&mut self, ticket: PendingTicket) {
        self.cancel(ticket.engine);

        let tx = self.tx.clone();
        let fired = TimerFired {
            engine: ticket.engine,
            request_id: ticket.request_id,
        };
        let handle = tokio::spawn(async move {
            tokio::time::sleep(ticket.latency).await;
            // The receiver lives as long as the scheduler; a send error only
            // means the scheduler is gone and nobody wants the result.
            let _ = tx.send(fired);
        });

        debug!(
            "Scheduled {} timer {} ({:?})",
            ticket.engine, ticket.request_id, ticket.latency
        );
        self.timers.insert(
            ticket.engine,
            PendingTimer {
                request_id: ticket.request_id,
                handle,
            },
        );
    }

    /// Abort the engine's outstanding timer, if any
    pub fn cancel(&mut self, engine: Engine) -> Option<RequestId> {
        let timer = self.timers.remove(&engine)?;
        timer.handle.abort();
        debug!("Cancelled {} timer {}", engine, timer.request_id);
        Some(timer.request_id)
    }

    pub fn cancel_all(&mut self) {
        for (_, timer) in self.timers.drain() {
            timer.handle.abort();
        }
    }

    /// Request id of the engine's outstanding timer
    pub fn scheduled(&self, engine: Engine) -> Option<RequestId> {
        self.timers.get(&engine).map(|t| t.request_id)
    }

    pub fn outstanding(&self) -> usize {
        self.timers.len()
    }

    /// Wait for the next live timer to fire.
    ///
    /// Returns `None` straight away when no timer is outstanding. Cancel
    /// safe: dropping the future loses no firing.
    pub async fn next_fired(&mut self) -> Option<TimerFired> {
        loop {
            if self.timers.is_empty() {
                return None;
            }

            let fired = self.rx.recv().await?;
            match self.timers.get(&fired.engine) {
                Some(timer) if timer.request_id == fired.request_id => {
                    self.timers.remove(&fired.engine);
                    return Some(fired);
                }
                _ => debug!(
                    "Dropping stale {} timer {}",
                    fired.engine, fired.request_id
                ),
            }
        }
    }
}

impl Default for PendingScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for PendingScheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::{timeout, Instant};

    fn ticket(engine: Engine, id: u64, millis: u64) -> PendingTicket {
        PendingTicket {
            engine,
            request_id: RequestId(id),
            latency: Duration::from_millis(millis),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_latency() {
        let mut scheduler = PendingScheduler::new();
        let start = Instant::now();
        scheduler.schedule(ticket(Engine::Career, 1, 2200));

        let fired = scheduler.next_fired().await.unwrap();
        assert_eq!(fired.request_id, RequestId(1));
        assert!(start.elapsed() >= Duration::from_millis(2200));
        assert_eq!(scheduler.outstanding(), 0);
        assert!(scheduler.next_fired().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_does_not_fire_early() {
        let mut scheduler = PendingScheduler::new();
        scheduler.schedule(ticket(Engine::Wealth, 1, 2500));

        let early = timeout(Duration::from_millis(2400), scheduler.next_fired()).await;
        assert!(early.is_err());

        let fired = scheduler.next_fired().await.unwrap();
        assert_eq!(fired.engine, Engine::Wealth);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_replaces_previous_timer() {
        let mut scheduler = PendingScheduler::new();
        scheduler.schedule(ticket(Engine::Career, 1, 2200));
        scheduler.schedule(ticket(Engine::Career, 2, 2200));
        assert_eq!(scheduler.outstanding(), 1);
        assert_eq!(scheduler.scheduled(Engine::Career), Some(RequestId(2)));

        let fired = scheduler.next_fired().await.unwrap();
        assert_eq!(fired.request_id, RequestId(2));
        assert!(scheduler.next_fired().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel() {
        let mut scheduler = PendingScheduler::new();
        scheduler.schedule(ticket(Engine::Career, 4, 100));
        assert_eq!(scheduler.cancel(Engine::Career), Some(RequestId(4)));
        assert_eq!(scheduler.cancel(Engine::Career), None);

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(scheduler.next_fired().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_engines_are_independent() {
        let mut scheduler = PendingScheduler::new();
        scheduler.schedule(ticket(Engine::Wealth, 1, 2500));
        scheduler.schedule(ticket(Engine::Career, 1, 2200));

        let first = scheduler.next_fired().await.unwrap();
        let second = scheduler.next_fired().await.unwrap();
        assert_eq!(first.engine, Engine::Career);
        assert_eq!(second.engine, Engine::Wealth);
    }
}
