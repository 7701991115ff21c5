//! Which wizard is currently visible
//!
//! Purely a rendering switch: changing mode never touches wizard state, so
//! a wizard keeps its form, Pending run or Result while hidden.

use log::debug;

use crate::projection::Engine;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeSelector {
    active: Engine,
}

impl ModeSelector {
    pub fn new(initial: Engine) -> Self {
        Self { active: initial }
    }

    pub fn active(&self) -> Engine {
        self.active
    }

    pub fn is_visible(&self, engine: Engine) -> bool {
        self.active == engine
    }

    pub fn select(&mut self, engine: Engine) {
        if self.active != engine {
            debug!("Mode switched to {}", engine);
            self.active = engine;
        }
    }

    /// Flip to the other engine and return it
    pub fn toggle(&mut self) -> Engine {
        let next = match self.active {
            Engine::Career => Engine::Wealth,
            Engine::Wealth => Engine::Career,
        };
        self.select(next);
        next
    }
}

impl Default for ModeSelector {
    fn default() -> Self {
        Self::new(Engine::Career)
    }
}
