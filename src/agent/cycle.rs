//! The perceive -> decide -> act cycle.

use super::controller::Controller;
use super::environment::Environment;
use super::perception::Perception;
use crate::core::Action;
use std::sync::Arc;
use tracing::trace;

/// An agent coupling one environment with one controller.
///
/// The agent runs a single cycle per [`step`](Self::step) and never decides
/// when to stop; that is the driver's job (see
/// [`run_until`](super::driver::run_until)).
pub struct Agent<Env, Ctl> {
    environment: Env,
    controller: Ctl,
}

impl<Env, Ctl> Agent<Env, Ctl>
where
    Env: Environment,
    Ctl: Controller<Event = Env::Event, Command = Env::Command>,
{
    pub fn new(environment: Env, controller: Ctl) -> Self {
        Self {
            environment,
            controller,
        }
    }

    /// Run one cycle: perceive the current event, decide, act.
    ///
    /// Returns the action taken, if any. When the environment has no event
    /// to offer, the controller is not consulted and no command is issued.
    pub fn step(&mut self) -> Result<Option<Arc<Action<Env::Command>>>, Env::Error> {
        let Some(perception) = self.perceive()? else {
            trace!("nothing perceived this cycle");
            return Ok(None);
        };

        let action = self.controller.decide(&perception);
        if let Some(action) = &action {
            self.act(action)?;
        }
        Ok(action)
    }

    fn perceive(&mut self) -> Result<Option<Perception<Env::Event>>, Env::Error> {
        Ok(self.environment.observe()?.map(Perception::new))
    }

    fn act(&mut self, action: &Action<Env::Command>) -> Result<(), Env::Error> {
        self.environment.execute(action.command())
    }

    pub fn environment(&self) -> &Env {
        &self.environment
    }

    pub fn environment_mut(&mut self) -> &mut Env {
        &mut self.environment
    }

    pub fn controller(&self) -> &Ctl {
        &self.controller
    }
}
