//! Dispatcher for middleware and task action dispatch
//!
//! Running tasks and middleware hold a `Dispatcher` clone and use it to
//! send actions back into the store's queue. Each dispatched action is
//! folded atomically by the store; interleaving between concurrent tasks
//! happens only at the granularity of whole dispatches.

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Sends actions into the store's fold queue
#[derive(Debug, Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Queue an action to be folded by the store
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to send action: {}", e);
        }
    }
}
