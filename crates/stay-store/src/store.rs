//! Store - holds state, runs the middleware chain, folds actions
//!
//! Single-owner design: the store owns the canonical [`AppState`] and the
//! receiving end of the action queue. Anything concurrent (tasks,
//! middleware follow-ups) dispatches into the queue and the store folds
//! the backlog after each direct dispatch, so every action is applied
//! atomically and subscribers see one notification per applied action.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducer::reduce;
use crate::state::AppState;
use crate::tasks::{Task, TaskOutcome, TaskRunner};
use std::collections::BTreeMap;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;
use stay_client::StayClient;
use stay_config::TokenStorage;
use tokio::task::JoinHandle;

/// Handle for removing a subscriber again
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&AppState) + Send>;

pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
    tasks: TaskRunner,
    dispatcher: Dispatcher,
    action_rx: Receiver<Action>,
    subscribers: BTreeMap<SubscriptionId, Subscriber>,
    next_subscriber: u64,
}

impl Store {
    /// Build a store around an API client and token storage
    ///
    /// Must be called from within a tokio runtime; spawned tasks attach to
    /// the ambient runtime handle.
    pub fn new(api: Arc<dyn StayClient>, tokens: TokenStorage) -> Self {
        let (action_tx, action_rx) = channel();
        let dispatcher = Dispatcher::new(action_tx);
        let tasks = TaskRunner::new(api, tokens, dispatcher.clone());

        Self {
            state: AppState::default(),
            middleware: Vec::new(),
            tasks,
            dispatcher,
            action_rx,
            subscribers: BTreeMap::new(),
            next_subscriber: 0,
        }
    }

    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Current state snapshot
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// A dispatcher clone for feeding actions in from elsewhere
    pub fn dispatcher(&self) -> Dispatcher {
        self.dispatcher.clone()
    }

    /// Register a subscriber, called once per applied action
    pub fn subscribe(&mut self, subscriber: Subscriber) -> SubscriptionId {
        self.next_subscriber += 1;
        let id = SubscriptionId(self.next_subscriber);
        self.subscribers.insert(id, subscriber);
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.remove(&id);
    }

    /// Run the middleware chain, fold the action, then drain the queue
    pub fn dispatch(&mut self, action: Action) {
        self.apply(action);
        self.pump();
    }

    /// Start an asynchronous task; its actions arrive via the queue
    pub fn run(&self, task: Task) -> JoinHandle<TaskOutcome> {
        self.tasks.run(task)
    }

    /// Fold every queued action dispatched by tasks or middleware
    ///
    /// The embedding shell calls this from its event loop to pick up
    /// actions that arrived while no direct dispatch was in flight.
    pub fn pump(&mut self) {
        loop {
            match self.action_rx.try_recv() {
                Ok(action) => self.apply(action),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    // Cannot happen while we hold a dispatcher clone
                    log::error!("Store: action queue disconnected");
                    break;
                }
            }
        }
    }

    fn apply(&mut self, action: Action) {
        for middleware in self.middleware.iter_mut() {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                log::debug!("Action consumed by middleware: {:?}", action);
                return;
            }
        }

        let previous = std::mem::take(&mut self.state);
        self.state = reduce(previous, &action);

        for subscriber in self.subscribers.values_mut() {
            subscriber(&self.state);
        }
    }
}
