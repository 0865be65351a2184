//! State-synchronization core for the stayhub client
//!
//! A single authoritative in-memory store reconciles user intent (navigate,
//! filter, authenticate, favorite, comment) with the remote listing API:
//!
//! - [`actions::Action`]: the closed catalog of state transitions
//! - [`reducer::reduce`]: the pure transition function
//! - [`tasks::TaskRunner`]: async tasks that call the API and dispatch
//!   actions over their lifetime
//! - [`selectors`]: narrow read-only projections over [`state::AppState`]
//! - [`store::Store`]: composes reducer, middleware and orchestrator into
//!   one process-wide shell with dispatch/subscribe semantics

pub mod actions;
pub mod cities;
pub mod dispatcher;
pub mod error;
pub mod middleware;
pub mod reducer;
pub mod routes;
pub mod selectors;
pub mod sort;
pub mod state;
pub mod store;
pub mod tasks;

pub use actions::Action;
pub use dispatcher::Dispatcher;
pub use error::ConfigError;
pub use routes::{Navigate, Route};
pub use sort::SortKind;
pub use state::{AppState, AuthorizationStatus, ErrorBanner};
pub use store::{Store, SubscriptionId};
pub use tasks::{Task, TaskOutcome, TaskRunner, ERROR_DISPLAY_TIMEOUT};
