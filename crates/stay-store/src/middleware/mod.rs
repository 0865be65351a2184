use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod logging;
pub mod navigation;

pub use logging::LoggingMiddleware;
pub use navigation::NavigationMiddleware;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware performs side effects the reducer must stay free of
/// (logging, navigation). It never mutates state directly.
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current state snapshot (read-only)
    /// - `dispatcher`: Use to dispatch follow-up actions into the store
    ///
    /// Returns `true` to continue the chain, `false` to consume the action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
