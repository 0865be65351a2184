use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// LoggingMiddleware - logs all actions passing through
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        match action {
            // Collection payloads are large; log their sizes instead
            Action::LoadOffers(offers) => log::debug!("Action: LoadOffers({} offers)", offers.len()),
            Action::LoadFavoriteOffers(offers) => {
                log::debug!("Action: LoadFavoriteOffers({} offers)", offers.len())
            }
            Action::LoadNearestOffers(offers) => {
                log::debug!("Action: LoadNearestOffers({} offers)", offers.len())
            }
            Action::LoadComments(comments) => {
                log::debug!("Action: LoadComments({} comments)", comments.len())
            }
            other => log::debug!("Action: {:?}", other),
        }

        true // Always pass action through
    }
}
