//! Navigation middleware
//!
//! Bridges `RedirectToRoute` actions to the embedding shell's [`Navigate`]
//! capability. The action still passes through to the reducer, where it is
//! the identity case.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::routes::Navigate;
use crate::state::AppState;

pub struct NavigationMiddleware {
    navigator: Box<dyn Navigate>,
}

impl NavigationMiddleware {
    pub fn new(navigator: Box<dyn Navigate>) -> Self {
        Self { navigator }
    }
}

impl Middleware for NavigationMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        if let Action::RedirectToRoute(route) = action {
            log::info!("Redirecting to {}", route.as_path());
            self.navigator.redirect_to(route);
        }
        true
    }
}
