//! Application routes and the navigation capability
//!
//! The core never manipulates browser history or a router itself; it only
//! asks the single [`Navigate`] capability to redirect. The embedding shell
//! supplies the implementation.

use crate::error::ConfigError;

/// Navigable route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Root,
    Login,
    Favorites,
    Offer(String),
    NotFound,
}

impl Route {
    pub fn as_path(&self) -> String {
        match self {
            Route::Root => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Favorites => "/favorites".to_string(),
            Route::Offer(id) => format!("/offer/{id}"),
            Route::NotFound => "*".to_string(),
        }
    }

    /// Resolve a path back to a route
    pub fn from_path(path: &str) -> Result<Route, ConfigError> {
        match path {
            "/" => Ok(Route::Root),
            "/login" => Ok(Route::Login),
            "/favorites" => Ok(Route::Favorites),
            "*" => Ok(Route::NotFound),
            other => match other.strip_prefix("/offer/") {
                Some(id) if !id.is_empty() => Ok(Route::Offer(id.to_string())),
                _ => Err(ConfigError::UnknownRoute(other.to_string())),
            },
        }
    }
}

/// Redirect capability, invoked by the navigation middleware
pub trait Navigate: Send {
    fn redirect_to(&mut self, route: &Route);
}
