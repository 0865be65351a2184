//! Application state
//!
//! One snapshot of everything the UI derives from. Owned exclusively by the
//! store; mutated only by folding actions through the reducer, which
//! replaces the snapshot rather than patching it in place.

use crate::cities;
use crate::sort::SortKind;
use stay_client::{City, Comment, Offer, OfferDetail, UserData};

/// Authentication state machine
///
/// Starts at `Unknown` and moves exactly once, to `Auth` or `NoAuth`, when
/// the session check (or a login/logout) resolves. Consumers must treat
/// `Unknown` as "do not render auth-gated UI yet".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthorizationStatus {
    #[default]
    Unknown,
    Auth,
    NoAuth,
}

/// The error banner with the identity that keys its auto-clear
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBanner {
    /// Monotonically increasing instance id, allocated by the orchestrator
    pub id: u64,
    pub message: String,
}

impl ErrorBanner {
    pub fn new(id: u64, message: impl Into<String>) -> Self {
        Self {
            id,
            message: message.into(),
        }
    }
}

/// The single process-wide state snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// Currently selected city
    pub city: City,
    /// Offers of the current fetch, in the currently selected order
    pub offers: Vec<Offer>,
    pub sort: SortKind,
    /// Whether the sort dropdown is open
    pub is_filters_open: bool,
    pub authorization_status: AuthorizationStatus,
    /// True strictly between the start and completion of an offers fetch,
    /// including completions on the failure path
    pub is_offers_data_loading: bool,
    pub error: Option<ErrorBanner>,
    pub favorite_offers: Vec<Offer>,
    pub current_offer: Option<OfferDetail>,
    pub nearest_offers: Vec<Offer>,
    pub comments: Vec<Comment>,
    /// The most recently created comment; `None` after a rejected post
    pub new_comment: Option<Comment>,
    pub user_data: Option<UserData>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            city: cities::paris(),
            offers: Vec::new(),
            sort: SortKind::Popular,
            is_filters_open: false,
            authorization_status: AuthorizationStatus::Unknown,
            is_offers_data_loading: false,
            error: None,
            favorite_offers: Vec::new(),
            current_offer: None,
            nearest_offers: Vec::new(),
            comments: Vec::new(),
            new_comment: None,
            user_data: None,
        }
    }
}
