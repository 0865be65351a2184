//! Action catalog
//!
//! The closed set of state-transition messages. Actions are immutable data
//! with no behavior; they are created by callers or by running tasks and
//! consumed exactly once by the reducer. The catalog is a single enum so the
//! reducer's match stays exhaustive - adding a variant without handling it
//! is a compile error.

use crate::routes::Route;
use crate::sort::SortKind;
use crate::state::{AuthorizationStatus, ErrorBanner};
use stay_client::{City, Comment, Offer, OfferDetail, UserData};

/// A requested state transition
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Select a city on the main screen
    ChangeCity(City),
    /// Select a sort order; re-sorts the current offers atomically
    ChangeSort(SortKind),
    /// Open the sort dropdown
    OpenSorts,
    /// Close the sort dropdown
    CloseSorts,
    /// Reset the sort order to the server-provided one
    ResetSort,

    /// Replace the offers collection with a fetched one
    LoadOffers(Vec<Offer>),
    /// Replace the favorites collection
    LoadFavoriteOffers(Vec<Offer>),
    /// Replace the single-offer detail
    LoadCurrentOffer(OfferDetail),
    /// Replace the nearby-offers collection
    LoadNearestOffers(Vec<Offer>),
    /// Replace the comments collection
    LoadComments(Vec<Comment>),
    /// Result of posting a comment; `None` means no comment was added
    CommentPosted(Option<Comment>),

    /// Store the authenticated user's profile
    LoadUserData(UserData),
    /// Move the auth state machine
    RequireAuthorization(AuthorizationStatus),

    /// Toggle the offers-loading flag
    SetOffersDataLoadingStatus(bool),

    /// Show an error banner
    SetError(ErrorBanner),
    /// Clear the banner, but only if it is still the one that scheduled
    /// this clear - a newer banner survives a stale timer
    ClearError { error_id: u64 },

    /// Navigate; handled by the navigation middleware, identity for the
    /// reducer
    RedirectToRoute(Route),
}
