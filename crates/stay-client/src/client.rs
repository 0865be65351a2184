//! Listing API client trait
//!
//! Defines the interface the store's task orchestrator talks to. The trait
//! is the seam for testing: scenario tests substitute a fake implementation
//! and replay canned responses.

use crate::error::ApiError;
use crate::types::{AuthData, Comment, NewComment, Offer, OfferDetail, UserData};
use async_trait::async_trait;

/// Listing API client
///
/// All operations are typed end to end: the caller never sees raw JSON, and
/// every failure is an [`ApiError`].
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; the orchestrator shares one client
/// across all spawned tasks behind an `Arc`.
#[async_trait]
pub trait StayClient: Send + Sync {
    /// Fetch the full offers collection
    async fn fetch_offers(&self) -> Result<Vec<Offer>, ApiError>;

    /// Fetch a single offer with full detail
    async fn fetch_offer(&self, id: &str) -> Result<OfferDetail, ApiError>;

    /// Fetch offers near the given offer
    async fn fetch_nearby_offers(&self, id: &str) -> Result<Vec<Offer>, ApiError>;

    /// Fetch the authenticated user's favorite offers
    async fn fetch_favorite_offers(&self) -> Result<Vec<Offer>, ApiError>;

    /// Set or clear the favorite flag on an offer
    ///
    /// The server echoes the updated offer; the toggle is fire-and-forget
    /// for the store, so the body is discarded.
    async fn set_favorite_status(&self, id: &str, is_favorite: bool) -> Result<(), ApiError>;

    /// Fetch the comments of an offer
    async fn fetch_comments(&self, id: &str) -> Result<Vec<Comment>, ApiError>;

    /// Post a new comment on an offer, returning the created comment
    async fn post_comment(&self, id: &str, comment: &NewComment) -> Result<Comment, ApiError>;

    /// Probe the current session
    ///
    /// Succeeds with the user profile when the persisted token is still
    /// valid; a 401 here is the expected path for an anonymous visitor.
    async fn fetch_login(&self) -> Result<UserData, ApiError>;

    /// Log in with credentials, returning the profile including a fresh token
    async fn login(&self, auth: &AuthData) -> Result<UserData, ApiError>;

    /// Invalidate the current session on the server
    async fn logout(&self) -> Result<(), ApiError>;
}
