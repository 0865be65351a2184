//! Listing API data transfer objects
//!
//! These types mirror the JSON payloads of the remote API. They are value
//! objects: identity is the `id` field, equality derives structurally, and
//! the store replaces whole collections rather than patching entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Geographic point with the zoom level the map should use for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
}

/// A selectable city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub name: String,
    pub location: Location,
}

/// A rental listing as returned by the collection endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    /// Unique listing id - the only valid identity for comparisons
    pub id: String,

    pub title: String,

    /// Listing category ("apartment", "room", "house", "hotel")
    #[serde(rename = "type")]
    pub kind: String,

    /// Price per night
    pub price: u32,

    pub city: City,

    pub location: Location,

    pub is_favorite: bool,

    pub is_premium: bool,

    pub rating: f64,

    pub preview_image: String,
}

/// Full listing detail from the single-offer endpoint
///
/// Superset of [`Offer`] minus the preview image, which the detail page
/// replaces with the gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferDetail {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub price: u32,
    pub city: City,
    pub location: Location,
    pub is_favorite: bool,
    pub is_premium: bool,
    pub rating: f64,
    pub description: String,
    pub bedrooms: u8,
    pub goods: Vec<String>,
    pub host: Host,
    pub images: Vec<String>,
    pub max_adults: u8,
}

/// Listing host / comment author
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Host {
    pub name: String,
    pub avatar_url: String,
    pub is_pro: bool,
}

/// A review on a listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub date: DateTime<Utc>,
    pub user: Host,
    pub comment: String,
    pub rating: f64,
}

/// Body of a comment POST
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub comment: String,
    pub rating: u8,
}

/// Login credentials
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthData {
    pub email: String,
    pub password: String,
}

/// Authenticated user profile, returned by the login endpoints
///
/// The `token` is an opaque credential; it is persisted by the auth tasks
/// and never stored in application state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub name: String,
    pub avatar_url: String,
    pub is_pro: bool,
    pub email: String,
    pub token: String,
}
