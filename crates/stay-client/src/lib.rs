//! Typed client for the rental-listing API
//!
//! This crate provides a trait-based client for the remote listing service.
//! The core application depends only on the `StayClient` trait; the reqwest
//! implementation lives behind it so tests can substitute a fake.
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │               StayClient trait                  │
//! │  - fetch_offers() / fetch_offer(id)             │
//! │  - fetch_comments(id) / post_comment(..)        │
//! │  - fetch_login() / login(..) / logout()         │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!             ┌─────────────────────┐
//!             │   HttpStayClient    │
//!             │   (reqwest, JSON)   │
//!             └─────────────────────┘
//! ```

pub mod client;
pub mod error;
pub mod http;
pub mod routes;
pub mod types;

/// Default base URL of the public listing API
pub const DEFAULT_BASE_URL: &str = "https://14.design.htmlacademy.pro/six-cities";

/// Header carrying the session token, read by the server on every request
pub const TOKEN_HEADER: &str = "X-Token";

pub use client::StayClient;
pub use error::ApiError;
pub use http::HttpStayClient;
pub use types::{
    AuthData, City, Comment, Host, Location, NewComment, Offer, OfferDetail, UserData,
};
