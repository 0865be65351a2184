//! reqwest-backed implementation of [`StayClient`]
//!
//! Attaches the persisted session token as the `X-Token` header on every
//! request, mirroring the interceptor the web client used. The token is read
//! from [`TokenStorage`] at request time so a login in one task is visible
//! to the next request without rebuilding the client.

use crate::client::StayClient;
use crate::error::ApiError;
use crate::routes;
use crate::types::{AuthData, Comment, NewComment, Offer, OfferDetail, UserData};
use crate::{DEFAULT_BASE_URL, TOKEN_HEADER};
use async_trait::async_trait;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use stay_config::TokenStorage;

/// HTTP client for the listing API
pub struct HttpStayClient {
    http: reqwest::Client,
    base_url: String,
    tokens: TokenStorage,
}

impl HttpStayClient {
    /// Create a client against the default public API
    pub fn new(tokens: TokenStorage) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, tokens)
    }

    /// Create a client against a custom base URL (staging, tests)
    pub fn with_base_url(base_url: impl Into<String>, tokens: TokenStorage) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            tokens,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the session token if one is persisted
    fn with_token(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.tokens.read() {
            Some(token) => builder.header(TOKEN_HEADER, token),
            None => builder,
        }
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let response = self.with_token(builder).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            log::warn!("api call failed with {}: {}", status, message);
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json::<T>().await?)
    }

    /// Like `send`, for endpoints whose body the caller discards
    async fn send_unit(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        let response = self.with_token(builder).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            log::warn!("api call failed with {}: {}", status, message);
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl StayClient for HttpStayClient {
    async fn fetch_offers(&self) -> Result<Vec<Offer>, ApiError> {
        self.send(self.http.get(self.url(routes::OFFERS))).await
    }

    async fn fetch_offer(&self, id: &str) -> Result<OfferDetail, ApiError> {
        self.send(self.http.get(self.url(&routes::offer(id)))).await
    }

    async fn fetch_nearby_offers(&self, id: &str) -> Result<Vec<Offer>, ApiError> {
        self.send(self.http.get(self.url(&routes::nearby(id)))).await
    }

    async fn fetch_favorite_offers(&self) -> Result<Vec<Offer>, ApiError> {
        self.send(self.http.get(self.url(routes::FAVORITE))).await
    }

    async fn set_favorite_status(&self, id: &str, is_favorite: bool) -> Result<(), ApiError> {
        let path = routes::favorite_status(id, is_favorite);
        self.send_unit(self.http.post(self.url(&path))).await
    }

    async fn fetch_comments(&self, id: &str) -> Result<Vec<Comment>, ApiError> {
        self.send(self.http.get(self.url(&routes::comments(id)))).await
    }

    async fn post_comment(&self, id: &str, comment: &NewComment) -> Result<Comment, ApiError> {
        self.send(self.http.post(self.url(&routes::comments(id))).json(comment))
            .await
    }

    async fn fetch_login(&self) -> Result<UserData, ApiError> {
        self.send(self.http.get(self.url(routes::LOGIN))).await
    }

    async fn login(&self, auth: &AuthData) -> Result<UserData, ApiError> {
        self.send(self.http.post(self.url(routes::LOGIN)).json(auth))
            .await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.send_unit(self.http.delete(self.url(routes::LOGOUT))).await
    }
}
