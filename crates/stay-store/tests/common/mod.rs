//! Shared test doubles and fixtures

use std::sync::Mutex;
use stay_client::{
    ApiError, AuthData, City, Comment, Host, Location, NewComment, Offer, OfferDetail, StayClient,
    UserData,
};
use stay_config::TokenStorage;

/// Scriptable API client: each endpoint replays whatever the test put in
pub struct FakeClient {
    pub offers: Mutex<Result<Vec<Offer>, ApiError>>,
    pub offer: Mutex<Result<OfferDetail, ApiError>>,
    pub nearby: Mutex<Result<Vec<Offer>, ApiError>>,
    pub favorites: Mutex<Result<Vec<Offer>, ApiError>>,
    pub comments: Mutex<Result<Vec<Comment>, ApiError>>,
    pub posted: Mutex<Result<Comment, ApiError>>,
    pub session: Mutex<Result<UserData, ApiError>>,
    pub login: Mutex<Result<UserData, ApiError>>,
    pub logout: Mutex<Result<(), ApiError>>,
    /// Records `(offer_id, requested_status)` per set_favorite_status call
    pub favorite_calls: Mutex<Vec<(String, bool)>>,
}

impl Default for FakeClient {
    fn default() -> Self {
        Self {
            offers: Mutex::new(Ok(Vec::new())),
            offer: Mutex::new(Err(not_found())),
            nearby: Mutex::new(Ok(Vec::new())),
            favorites: Mutex::new(Ok(Vec::new())),
            comments: Mutex::new(Ok(Vec::new())),
            posted: Mutex::new(Err(unauthorized())),
            session: Mutex::new(Err(unauthorized())),
            login: Mutex::new(Err(unauthorized())),
            logout: Mutex::new(Ok(())),
            favorite_calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl StayClient for FakeClient {
    async fn fetch_offers(&self) -> Result<Vec<Offer>, ApiError> {
        self.offers.lock().unwrap().clone()
    }

    async fn fetch_offer(&self, _id: &str) -> Result<OfferDetail, ApiError> {
        self.offer.lock().unwrap().clone()
    }

    async fn fetch_nearby_offers(&self, _id: &str) -> Result<Vec<Offer>, ApiError> {
        self.nearby.lock().unwrap().clone()
    }

    async fn fetch_favorite_offers(&self) -> Result<Vec<Offer>, ApiError> {
        self.favorites.lock().unwrap().clone()
    }

    async fn set_favorite_status(&self, id: &str, status: bool) -> Result<(), ApiError> {
        self.favorite_calls
            .lock()
            .unwrap()
            .push((id.to_string(), status));
        Ok(())
    }

    async fn fetch_comments(&self, _id: &str) -> Result<Vec<Comment>, ApiError> {
        self.comments.lock().unwrap().clone()
    }

    async fn post_comment(&self, _id: &str, _comment: &NewComment) -> Result<Comment, ApiError> {
        self.posted.lock().unwrap().clone()
    }

    async fn fetch_login(&self) -> Result<UserData, ApiError> {
        self.session.lock().unwrap().clone()
    }

    async fn login(&self, _auth: &AuthData) -> Result<UserData, ApiError> {
        self.login.lock().unwrap().clone()
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.logout.lock().unwrap().clone()
    }
}

pub fn unauthorized() -> ApiError {
    ApiError::Status {
        status: 401,
        message: "authorization required".into(),
    }
}

pub fn not_found() -> ApiError {
    ApiError::Status {
        status: 404,
        message: "offer not found".into(),
    }
}

pub fn offer(id: &str, price: u32) -> Offer {
    let location = Location {
        latitude: 48.85661,
        longitude: 2.351499,
        zoom: 13,
    };
    Offer {
        id: id.to_string(),
        title: format!("Listing {id}"),
        kind: "apartment".to_string(),
        price,
        city: City {
            name: "Paris".to_string(),
            location: location.clone(),
        },
        location,
        is_favorite: false,
        is_premium: false,
        rating: 4.0,
        preview_image: String::new(),
    }
}

pub fn user(token: &str) -> UserData {
    UserData {
        name: "Oliver Conner".to_string(),
        avatar_url: "https://url/avatar.jpg".to_string(),
        is_pro: false,
        email: "oliver@example.com".to_string(),
        token: token.to_string(),
    }
}

pub fn comment(id: &str, text: &str) -> Comment {
    Comment {
        id: id.to_string(),
        date: chrono::Utc::now(),
        user: Host {
            name: "Oliver Conner".to_string(),
            avatar_url: "https://url/avatar.jpg".to_string(),
            is_pro: false,
        },
        comment: text.to_string(),
        rating: 4.0,
    }
}

/// Token storage under a per-test temp file so parallel tests never collide
pub fn temp_tokens(test: &str) -> TokenStorage {
    TokenStorage::with_path(
        std::env::temp_dir().join(format!("stayhub-test-{}-{}", test, std::process::id())),
    )
}
