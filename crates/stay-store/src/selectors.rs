//! Selectors - pure projections from the state snapshot
//!
//! Each selector reads the narrowest slice a consumer needs so the caller
//! can re-render only when that slice changes. Safe to call at any
//! frequency; none of them allocate.

use crate::sort::SortKind;
use crate::state::{AppState, AuthorizationStatus};
use stay_client::{City, Comment, Offer, OfferDetail, UserData};

pub fn current_city(state: &AppState) -> &City {
    &state.city
}

pub fn offers(state: &AppState) -> &[Offer] {
    &state.offers
}

pub fn current_sort(state: &AppState) -> SortKind {
    state.sort
}

pub fn is_filters_open(state: &AppState) -> bool {
    state.is_filters_open
}

pub fn authorization_status(state: &AppState) -> AuthorizationStatus {
    state.authorization_status
}

/// Whether auth-gated UI may be rendered at all
pub fn is_authorization_known(state: &AppState) -> bool {
    state.authorization_status != AuthorizationStatus::Unknown
}

pub fn is_offers_data_loading(state: &AppState) -> bool {
    state.is_offers_data_loading
}

pub fn error_message(state: &AppState) -> Option<&str> {
    state.error.as_ref().map(|banner| banner.message.as_str())
}

pub fn favorite_offers(state: &AppState) -> &[Offer] {
    &state.favorite_offers
}

pub fn current_offer(state: &AppState) -> Option<&OfferDetail> {
    state.current_offer.as_ref()
}

pub fn nearest_offers(state: &AppState) -> &[Offer] {
    &state.nearest_offers
}

pub fn comments(state: &AppState) -> &[Comment] {
    &state.comments
}

pub fn new_comment(state: &AppState) -> Option<&Comment> {
    state.new_comment.as_ref()
}

pub fn user_data(state: &AppState) -> Option<&UserData> {
    state.user_data.as_ref()
}

/// Offers of the currently selected city, in the current sort order
pub fn city_offers<'a>(state: &'a AppState) -> impl Iterator<Item = &'a Offer> {
    state
        .offers
        .iter()
        .filter(move |offer| offer.city.name == state.city.name)
}

/// Find an offer by its unique id
///
/// Identity is the id; two offers may legitimately share a title.
pub fn offer_by_id<'a>(offers: &'a [Offer], id: &str) -> Option<&'a Offer> {
    offers.iter().find(|offer| offer.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cities;
    use crate::state::ErrorBanner;
    use stay_client::Location;

    fn offer(id: &str, title: &str, city: City) -> Offer {
        Offer {
            id: id.to_string(),
            title: title.to_string(),
            kind: "apartment".to_string(),
            price: 100,
            city,
            location: Location {
                latitude: 0.0,
                longitude: 0.0,
                zoom: 13,
            },
            is_favorite: false,
            is_premium: false,
            rating: 4.0,
            preview_image: String::new(),
        }
    }

    #[test]
    fn test_error_message_projection() {
        let mut state = AppState::default();
        assert_eq!(error_message(&state), None);
        state.error = Some(ErrorBanner::new(1, "boom"));
        assert_eq!(error_message(&state), Some("boom"));
    }

    #[test]
    fn test_city_offers_filters_by_selected_city() {
        let mut state = AppState::default();
        state.city = cities::amsterdam();
        state.offers = vec![
            offer("1", "a", cities::paris()),
            offer("2", "b", cities::amsterdam()),
            offer("3", "c", cities::amsterdam()),
        ];
        let ids: Vec<&str> = city_offers(&state).map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3"]);
    }

    #[test]
    fn test_offer_by_id_distinguishes_shared_titles() {
        let offers = vec![
            offer("1", "Cozy studio", cities::paris()),
            offer("2", "Cozy studio", cities::paris()),
        ];
        // Identity must be the id, never the title
        assert_eq!(offer_by_id(&offers, "2").unwrap().id, "2");
        assert_eq!(offer_by_id(&offers, "1").unwrap().id, "1");
        assert!(offer_by_id(&offers, "3").is_none());
    }

    #[test]
    fn test_is_authorization_known() {
        let mut state = AppState::default();
        assert!(!is_authorization_known(&state));
        state.authorization_status = AuthorizationStatus::NoAuth;
        assert!(is_authorization_known(&state));
    }
}
