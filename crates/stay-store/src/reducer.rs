//! Reducer - pure function that produces new state from current state + action
//!
//! The single authoritative transition rule set. No I/O, no clock, no
//! panics for well-typed actions. Each action updates exactly one field,
//! except `ChangeSort` which sets the sort key and re-sorts the offers in
//! the same fold.

use crate::actions::Action;
use crate::sort::SortKind;
use crate::state::AppState;

pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::ChangeCity(city) => {
            state.city = city.clone();
        }
        Action::ChangeSort(kind) => {
            state.sort = *kind;
            state.offers = kind.apply(&state.offers);
        }
        Action::OpenSorts => {
            state.is_filters_open = true;
        }
        Action::CloseSorts => {
            state.is_filters_open = false;
        }
        Action::ResetSort => {
            state.sort = SortKind::Popular;
        }
        Action::LoadOffers(offers) => {
            state.offers = offers.clone();
        }
        Action::LoadFavoriteOffers(offers) => {
            state.favorite_offers = offers.clone();
        }
        Action::LoadCurrentOffer(offer) => {
            state.current_offer = Some(offer.clone());
        }
        Action::LoadNearestOffers(offers) => {
            state.nearest_offers = offers.clone();
        }
        Action::LoadComments(comments) => {
            state.comments = comments.clone();
        }
        Action::CommentPosted(comment) => {
            state.new_comment = comment.clone();
        }
        Action::LoadUserData(user) => {
            state.user_data = Some(user.clone());
        }
        Action::RequireAuthorization(status) => {
            state.authorization_status = *status;
        }
        Action::SetOffersDataLoadingStatus(is_loading) => {
            state.is_offers_data_loading = *is_loading;
        }
        Action::SetError(banner) => {
            state.error = Some(banner.clone());
        }
        Action::ClearError { error_id } => {
            // A stale timer must not erase a banner that replaced its own
            if state.error.as_ref().map(|b| b.id) == Some(*error_id) {
                state.error = None;
            }
        }
        Action::RedirectToRoute(_) => {
            // Navigation is a middleware effect; the snapshot is unchanged
        }
    }
    state
}
