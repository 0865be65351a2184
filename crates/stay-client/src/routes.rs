//! REST endpoint paths
//!
//! Central place for every path the client touches, so the trait
//! implementation never builds URLs inline.

/// Offers collection
pub const OFFERS: &str = "/offers";

/// Favorites collection
pub const FAVORITE: &str = "/favorite";

/// Session check (GET) and login (POST)
pub const LOGIN: &str = "/login";

/// Logout (DELETE)
pub const LOGOUT: &str = "/logout";

/// Single offer detail
pub fn offer(id: &str) -> String {
    format!("{OFFERS}/{id}")
}

/// Offers near a given offer
pub fn nearby(id: &str) -> String {
    format!("{OFFERS}/{id}/nearby")
}

/// Comments of an offer (GET and POST)
pub fn comments(id: &str) -> String {
    format!("/comments/{id}")
}

/// Favorite status toggle; the server expects 1 to set, 0 to clear
pub fn favorite_status(id: &str, is_favorite: bool) -> String {
    format!("{FAVORITE}/{id}/{}", if is_favorite { 1 } else { 0 })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offer_paths() {
        assert_eq!(offer("abc"), "/offers/abc");
        assert_eq!(nearby("abc"), "/offers/abc/nearby");
        assert_eq!(comments("abc"), "/comments/abc");
    }

    #[test]
    fn test_favorite_status_encodes_flag_as_digit() {
        assert_eq!(favorite_status("abc", true), "/favorite/abc/1");
        assert_eq!(favorite_status("abc", false), "/favorite/abc/0");
    }
}
