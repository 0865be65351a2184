//! Sort engine
//!
//! Maps a sort key to a deterministic reordering of an offers collection.
//! Sorting copies its input and uses stable comparisons, so elements that
//! compare equal keep their relative server order. An unknown key never
//! falls back silently - parsing fails with [`ConfigError::UnknownSortKey`].

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;
use stay_client::Offer;

/// Sort order for the offers list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKind {
    /// Server-provided order
    #[default]
    Popular,
    PriceLowToHigh,
    PriceHighToLow,
    TopRated,
}

impl SortKind {
    /// All sort keys in dropdown order
    pub fn all() -> [SortKind; 4] {
        [
            SortKind::Popular,
            SortKind::PriceLowToHigh,
            SortKind::PriceHighToLow,
            SortKind::TopRated,
        ]
    }

    /// Reorder a copy of the given offers
    pub fn apply(&self, offers: &[Offer]) -> Vec<Offer> {
        let mut sorted = offers.to_vec();
        match self {
            SortKind::Popular => {}
            SortKind::PriceLowToHigh => sorted.sort_by(|a, b| a.price.cmp(&b.price)),
            SortKind::PriceHighToLow => sorted.sort_by(|a, b| b.price.cmp(&a.price)),
            SortKind::TopRated => sorted.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        }
        sorted
    }
}

impl fmt::Display for SortKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SortKind::Popular => "Popular",
            SortKind::PriceLowToHigh => "Price: low to high",
            SortKind::PriceHighToLow => "Price: high to low",
            SortKind::TopRated => "Top rated first",
        };
        f.write_str(label)
    }
}

impl FromStr for SortKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Popular" => Ok(SortKind::Popular),
            "Price: low to high" => Ok(SortKind::PriceLowToHigh),
            "Price: high to low" => Ok(SortKind::PriceHighToLow),
            "Top rated first" => Ok(SortKind::TopRated),
            other => Err(ConfigError::UnknownSortKey(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stay_client::{City, Location};

    fn offer(id: &str, title: &str, price: u32, rating: f64) -> Offer {
        let location = Location {
            latitude: 0.0,
            longitude: 0.0,
            zoom: 13,
        };
        Offer {
            id: id.to_string(),
            title: title.to_string(),
            kind: "apartment".to_string(),
            price,
            city: City {
                name: "Paris".to_string(),
                location: location.clone(),
            },
            location,
            is_favorite: false,
            is_premium: false,
            rating,
            preview_image: String::new(),
        }
    }

    fn prices(offers: &[Offer]) -> Vec<u32> {
        offers.iter().map(|o| o.price).collect()
    }

    #[test]
    fn test_price_low_to_high() {
        let input = vec![offer("1", "a", 50, 3.0), offer("2", "b", 10, 4.0), offer("3", "c", 30, 5.0)];
        let sorted = SortKind::PriceLowToHigh.apply(&input);
        assert_eq!(prices(&sorted), vec![10, 30, 50]);
        // input untouched
        assert_eq!(prices(&input), vec![50, 10, 30]);
    }

    #[test]
    fn test_price_high_to_low() {
        let input = vec![offer("1", "a", 50, 3.0), offer("2", "b", 10, 4.0), offer("3", "c", 30, 5.0)];
        assert_eq!(prices(&SortKind::PriceHighToLow.apply(&input)), vec![50, 30, 10]);
    }

    #[test]
    fn test_top_rated_first() {
        let input = vec![offer("1", "a", 50, 3.1), offer("2", "b", 10, 4.9), offer("3", "c", 30, 4.2)];
        let sorted = SortKind::TopRated.apply(&input);
        let ids: Vec<&str> = sorted.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3", "1"]);
    }

    #[test]
    fn test_popular_keeps_server_order() {
        let input = vec![offer("1", "a", 50, 3.0), offer("2", "b", 10, 4.0)];
        assert_eq!(SortKind::Popular.apply(&input), input);
    }

    #[test]
    fn test_equal_prices_keep_relative_order() {
        let input = vec![
            offer("1", "first", 30, 3.0),
            offer("2", "second", 30, 4.0),
            offer("3", "third", 10, 5.0),
        ];
        let sorted = SortKind::PriceLowToHigh.apply(&input);
        let ids: Vec<&str> = sorted.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_resort_is_idempotent() {
        let input = vec![
            offer("1", "a", 30, 3.0),
            offer("2", "b", 30, 4.0),
            offer("3", "c", 10, 5.0),
            offer("4", "d", 90, 1.0),
        ];
        for kind in SortKind::all() {
            let once = kind.apply(&input);
            let twice = kind.apply(&once);
            assert_eq!(once, twice, "{kind} must be stable under re-sort");
        }
    }

    #[test]
    fn test_labels_round_trip() {
        for kind in SortKind::all() {
            assert_eq!(kind.to_string().parse::<SortKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_key_is_an_error() {
        let err = "Cheapest first".parse::<SortKind>().unwrap_err();
        assert_eq!(err, ConfigError::UnknownSortKey("Cheapest first".to_string()));
    }
}
