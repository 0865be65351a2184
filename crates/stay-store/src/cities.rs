//! The selectable cities
//!
//! The service operates in a fixed set of six cities; the coordinates are
//! the map centers the UI zooms to.

use stay_client::{City, Location};

fn city(name: &str, latitude: f64, longitude: f64) -> City {
    City {
        name: name.to_string(),
        location: Location {
            latitude,
            longitude,
            zoom: 13,
        },
    }
}

pub fn paris() -> City {
    city("Paris", 48.85661, 2.351499)
}

pub fn cologne() -> City {
    city("Cologne", 50.938361, 6.959974)
}

pub fn brussels() -> City {
    city("Brussels", 50.846557, 4.351697)
}

pub fn amsterdam() -> City {
    city("Amsterdam", 52.37454, 4.897976)
}

pub fn hamburg() -> City {
    city("Hamburg", 53.550341, 10.000654)
}

pub fn dusseldorf() -> City {
    city("Dusseldorf", 51.225402, 6.776314)
}

/// All cities in display order
pub fn all() -> Vec<City> {
    vec![
        paris(),
        cologne(),
        brussels(),
        amsterdam(),
        hamburg(),
        dusseldorf(),
    ]
}

/// Look up a city by name
pub fn find(name: &str) -> Option<City> {
    all().into_iter().find(|c| c.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_cities_present() {
        let names: Vec<String> = all().into_iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec!["Paris", "Cologne", "Brussels", "Amsterdam", "Hamburg", "Dusseldorf"]
        );
    }

    #[test]
    fn test_find_known_city() {
        let city = find("Amsterdam").unwrap();
        assert_eq!(city.location.zoom, 13);
    }

    #[test]
    fn test_find_unknown_city() {
        assert!(find("Atlantis").is_none());
    }
}
