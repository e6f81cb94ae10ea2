/// Coordinates and timezone for a city the planner can answer for
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct City {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: &'static str,
}

const TIMEZONE: &str = "Africa/Lagos";

/// The fixed city registry. Lookups are exact matches on `name`.
pub const CITIES: &[City] = &[
    City {
        name: "Enugu",
        latitude: 6.4483,
        longitude: 7.5139,
        timezone: TIMEZONE,
    },
    City {
        name: "Lagos",
        latitude: 6.5244,
        longitude: 3.3792,
        timezone: TIMEZONE,
    },
    City {
        name: "Abuja",
        latitude: 9.0579,
        longitude: 7.4951,
        timezone: TIMEZONE,
    },
    City {
        name: "Port Harcourt",
        latitude: 4.8156,
        longitude: 7.0498,
        timezone: TIMEZONE,
    },
];

/// Look up a registry city by name
pub fn find(name: &str) -> Option<&'static City> {
    CITIES.iter().find(|city| city.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_every_registry_city() {
        for expected in CITIES {
            let city = find(expected.name).unwrap();
            assert_eq!(city, expected);
        }
    }

    #[test]
    fn lagos_coordinates() {
        let lagos = find("Lagos").unwrap();
        assert_eq!(lagos.latitude, 6.5244);
        assert_eq!(lagos.longitude, 3.3792);
        assert_eq!(lagos.timezone, "Africa/Lagos");
    }

    #[test]
    fn lookup_is_exact_match() {
        assert!(find("lagos").is_none());
        assert!(find("Lagos ").is_none());
        assert!(find("PORT HARCOURT").is_none());
    }

    #[test]
    fn unknown_city_is_none() {
        assert!(find("Nairobi").is_none());
        assert!(find("").is_none());
    }

    #[test]
    fn registry_names_are_unique() {
        for (i, city) in CITIES.iter().enumerate() {
            assert!(!CITIES[i + 1..].iter().any(|other| other.name == city.name));
        }
    }
}
