//! Place suggestions for manual route entry.

/// Default number of suggestions returned.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Queries shorter than this return no suggestions.
const MIN_QUERY_CHARS: usize = 2;

/// Common Nigerian pickup and drop-off locations.
const NIGERIAN_LOCATIONS: &[&str] = &[
    "Lagos Island, Lagos",
    "Victoria Island, Lagos",
    "Ikeja, Lagos",
    "Abuja, FCT",
    "Port Harcourt, Rivers",
    "Kano, Kano",
    "Ibadan, Oyo",
    "Benin City, Edo",
    "Enugu, Enugu",
    "Kaduna, Kaduna",
];

/// Fixed list of place names searchable by substring.
#[derive(Debug, Clone)]
pub struct LocationSuggestions {
    places: Vec<String>,
}

impl LocationSuggestions {
    /// Create suggestions from a custom list of places.
    pub fn new<I, S>(places: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            places: places.into_iter().map(Into::into).collect(),
        }
    }

    /// The built-in list of Nigerian locations.
    pub fn nigeria() -> Self {
        Self::new(NIGERIAN_LOCATIONS.iter().copied())
    }

    /// Number of known places.
    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// Places containing `query`, ignoring case, in list order.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&str> {
        let query = query.trim().to_lowercase();
        if query.chars().count() < MIN_QUERY_CHARS {
            return Vec::new();
        }

        self.places
            .iter()
            .filter(|place| place.to_lowercase().contains(&query))
            .take(limit)
            .map(String::as_str)
            .collect()
    }
}

impl Default for LocationSuggestions {
    fn default() -> Self {
        Self::nigeria()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn finds_by_city() {
        let places = LocationSuggestions::nigeria();
        assert_eq!(
            places.search("lagos", DEFAULT_SUGGESTION_LIMIT),
            vec!["Lagos Island, Lagos", "Victoria Island, Lagos", "Ikeja, Lagos"]
        );
    }

    #[test]
    fn case_insensitive() {
        let places = LocationSuggestions::nigeria();
        assert_eq!(places.search("ABUJA", 5), vec!["Abuja, FCT"]);
        assert_eq!(places.search("  port h ", 5), vec!["Port Harcourt, Rivers"]);
    }

    #[test]
    fn short_queries_return_nothing() {
        let places = LocationSuggestions::nigeria();
        assert!(places.search("", 5).is_empty());
        assert!(places.search("a", 5).is_empty());
        assert!(places.search("  k  ", 5).is_empty());
    }

    #[test]
    fn respects_limit() {
        let places = LocationSuggestions::nigeria();
        assert_eq!(
            places.search("an", 5),
            vec![
                "Lagos Island, Lagos",
                "Victoria Island, Lagos",
                "Kano, Kano",
                "Ibadan, Oyo"
            ]
        );
        assert_eq!(places.search("an", 2).len(), 2);
        assert!(places.search("an", 0).is_empty());
    }

    #[test]
    fn no_match() {
        assert!(LocationSuggestions::nigeria().search("Accra", 5).is_empty());
    }

    #[test]
    fn custom_list() {
        let places = LocationSuggestions::new(["Yaba, Lagos", "Surulere, Lagos"]);
        assert_eq!(places.len(), 2);
        assert_eq!(places.search("yaba", 5), vec!["Yaba, Lagos"]);
    }

    proptest! {
        #[test]
        fn results_bounded_and_matching(query in "[a-zA-Z ,]{0,8}", limit in 0usize..12) {
            let places = LocationSuggestions::nigeria();
            let results = places.search(&query, limit);
            prop_assert!(results.len() <= limit);
            let needle = query.trim().to_lowercase();
            for r in results {
                prop_assert!(r.to_lowercase().contains(&needle));
            }
        }
    }
}
