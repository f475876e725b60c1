//! Embedded seed dataset.
//!
//! Every boot starts the catalog from the same fixed dataset. Records decode
//! through the `Movie` serde schema, so a malformed seed fails at startup
//! instead of being served.

use crate::schema::Movie;

const SEED_JSON: &str = include_str!("../../data/movies.json");

/// Decodes the embedded dataset.
///
/// # Errors
///
/// Returns the decode error if the dataset does not match the record schema.
pub fn load() -> Result<Vec<Movie>, serde_json::Error> {
    serde_json::from_str(SEED_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{max_year, MIN_YEAR};
    use std::collections::HashSet;

    #[test]
    fn test_seed_decodes() {
        let movies = load().unwrap();
        assert!(!movies.is_empty());
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let movies = load().unwrap();
        let ids: HashSet<_> = movies.iter().map(|movie| movie.id).collect();
        assert_eq!(ids.len(), movies.len());
    }

    #[test]
    fn test_seed_satisfies_record_rules() {
        for movie in load().unwrap() {
            assert!(!movie.title.is_empty(), "{} has empty title", movie.id);
            assert!(!movie.director.is_empty(), "{} has empty director", movie.id);
            assert!(
                (MIN_YEAR..=max_year()).contains(&movie.year),
                "{} has out-of-range year {}",
                movie.id,
                movie.year
            );
            assert!(movie.duration > 0, "{} has zero duration", movie.id);
            assert!(
                url::Url::parse(&movie.poster).is_ok(),
                "{} has invalid poster URL",
                movie.id
            );
            assert!(!movie.genre.is_empty(), "{} has no genres", movie.id);
            assert!(
                (0.0..=10.0).contains(&movie.rate),
                "{} has out-of-range rate {}",
                movie.id,
                movie.rate
            );
        }
    }
}
