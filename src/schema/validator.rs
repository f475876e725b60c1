//! Full and partial validation of candidate movie records.
//!
//! Both entry points walk an already-parsed JSON value and collect one issue
//! per offending field instead of stopping at the first failure, so a
//! rejection names every problem at once. Validation does not mutate the
//! candidate and is deterministic.
//!
//! Keys outside the schema are ignored. That includes `id`: record identity
//! only ever comes from the store.

use chrono::{Datelike, Utc};
use serde_json::{Map, Value};
use url::Url;

use super::errors::{FieldIssue, ValidationError, ValidationResult};
use super::types::{Genre, MoviePatch, NewMovie};

/// Lowest accepted release year.
pub const MIN_YEAR: i32 = 1900;

/// Rating applied when a create candidate omits `rate`.
pub const DEFAULT_RATE: f64 = 0.0;

/// Highest accepted release year: next year, since releases get catalogued
/// ahead of their premiere.
pub fn max_year() -> i32 {
    Utc::now().year() + 1
}

/// Validates a create candidate.
///
/// Every schema field except `rate` is required; `rate` defaults to
/// [`DEFAULT_RATE`] when absent.
///
/// # Errors
///
/// Returns `ValidationError` listing each missing or invalid field. A
/// non-object candidate fails with a single `$root` issue.
pub fn validate_full(candidate: &Value) -> ValidationResult<NewMovie> {
    let obj = as_object(candidate)?;
    let mut issues = Vec::new();

    let title = required(&mut issues, obj, "title", check_text);
    let year = required(&mut issues, obj, "year", check_year);
    let director = required(&mut issues, obj, "director", check_text);
    let duration = required(&mut issues, obj, "duration", check_duration);
    let poster = required(&mut issues, obj, "poster", check_poster);
    let genre = match obj.get("genre") {
        None => {
            issues.push(FieldIssue::new("genre", "is required"));
            None
        }
        Some(value) => checked_genres(&mut issues, value),
    };
    let rate = match obj.get("rate") {
        None => Some(DEFAULT_RATE),
        Some(value) => checked(&mut issues, "rate", value, check_rate),
    };

    match (title, year, director, duration, poster, genre, rate) {
        (Some(title), Some(year), Some(director), Some(duration), Some(poster), Some(genre), Some(rate))
            if issues.is_empty() =>
        {
            Ok(NewMovie {
                title,
                year,
                director,
                duration,
                poster,
                genre,
                rate,
            })
        }
        _ => Err(ValidationError::new(issues)),
    }
}

/// Validates an update candidate.
///
/// Every schema field is optional, but any field that is present must satisfy
/// the same rule as in [`validate_full`]. An empty object is a valid no-op
/// patch.
///
/// # Errors
///
/// Returns `ValidationError` listing each invalid field. A non-object
/// candidate fails with a single `$root` issue.
pub fn validate_partial(candidate: &Value) -> ValidationResult<MoviePatch> {
    let obj = as_object(candidate)?;
    let mut issues = Vec::new();

    let patch = MoviePatch {
        title: present(&mut issues, obj, "title", check_text),
        year: present(&mut issues, obj, "year", check_year),
        director: present(&mut issues, obj, "director", check_text),
        duration: present(&mut issues, obj, "duration", check_duration),
        poster: present(&mut issues, obj, "poster", check_poster),
        genre: match obj.get("genre") {
            None => None,
            Some(value) => checked_genres(&mut issues, value),
        },
        rate: present(&mut issues, obj, "rate", check_rate),
    };

    if issues.is_empty() {
        Ok(patch)
    } else {
        Err(ValidationError::new(issues))
    }
}

fn as_object(candidate: &Value) -> Result<&Map<String, Value>, ValidationError> {
    candidate
        .as_object()
        .ok_or_else(|| ValidationError::single("$root", "must be a JSON object"))
}

/// Runs a check on a field that must be present.
fn required<T>(
    issues: &mut Vec<FieldIssue>,
    obj: &Map<String, Value>,
    field: &str,
    check: impl FnOnce(&Value) -> Result<T, String>,
) -> Option<T> {
    match obj.get(field) {
        None => {
            issues.push(FieldIssue::new(field, "is required"));
            None
        }
        Some(value) => checked(issues, field, value, check),
    }
}

/// Runs a check on a field that may be absent. Absent means "leave the stored
/// value alone", never "apply a default".
fn present<T>(
    issues: &mut Vec<FieldIssue>,
    obj: &Map<String, Value>,
    field: &str,
    check: impl FnOnce(&Value) -> Result<T, String>,
) -> Option<T> {
    obj.get(field)
        .and_then(|value| checked(issues, field, value, check))
}

fn checked<T>(
    issues: &mut Vec<FieldIssue>,
    field: &str,
    value: &Value,
    check: impl FnOnce(&Value) -> Result<T, String>,
) -> Option<T> {
    match check(value) {
        Ok(parsed) => Some(parsed),
        Err(message) => {
            issues.push(FieldIssue::new(field, message));
            None
        }
    }
}

/// Checks the genre array, reporting each bad element under its own
/// `genre[i]` path.
fn checked_genres(issues: &mut Vec<FieldIssue>, value: &Value) -> Option<Vec<Genre>> {
    let items = match value.as_array() {
        Some(items) if !items.is_empty() => items,
        _ => {
            issues.push(FieldIssue::new("genre", "must be a non-empty array of genres"));
            return None;
        }
    };

    let mut genres = Vec::with_capacity(items.len());
    let mut valid = true;
    for (index, item) in items.iter().enumerate() {
        match item.as_str() {
            None => {
                issues.push(FieldIssue::new(format!("genre[{index}]"), "must be a string"));
                valid = false;
            }
            Some(name) => match Genre::parse(name) {
                Some(genre) => genres.push(genre),
                None => {
                    issues.push(FieldIssue::new(
                        format!("genre[{index}]"),
                        format!("unknown genre '{name}'"),
                    ));
                    valid = false;
                }
            },
        }
    }
    valid.then_some(genres)
}

fn check_text(value: &Value) -> Result<String, String> {
    match value.as_str() {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => Err("must be a non-empty string".to_string()),
    }
}

fn check_year(value: &Value) -> Result<i32, String> {
    let max = max_year();
    match value.as_i64() {
        Some(year) if (i64::from(MIN_YEAR)..=i64::from(max)).contains(&year) => Ok(year as i32),
        _ => Err(format!("must be an integer between {MIN_YEAR} and {max}")),
    }
}

fn check_duration(value: &Value) -> Result<u32, String> {
    match value.as_u64() {
        Some(minutes) if minutes > 0 && minutes <= u64::from(u32::MAX) => Ok(minutes as u32),
        _ => Err("must be a positive integer".to_string()),
    }
}

fn check_poster(value: &Value) -> Result<String, String> {
    match value.as_str() {
        Some(text) if Url::parse(text).is_ok() => Ok(text.to_string()),
        _ => Err("must be a valid URL".to_string()),
    }
}

fn check_rate(value: &Value) -> Result<f64, String> {
    match value.as_f64() {
        Some(rate) if (0.0..=10.0).contains(&rate) => Ok(rate),
        _ => Err("must be a number between 0 and 10".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_candidate() -> Value {
        json!({
            "title": "The Thing",
            "year": 1982,
            "director": "John Carpenter",
            "duration": 109,
            "poster": "https://example.com/the-thing.jpg",
            "genre": ["Horror", "Sci-Fi"],
            "rate": 8.2
        })
    }

    #[test]
    fn test_full_accepts_valid_candidate() {
        let new = validate_full(&valid_candidate()).unwrap();
        assert_eq!(new.title, "The Thing");
        assert_eq!(new.year, 1982);
        assert_eq!(new.duration, 109);
        assert_eq!(new.genre, vec![Genre::Horror, Genre::SciFi]);
        assert_eq!(new.rate, 8.2);
    }

    #[test]
    fn test_full_defaults_rate_when_absent() {
        let mut candidate = valid_candidate();
        candidate.as_object_mut().unwrap().remove("rate");
        let new = validate_full(&candidate).unwrap();
        assert_eq!(new.rate, DEFAULT_RATE);
    }

    #[test]
    fn test_full_ignores_unknown_keys_including_id() {
        let mut candidate = valid_candidate();
        let obj = candidate.as_object_mut().unwrap();
        obj.insert("id".to_string(), json!("550e8400-e29b-41d4-a716-446655440000"));
        obj.insert("studio".to_string(), json!("Universal"));
        assert!(validate_full(&candidate).is_ok());
    }

    #[test]
    fn test_full_reports_missing_field() {
        let mut candidate = valid_candidate();
        candidate.as_object_mut().unwrap().remove("title");
        let error = validate_full(&candidate).unwrap_err();
        assert_eq!(error.fields(), vec!["title"]);
        assert_eq!(error.issues[0].message, "is required");
    }

    #[test]
    fn test_full_collects_every_offending_field() {
        let mut candidate = valid_candidate();
        let obj = candidate.as_object_mut().unwrap();
        obj.remove("title");
        obj.insert("rate".to_string(), json!(11));
        obj.insert("genre".to_string(), json!([]));
        let error = validate_full(&candidate).unwrap_err();
        assert_eq!(error.fields(), vec!["title", "genre", "rate"]);
    }

    #[test]
    fn test_full_rejects_empty_title() {
        let mut candidate = valid_candidate();
        candidate.as_object_mut().unwrap().insert("title".to_string(), json!(""));
        let error = validate_full(&candidate).unwrap_err();
        assert_eq!(error.fields(), vec!["title"]);
    }

    #[test]
    fn test_full_rejects_wrong_title_type() {
        let mut candidate = valid_candidate();
        candidate.as_object_mut().unwrap().insert("title".to_string(), json!(7));
        let error = validate_full(&candidate).unwrap_err();
        assert_eq!(error.issues[0].message, "must be a non-empty string");
    }

    #[test]
    fn test_full_rejects_year_out_of_range() {
        for bad_year in [1899, max_year() + 1] {
            let mut candidate = valid_candidate();
            candidate.as_object_mut().unwrap().insert("year".to_string(), json!(bad_year));
            let error = validate_full(&candidate).unwrap_err();
            assert_eq!(error.fields(), vec!["year"]);
        }
    }

    #[test]
    fn test_full_accepts_year_bounds() {
        for good_year in [MIN_YEAR, max_year()] {
            let mut candidate = valid_candidate();
            candidate.as_object_mut().unwrap().insert("year".to_string(), json!(good_year));
            assert!(validate_full(&candidate).is_ok());
        }
    }

    #[test]
    fn test_full_rejects_fractional_year() {
        let mut candidate = valid_candidate();
        candidate.as_object_mut().unwrap().insert("year".to_string(), json!(1982.5));
        assert!(validate_full(&candidate).is_err());
    }

    #[test]
    fn test_full_rejects_nonpositive_duration() {
        for bad_duration in [json!(0), json!(-90), json!(90.5)] {
            let mut candidate = valid_candidate();
            candidate.as_object_mut().unwrap().insert("duration".to_string(), bad_duration);
            let error = validate_full(&candidate).unwrap_err();
            assert_eq!(error.fields(), vec!["duration"]);
            assert_eq!(error.issues[0].message, "must be a positive integer");
        }
    }

    #[test]
    fn test_full_rejects_relative_poster_url() {
        let mut candidate = valid_candidate();
        candidate
            .as_object_mut()
            .unwrap()
            .insert("poster".to_string(), json!("posters/the-thing.jpg"));
        let error = validate_full(&candidate).unwrap_err();
        assert_eq!(error.fields(), vec!["poster"]);
        assert_eq!(error.issues[0].message, "must be a valid URL");
    }

    #[test]
    fn test_full_keys_each_bad_genre_element() {
        let mut candidate = valid_candidate();
        candidate
            .as_object_mut()
            .unwrap()
            .insert("genre".to_string(), json!(["Horror", "Western", 3]));
        let error = validate_full(&candidate).unwrap_err();
        assert_eq!(error.fields(), vec!["genre[1]", "genre[2]"]);
        assert_eq!(error.issues[0].message, "unknown genre 'Western'");
        assert_eq!(error.issues[1].message, "must be a string");
    }

    #[test]
    fn test_full_rejects_lowercase_genre_on_input() {
        let mut candidate = valid_candidate();
        candidate
            .as_object_mut()
            .unwrap()
            .insert("genre".to_string(), json!(["horror"]));
        let error = validate_full(&candidate).unwrap_err();
        assert_eq!(error.fields(), vec!["genre[0]"]);
    }

    #[test]
    fn test_full_rejects_rate_out_of_range() {
        for bad_rate in [json!(-0.1), json!(10.1)] {
            let mut candidate = valid_candidate();
            candidate.as_object_mut().unwrap().insert("rate".to_string(), bad_rate);
            let error = validate_full(&candidate).unwrap_err();
            assert_eq!(error.fields(), vec!["rate"]);
        }
    }

    #[test]
    fn test_full_accepts_integer_rate() {
        let mut candidate = valid_candidate();
        candidate.as_object_mut().unwrap().insert("rate".to_string(), json!(7));
        let new = validate_full(&candidate).unwrap();
        assert_eq!(new.rate, 7.0);
    }

    #[test]
    fn test_full_rejects_non_object_candidate() {
        let error = validate_full(&json!(["not", "an", "object"])).unwrap_err();
        assert_eq!(error.fields(), vec!["$root"]);
        assert_eq!(error.issues[0].message, "must be a JSON object");
    }

    #[test]
    fn test_partial_accepts_empty_object() {
        let patch = validate_partial(&json!({})).unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn test_partial_strips_id_key() {
        let patch = validate_partial(&json!({"id": "not-even-a-uuid"})).unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn test_partial_accepts_valid_subset() {
        let patch = validate_partial(&json!({"title": "Re-cut", "rate": 9.0})).unwrap();
        assert_eq!(patch.title.as_deref(), Some("Re-cut"));
        assert_eq!(patch.rate, Some(9.0));
        assert!(patch.year.is_none());
        assert!(patch.genre.is_none());
    }

    #[test]
    fn test_partial_rejects_invalid_present_field() {
        let error = validate_partial(&json!({"rate": 12})).unwrap_err();
        assert_eq!(error.fields(), vec!["rate"]);
    }

    #[test]
    fn test_partial_rejects_null_field() {
        let error = validate_partial(&json!({"title": null})).unwrap_err();
        assert_eq!(error.fields(), vec!["title"]);
    }

    #[test]
    fn test_partial_collects_every_offending_field() {
        let error = validate_partial(&json!({"year": 1800, "duration": 0})).unwrap_err();
        assert_eq!(error.fields(), vec!["year", "duration"]);
    }

    #[test]
    fn test_partial_rejects_non_object_candidate() {
        let error = validate_partial(&json!("patch me")).unwrap_err();
        assert_eq!(error.fields(), vec!["$root"]);
    }
}
