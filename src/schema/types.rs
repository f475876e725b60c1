//! Movie record types.
//!
//! The serde field names are the wire contract. `Movie` doubles as the decode
//! target for the embedded seed dataset, so seed records pass through the same
//! schema as API input.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// The closed set of accepted genres.
///
/// Wire names are the canonical spellings below; `SciFi` serializes as
/// `"Sci-Fi"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Adventure,
    Animation,
    Biography,
    Comedy,
    Crime,
    Drama,
    Fantasy,
    Horror,
    Romance,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Thriller,
}

impl Genre {
    /// Every accepted genre, in canonical order.
    pub const ALL: [Genre; 12] = [
        Genre::Action,
        Genre::Adventure,
        Genre::Animation,
        Genre::Biography,
        Genre::Comedy,
        Genre::Crime,
        Genre::Drama,
        Genre::Fantasy,
        Genre::Horror,
        Genre::Romance,
        Genre::SciFi,
        Genre::Thriller,
    ];

    /// Canonical name as it appears on the wire.
    pub fn name(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Adventure => "Adventure",
            Genre::Animation => "Animation",
            Genre::Biography => "Biography",
            Genre::Comedy => "Comedy",
            Genre::Crime => "Crime",
            Genre::Drama => "Drama",
            Genre::Fantasy => "Fantasy",
            Genre::Horror => "Horror",
            Genre::Romance => "Romance",
            Genre::SciFi => "Sci-Fi",
            Genre::Thriller => "Thriller",
        }
    }

    /// Parse a canonical name. Case-sensitive: stored records only ever
    /// contain canonical spellings.
    pub fn parse(value: &str) -> Option<Genre> {
        Genre::ALL.iter().copied().find(|genre| genre.name() == value)
    }

    /// Compare against a query filter, ASCII case-insensitively.
    pub fn matches_filter(&self, filter: &str) -> bool {
        self.name().eq_ignore_ascii_case(filter)
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One stored movie record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Store-assigned identity, immutable for the record's lifetime
    pub id: Uuid,
    /// Non-empty display title
    pub title: String,
    /// Release year
    pub year: i32,
    /// Non-empty director name
    pub director: String,
    /// Runtime in minutes, strictly positive
    pub duration: u32,
    /// Absolute URL of the poster image
    pub poster: String,
    /// At least one genre from the accepted set
    pub genre: Vec<Genre>,
    /// Rating from 0 to 10 inclusive
    #[serde(default)]
    pub rate: f64,
}

/// A fully validated candidate record, ready to store.
///
/// Carries no id: identity is assigned by the store at creation, never by
/// the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovie {
    pub title: String,
    pub year: i32,
    pub director: String,
    pub duration: u32,
    pub poster: String,
    pub genre: Vec<Genre>,
    pub rate: f64,
}

impl NewMovie {
    /// Attach a generated id, producing the storable record.
    pub fn into_movie(self, id: Uuid) -> Movie {
        Movie {
            id,
            title: self.title,
            year: self.year,
            director: self.director,
            duration: self.duration,
            poster: self.poster,
            genre: self.genre,
            rate: self.rate,
        }
    }
}

/// The validated subset of fields supplied by a partial update.
///
/// There is no id slot: an id in the request payload never survives
/// validation, which keeps stored identities immutable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoviePatch {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub director: Option<String>,
    pub duration: Option<u32>,
    pub poster: Option<String>,
    pub genre: Option<Vec<Genre>>,
    pub rate: Option<f64>,
}

impl MoviePatch {
    /// True when the patch carries no fields. Applying an empty patch is a
    /// valid no-op update.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.year.is_none()
            && self.director.is_none()
            && self.duration.is_none()
            && self.poster.is_none()
            && self.genre.is_none()
            && self.rate.is_none()
    }

    /// Overwrite exactly the supplied fields on an existing record.
    pub fn apply_to(&self, movie: &mut Movie) {
        if let Some(title) = &self.title {
            movie.title = title.clone();
        }
        if let Some(year) = self.year {
            movie.year = year;
        }
        if let Some(director) = &self.director {
            movie.director = director.clone();
        }
        if let Some(duration) = self.duration {
            movie.duration = duration;
        }
        if let Some(poster) = &self.poster {
            movie.poster = poster.clone();
        }
        if let Some(genre) = &self.genre {
            movie.genre = genre.clone();
        }
        if let Some(rate) = self.rate {
            movie.rate = rate;
        }
    }
}
