//! In-memory movie collection.
//!
//! Owns the ordered record list behind a `RwLock`. Every operation holds the
//! lock for its full duration, so each list/create/update/delete is atomic
//! relative to the others on the multi-threaded runtime.

mod errors;
pub mod seed;

pub use errors::{StoreError, StoreResult};

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

use crate::schema::{Movie, MoviePatch, NewMovie};

/// The mutable movie collection, insertion order preserved.
pub struct MovieStore {
    movies: RwLock<Vec<Movie>>,
}

impl MovieStore {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::from_movies(Vec::new())
    }

    /// Creates a collection pre-populated from the embedded seed dataset.
    ///
    /// # Errors
    ///
    /// Returns the decode error if the embedded dataset is malformed.
    pub fn seeded() -> Result<Self, serde_json::Error> {
        Ok(Self::from_movies(seed::load()?))
    }

    /// Creates a collection with explicit initial contents.
    pub fn from_movies(movies: Vec<Movie>) -> Self {
        Self {
            movies: RwLock::new(movies),
        }
    }

    /// Returns all records in insertion order, optionally narrowed to those
    /// carrying at least one genre that matches `genre_filter` (ASCII
    /// case-insensitive). An unmatched filter yields an empty list, not an
    /// error.
    pub fn list(&self, genre_filter: Option<&str>) -> StoreResult<Vec<Movie>> {
        let movies = self.read()?;
        Ok(match genre_filter {
            None => movies.clone(),
            Some(filter) => movies
                .iter()
                .filter(|movie| movie.genre.iter().any(|genre| genre.matches_filter(filter)))
                .cloned()
                .collect(),
        })
    }

    /// Returns the record with the given id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no record carries the id.
    pub fn get(&self, id: Uuid) -> StoreResult<Movie> {
        self.read()?
            .iter()
            .find(|movie| movie.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    /// Assigns a fresh id, appends the record, and returns it as stored.
    pub fn create(&self, new: NewMovie) -> StoreResult<Movie> {
        let movie = new.into_movie(Uuid::new_v4());
        self.write()?.push(movie.clone());
        Ok(movie)
    }

    /// Overwrites the patch's supplied fields on the matching record, in
    /// place. The record keeps its id and its position in the list.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no record carries the id.
    pub fn update(&self, id: Uuid, patch: &MoviePatch) -> StoreResult<Movie> {
        let mut movies = self.write()?;
        let movie = movies
            .iter_mut()
            .find(|movie| movie.id == id)
            .ok_or(StoreError::NotFound)?;
        patch.apply_to(movie);
        Ok(movie.clone())
    }

    /// Removes the matching record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no record carries the id.
    pub fn delete(&self, id: Uuid) -> StoreResult<()> {
        let mut movies = self.write()?;
        let index = movies
            .iter()
            .position(|movie| movie.id == id)
            .ok_or(StoreError::NotFound)?;
        movies.remove(index);
        Ok(())
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Vec<Movie>>> {
        self.movies
            .read()
            .map_err(|_| StoreError::Internal("collection lock poisoned".to_string()))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Vec<Movie>>> {
        self.movies
            .write()
            .map_err(|_| StoreError::Internal("collection lock poisoned".to_string()))
    }
}

impl Default for MovieStore {
    fn default() -> Self {
        Self::new()
    }
}
