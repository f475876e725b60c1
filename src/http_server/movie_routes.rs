//! Movie HTTP Routes
//!
//! CRUD endpoints for the movie collection.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, patch, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use crate::schema::{validate_full, validate_partial, Movie};
use crate::store::MovieStore;

use super::errors::{ApiError, ApiResult, MessageResponse};

// ==================
// Shared State
// ==================

/// State shared across movie handlers
pub struct MovieState {
    pub store: MovieStore,
}

impl MovieState {
    pub fn new(store: MovieStore) -> Self {
        Self { store }
    }
}

// ==================
// Request Types
// ==================

/// Query parameters accepted by the list endpoint
#[derive(Debug, Deserialize)]
pub struct ListMoviesQuery {
    /// Keep only movies carrying this genre (case-insensitive)
    #[serde(default)]
    pub genre: Option<String>,
}

impl ListMoviesQuery {
    /// The effective filter. An empty `genre=` value means no filter, the
    /// same as omitting the parameter.
    fn genre_filter(&self) -> Option<&str> {
        self.genre.as_deref().filter(|genre| !genre.is_empty())
    }
}

// ==================
// Movie Routes
// ==================

/// Create movie routes
pub fn movie_routes(state: Arc<MovieState>) -> Router {
    Router::new()
        .route("/movies", get(list_movies_handler))
        .route("/movies", post(create_movie_handler))
        .route("/movies/{id}", get(get_movie_handler))
        .route("/movies/{id}", patch(update_movie_handler))
        .route("/movies/{id}", delete(delete_movie_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn list_movies_handler(
    State(state): State<Arc<MovieState>>,
    Query(query): Query<ListMoviesQuery>,
) -> ApiResult<Json<Vec<Movie>>> {
    let movies = state.store.list(query.genre_filter())?;
    Ok(Json(movies))
}

async fn get_movie_handler(
    State(state): State<Arc<MovieState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Movie>> {
    let movie = state.store.get(parse_id(&id)?)?;
    Ok(Json(movie))
}

async fn create_movie_handler(
    State(state): State<Arc<MovieState>>,
    Json(candidate): Json<Value>,
) -> ApiResult<(StatusCode, Json<Movie>)> {
    let new = validate_full(&candidate)?;
    let movie = state.store.create(new)?;
    debug!(id = %movie.id, title = %movie.title, "movie created");
    Ok((StatusCode::CREATED, Json(movie)))
}

async fn update_movie_handler(
    State(state): State<Arc<MovieState>>,
    Path(id): Path<String>,
    Json(candidate): Json<Value>,
) -> ApiResult<Json<Movie>> {
    // Validate the body first: a malformed patch is rejected even when the
    // id matches nothing.
    let update = validate_partial(&candidate)?;
    let movie = state.store.update(parse_id(&id)?, &update)?;
    debug!(id = %movie.id, "movie updated");
    Ok(Json(movie))
}

async fn delete_movie_handler(
    State(state): State<Arc<MovieState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let id = parse_id(&id)?;
    state.store.delete(id)?;
    debug!(%id, "movie deleted");
    Ok(Json(MessageResponse {
        message: "Movie delete".to_string(),
    }))
}

/// A path id that is not a UUID can never name a record, so it reports as
/// not-found rather than bad-request.
fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::NotFound)
}
