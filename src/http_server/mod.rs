//! # HTTP Server Module
//!
//! Serves the movie collection over REST.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /movies?genre=` - List movies, optionally narrowed by genre
//! - `POST /movies` - Create a movie
//! - `GET|PATCH|DELETE /movies/{id}` - Fetch, patch, or remove one movie
//!
//! An `OPTIONS` preflight to any path is answered by the cross-origin
//! middleware without reaching the router.

pub mod config;
pub mod errors;
pub mod health_routes;
pub mod movie_routes;
pub mod origin;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
