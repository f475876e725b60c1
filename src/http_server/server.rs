//! # HTTP Server
//!
//! Combines the movie routes, the health check, and the cross-origin policy
//! into one Axum server.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::store::MovieStore;

use super::config::HttpServerConfig;
use super::health_routes::health_routes;
use super::movie_routes::{movie_routes, MovieState};
use super::origin::{apply_origin_policy, OriginPolicy};

/// HTTP server for the movie catalog
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over the given store with default configuration
    pub fn new(store: MovieStore) -> Self {
        Self::with_config(HttpServerConfig::default(), store)
    }

    /// Create a server with custom configuration
    pub fn with_config(config: HttpServerConfig, store: MovieStore) -> Self {
        let router = Self::build_router(&config, store);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, store: MovieStore) -> Router {
        let movie_state = Arc::new(MovieState::new(store));
        let policy = Arc::new(OriginPolicy::new(config.cors_origins.clone()));

        // The origin middleware must wrap the whole router so preflights are
        // answered for every path; the trace layer wraps that in turn.
        Router::new()
            .merge(health_routes())
            .merge(movie_routes(movie_state))
            .layer(middleware::from_fn_with_state(policy, apply_origin_policy))
            .layer(TraceLayer::new_for_http())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidInput, err))?;

        info!(%addr, "starting movie catalog server");
        info!("health check: http://{addr}/health");
        info!("movie collection: http://{addr}/movies");

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
