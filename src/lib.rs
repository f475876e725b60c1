//! cinedex - An in-memory movie catalog served over REST

pub mod cli;
pub mod http_server;
pub mod schema;
pub mod store;
