//! Items service backend

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// Route handlers
pub mod routes;

/// Server startup
pub mod server;

/// Shared types (environment, errors)
pub mod types;
