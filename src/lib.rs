//! # shorturl
//!
//! A URL shortening service built with Axum and SQLite.
//!
//! Short codes are not random: each one is the base-62 encoding of the
//! identifier the database assigned to the stored URL, so codes are unique
//! by construction and decode back to their row.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The stored entity and the repository trait
//! - **Application Layer** ([`application`]) - Shorten, redirect and lookup flows
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite repository and pool
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export BASE_HOST="https://sho.rt"
//! export DB_PATH="data.sqlite"   # created and migrated on first start
//!
//! cargo run
//!
//! curl -X POST localhost:3000/api/v1/shorten \
//!      -H 'Content-Type: application/json' \
//!      -d '{"original_url": "https://example.com/page"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ShortenedLink, UrlService};
    pub use crate::domain::entities::ShortenedUrl;
    pub use crate::domain::repositories::UrlRepository;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
    pub use crate::utils::base62;
}
