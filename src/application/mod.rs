//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! - [`services::url_service::UrlService`] - Shortening, redirect resolution and lookup

pub mod services;
