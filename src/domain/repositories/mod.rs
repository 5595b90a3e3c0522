//! Repository trait definitions for the domain layer.
//!
//! The trait here is the storage contract consumed by the application layer.
//! Its implementation lives in `crate::infrastructure::persistence`, and a
//! `mockall` mock is generated for unit tests.
//!
//! - [`UrlRepository`] - URL mapping storage

pub mod url_repository;

pub use url_repository::UrlRepository;

#[cfg(test)]
pub use url_repository::MockUrlRepository;
