//! Core domain entities.
//!
//! - [`ShortenedUrl`] - A stored URL and the short code derived from its id

pub mod shortened_url;

pub use shortened_url::ShortenedUrl;
