//! SQLite repository implementations and pool setup.
//!
//! - [`SqliteUrlRepository`] - URL mapping storage and retrieval
//! - [`connect`] - Opens the pool and applies embedded migrations

pub mod pool;
pub mod sqlite_url_repository;

pub use pool::{MIGRATOR, connect};
pub use sqlite_url_repository::SqliteUrlRepository;
