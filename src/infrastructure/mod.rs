//! Infrastructure layer for external integrations.
//!
//! Implements the storage contract defined by the domain layer.
//!
//! - [`persistence`] - SQLite repository implementation

pub mod persistence;
