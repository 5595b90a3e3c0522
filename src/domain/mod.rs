//! Domain layer containing the stored entity and its storage contract.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Business flows live in [`crate::application::services`].

pub mod entities;
pub mod repositories;
