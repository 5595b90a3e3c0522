//! Utility functions for short code encoding and input checking.
//!
//! - [`base62`] - Identifier to short code codec
//! - [`url_validation`] - Syntax check for URLs submitted for shortening

pub mod base62;
pub mod url_validation;
