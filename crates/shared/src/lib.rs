//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of domain vocabulary:
//! - Unified error type and result alias, mapped to HTTP status codes
//! - Typed ID wrappers for the domain entities
//! - The authenticated-caller extractor shared by protected routes
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;

#[cfg(feature = "axum")]
pub mod extract;
