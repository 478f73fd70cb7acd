//! Presentation Layer
//!
//! HTTP boundary: DTOs, handlers, router, and the bearer-auth middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;
