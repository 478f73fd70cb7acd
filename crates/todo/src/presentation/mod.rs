//! Presentation Layer
//!
//! HTTP boundary: DTOs, handlers, router. Authentication happens one
//! layer out; handlers only require a [`kernel::extract::CurrentMember`]
//! in the request extensions.

pub mod dto;
pub mod handlers;
pub mod router;
