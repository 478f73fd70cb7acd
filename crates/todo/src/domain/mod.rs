//! Domain Layer
//!
//! Todo entity, status state machine, and the repository trait. No I/O here.

pub mod entity;
pub mod repository;
