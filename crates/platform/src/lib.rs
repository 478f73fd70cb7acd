//! Platform Utilities
//!
//! Cross-cutting cryptographic primitives with no domain knowledge:
//! - Password policy validation and Argon2id hashing
//! - Opaque token generation over OS randomness

pub mod crypto;
pub mod password;
