//! Domain Entities

pub mod member;
pub mod refresh_token;

pub use member::Member;
pub use refresh_token::RefreshToken;
