//! Application Layer
//!
//! One use case per operation of the auth lifecycle.

pub mod config;
pub mod refresh;
pub mod sign_in;
pub mod sign_out;
pub mod sign_up;
pub mod token;

pub use refresh::RefreshUseCase;
pub use sign_in::{SignInInput, SignInUseCase};
pub use sign_out::SignOutUseCase;
pub use sign_up::{SignUpInput, SignUpUseCase};
pub use token::TokenPair;
