//! Infrastructure Layer
//!
//! Repository implementations: PostgreSQL for production, in-memory for
//! tests and examples.

pub mod memory;
pub mod postgres;

pub use memory::MemoryTodoRepository;
pub use postgres::PgTodoRepository;
