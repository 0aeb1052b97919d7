//! # Blogger Infrastructure
//!
//! Concrete implementations of the ports defined in `blogger-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL storage via SeaORM
//! - `minimal` - In-memory storage only

pub mod database;
pub mod memory;

pub use database::DatabaseConfig;
pub use memory::InMemoryPostRepository;

#[cfg(feature = "postgres")]
pub use database::{PostgresPostRepository, connect};
