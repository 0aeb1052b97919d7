//! In-memory storage - used when no database is configured, and in tests.

mod post;

pub use post::InMemoryPostRepository;
