//! Ports - trait definitions for external dependencies.
//! Infrastructure provides the implementations.

mod repository;

pub use repository::{BaseRepository, PostRepository};
