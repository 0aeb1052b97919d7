//! # Blogger Core
//!
//! The domain layer of the blogger service.
//! Post validation, the post service and the storage ports live here;
//! this crate carries no infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;
pub mod validation;

pub use error::{DomainError, RepoError};
pub use service::PostService;
pub use validation::ValidationError;
