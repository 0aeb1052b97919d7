//! Application state - shared across all handlers.

use std::sync::Arc;

use thiserror::Error;

use blogger_core::PostService;
use blogger_core::ports::PostRepository;
use blogger_infra::{DatabaseConfig, InMemoryPostRepository};

#[cfg(feature = "postgres")]
use blogger_infra::PostgresPostRepository;

/// Failures while building the application state.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("database connection failed: {0}")]
    Database(String),
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
}

impl AppState {
    /// Build state around an already constructed repository.
    pub fn with_repository(repo: Arc<dyn PostRepository>) -> Self {
        Self {
            posts: PostService::new(repo),
        }
    }

    /// Build the application state with the configured storage.
    ///
    /// Without a database configuration posts are kept in memory.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Result<Self, StartupError> {
        let repo: Arc<dyn PostRepository> = match db_config {
            #[cfg(feature = "postgres")]
            Some(config) => {
                let conn = blogger_infra::connect(config)
                    .await
                    .map_err(|e| StartupError::Database(e.to_string()))?;
                Arc::new(PostgresPostRepository::new(conn))
            }
            #[cfg(not(feature = "postgres"))]
            Some(_) => {
                tracing::warn!(
                    "DATABASE_URL is set but the postgres feature is disabled. Using in-memory storage."
                );
                Arc::new(InMemoryPostRepository::new())
            }
            None => {
                tracing::warn!("DATABASE_URL not set. Posts are kept in memory only.");
                Arc::new(InMemoryPostRepository::new())
            }
        };

        tracing::info!("Application state initialized");

        Ok(Self::with_repository(repo))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_without_database_uses_memory() {
        let state = AppState::new(None).await.unwrap();
        assert!(state.posts.list().await.unwrap().is_empty());
    }
}
