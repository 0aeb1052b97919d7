use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Post;
use crate::error::RepoError;

/// Generic repository trait for write operations on a single entity type.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Persist a new entity and return it as stored.
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID, returning it if it existed.
    async fn delete(&self, id: ID) -> Result<Option<T>, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// All posts, most recently created first.
    async fn find_all_newest_first(&self) -> Result<Vec<Post>, RepoError>;
}
