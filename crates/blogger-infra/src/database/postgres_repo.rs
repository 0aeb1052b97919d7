//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{EntityTrait, QueryOrder};

use blogger_core::domain::Post;
use blogger_core::error::RepoError;
use blogger_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::{PostgresBaseRepository, query_error};

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_all_newest_first(&self) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .order_by_desc(post::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(query_error)?;

        tracing::debug!(count = result.len(), "Loaded posts");
        Ok(result.into_iter().map(Into::into).collect())
    }
}
