use std::sync::Arc;

use serde_json::Value;

use crate::domain::Post;
use crate::error::DomainError;
use crate::ports::PostRepository;
use crate::validation;

/// List, create and delete posts against a single repository.
///
/// Every write is validated first; nothing is persisted for rejected input.
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// All posts, newest first.
    pub async fn list(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.repo.find_all_newest_first().await?)
    }

    /// Validate, normalize and store a new post.
    ///
    /// `text` and `hashtag` are the raw JSON values from the request body;
    /// text is checked before the hashtag is looked at.
    pub async fn create(
        &self,
        text: Option<&Value>,
        hashtag: Option<&Value>,
    ) -> Result<Post, DomainError> {
        let text = validation::validate_post_text(text)?;
        let hashtag = validation::validate_hashtag(hashtag)?;

        let post = self.repo.save(Post::new(text, hashtag)).await?;
        tracing::debug!(post_id = %post.id, has_hashtag = post.hashtag.is_some(), "Post created");

        Ok(post)
    }

    /// Delete the post addressed by `id` and return it.
    pub async fn delete(&self, id: Option<&str>) -> Result<Post, DomainError> {
        let id = validation::parse_post_id(id)?;

        let deleted = self.repo.delete(id).await?.ok_or(DomainError::NotFound {
            entity_type: "Post",
            id,
        })?;
        tracing::debug!(post_id = %id, "Post deleted");

        Ok(deleted)
    }
}
