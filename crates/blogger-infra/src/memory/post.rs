//! In-memory post repository.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blogger_core::domain::Post;
use blogger_core::error::RepoError;
use blogger_core::ports::{BaseRepository, PostRepository};

/// Post repository backed by a vector behind an async RwLock.
///
/// Data is lost on process restart.
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, Uuid> for InMemoryPostRepository {
    async fn save(&self, entity: Post) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;
        posts.push(entity.clone());
        tracing::debug!(post_id = %entity.id, total = posts.len(), "Stored post in memory");
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let mut posts = self.posts.write().await;
        let removed = posts
            .iter()
            .position(|p| p.id == id)
            .map(|index| posts.remove(index));
        Ok(removed)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_all_newest_first(&self) -> Result<Vec<Post>, RepoError> {
        let posts = self.posts.read().await;

        // Reverse first so posts sharing a timestamp keep newest-inserted first
        // through the stable sort.
        let mut sorted: Vec<Post> = posts.iter().rev().cloned().collect();
        sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(sorted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn post_at(text: &str, minutes_ago: i64) -> Post {
        let mut post = Post::new(text.to_string(), None);
        post.created_at = Utc::now() - Duration::minutes(minutes_ago);
        post
    }

    #[tokio::test]
    async fn test_save_and_list() {
        let repo = InMemoryPostRepository::new();
        assert!(repo.find_all_newest_first().await.unwrap().is_empty());

        let saved = repo.save(post_at("hello", 0)).await.unwrap();
        assert_eq!(repo.find_all_newest_first().await.unwrap(), vec![saved]);
    }

    #[tokio::test]
    async fn test_list_orders_by_creation_date() {
        let repo = InMemoryPostRepository::new();
        let old = repo.save(post_at("old", 10)).await.unwrap();
        let new = repo.save(post_at("new", 1)).await.unwrap();
        let middle = repo.save(post_at("middle", 5)).await.unwrap();

        let texts: Vec<String> = repo
            .find_all_newest_first()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.text)
            .collect();
        assert_eq!(texts, vec![new.text, middle.text, old.text]);
    }

    #[tokio::test]
    async fn test_same_timestamp_lists_last_saved_first() {
        let repo = InMemoryPostRepository::new();
        let first = post_at("first", 0);
        let mut second = Post::new("second".to_string(), None);
        second.created_at = first.created_at;

        repo.save(first).await.unwrap();
        repo.save(second).await.unwrap();

        let listed = repo.find_all_newest_first().await.unwrap();
        assert_eq!(listed[0].text, "second");
        assert_eq!(listed[1].text, "first");
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryPostRepository::new();
        let keep = repo.save(post_at("keep", 2)).await.unwrap();
        let drop = repo.save(post_at("drop", 1)).await.unwrap();

        assert_eq!(repo.delete(drop.id).await.unwrap(), Some(drop.clone()));
        assert_eq!(repo.delete(drop.id).await.unwrap(), None);
        assert_eq!(repo.find_all_newest_first().await.unwrap(), vec![keep]);
    }
}
