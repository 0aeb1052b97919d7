use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity - a short text entry with an optional hashtag.
///
/// `text` and `hashtag` hold the stored (already escaped) values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub text: String,
    pub hashtag: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post with a fresh id, stamped with the current time.
    pub fn new(text: String, hashtag: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            hashtag,
            created_at: Utc::now(),
        }
    }
}
