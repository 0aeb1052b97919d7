//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /post`.
///
/// Fields are kept as raw JSON so that wrong types are reported as
/// validation errors rather than as decode failures.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub post: Option<Value>,
    #[serde(default)]
    pub hashtag: Option<Value>,
}

/// Query string of `DELETE /post`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeletePostQuery {
    pub id: Option<String>,
}

/// A post as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostView {
    #[serde(rename = "_id")]
    pub id: String,
    pub post: String,
    pub creation_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hashtag: Option<String>,
}

/// Payload of `GET /posts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostList {
    pub posts: Vec<PostView>,
}

/// Payload of `POST /post` and `DELETE /post`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SinglePost {
    pub post: PostView,
}
