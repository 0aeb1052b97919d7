//! Post endpoints.

use actix_web::{HttpResponse, web};

use blogger_core::domain::Post;
use blogger_shared::ApiResponse;
use blogger_shared::dto::{CreatePostRequest, DeletePostQuery, PostList, PostView, SinglePost};

use crate::middleware::error::AppResult;
use crate::state::AppState;

fn to_view(post: Post) -> PostView {
    PostView {
        id: post.id.to_string(),
        post: post.text,
        creation_date: post.created_at,
        hashtag: post.hashtag,
    }
}

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(PostList {
        posts: posts.into_iter().map(to_view).collect(),
    })))
}

/// POST /post
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let post = state
        .posts
        .create(req.post.as_ref(), req.hashtag.as_ref())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(SinglePost {
        post: to_view(post),
    })))
}

/// DELETE /post?id=<id>
pub async fn delete_post(
    state: web::Data<AppState>,
    query: web::Query<DeletePostQuery>,
) -> AppResult<HttpResponse> {
    let post = state.posts.delete(query.id.as_deref()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(SinglePost {
        post: to_view(post),
    })))
}
