//! Blog post resource handlers.

use actix_web::{HttpResponse, web};

use blog_core::domain::{Author, AuthorPatch, NewPost, Post, PostPatch};
use blog_shared::dto::{AuthorInput, CreatePostRequest, PostResponse, ReplacePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Wire projection of a stored post.
pub fn project(post: Post) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        author: post.author.display_name(),
        title: post.title,
        content: post.content,
        created: post.created,
    }
}

/// GET /blogposts
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    let body: Vec<PostResponse> = posts.into_iter().map(project).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// POST /blogposts
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    req.validate().map_err(AppError::Validation)?;

    let CreatePostRequest {
        title: Some(title),
        content: Some(content),
        author:
            Some(AuthorInput {
                first_name: Some(first_name),
                last_name: Some(last_name),
            }),
        ..
    } = req
    else {
        return Err(AppError::Internal("validated payload is incomplete".to_string()));
    };

    let post = state
        .posts
        .create(NewPost::new(title, content, Author::new(first_name, last_name)))
        .await?;

    Ok(HttpResponse::Created().json(project(post)))
}

/// PUT /blogposts/{id}
pub async fn replace(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<ReplacePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    let author = req.author.unwrap_or_default();
    let patch = PostPatch {
        title: req.title,
        content: req.content,
        author: AuthorPatch {
            first_name: author.first_name,
            last_name: author.last_name,
        },
    };

    let post = state.posts.replace(&id, req.id.as_deref(), patch).await?;

    Ok(HttpResponse::Ok().json(project(post)))
}

/// DELETE /blogposts/{id}
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    state.posts.delete(&path.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}
