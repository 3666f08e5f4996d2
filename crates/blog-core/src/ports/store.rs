use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{NewPost, Post, PostPatch};
use crate::error::RepoError;

/// Document store for blog posts.
///
/// A single implementation is shared by the HTTP service and by anything that
/// seeds or inspects the collection directly. Each method is expected to be
/// atomic on its own; callers get no cross-call transactions.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Insert every record, assigning ids and creation times.
    /// Returns the assigned ids in input order.
    async fn insert_many(&self, posts: Vec<NewPost>) -> Result<Vec<Uuid>, RepoError>;

    /// Find a post by its id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError>;

    /// Any one post, if the collection is not empty.
    async fn find_one(&self) -> Result<Option<Post>, RepoError>;

    /// All posts, oldest first.
    async fn find_all(&self) -> Result<Vec<Post>, RepoError>;

    async fn count(&self) -> Result<u64, RepoError>;

    /// Apply `patch` to the post with `id`. `Ok(None)` if no such post exists.
    async fn update(&self, id: Uuid, patch: PostPatch) -> Result<Option<Post>, RepoError>;

    /// Delete by id, returning the number of removed documents (0 or 1).
    async fn delete_by_id(&self, id: Uuid) -> Result<u64, RepoError>;

    /// Remove every document in the collection.
    async fn drop_all(&self) -> Result<(), RepoError>;
}
