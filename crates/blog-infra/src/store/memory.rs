//! In-memory post store - used when no database is configured and by the test harness.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::{NewPost, Post, PostPatch};
use blog_core::error::RepoError;
use blog_core::ports::PostStore;

/// In-memory collection kept in insertion order behind an async RwLock.
///
/// Every instance is its own isolated collection.
/// Note: Data is lost on process restart.
pub struct InMemoryPostStore {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn insert_many(&self, posts: Vec<NewPost>) -> Result<Vec<Uuid>, RepoError> {
        let mut store = self.posts.write().await;

        let ids = posts
            .into_iter()
            .map(|new| {
                let post = Post::assign(new);
                let id = post.id;
                store.push(post);
                id
            })
            .collect::<Vec<_>>();

        tracing::debug!(inserted = ids.len(), "Posts inserted");
        Ok(ids)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let store = self.posts.read().await;
        Ok(store.iter().find(|p| p.id == id).cloned())
    }

    async fn find_one(&self) -> Result<Option<Post>, RepoError> {
        let store = self.posts.read().await;
        Ok(store.first().cloned())
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.posts.read().await.clone())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.posts.read().await.len() as u64)
    }

    async fn update(&self, id: Uuid, patch: PostPatch) -> Result<Option<Post>, RepoError> {
        // Lookup and write happen under one lock so concurrent updates never interleave.
        let mut store = self.posts.write().await;

        let Some(post) = store.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        post.apply(patch);

        Ok(Some(post.clone()))
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<u64, RepoError> {
        let mut store = self.posts.write().await;
        let before = store.len();
        store.retain(|p| p.id != id);
        Ok((before - store.len()) as u64)
    }

    async fn drop_all(&self) -> Result<(), RepoError> {
        let mut store = self.posts.write().await;
        let dropped = store.len();
        store.clear();
        tracing::debug!(dropped, "Collection dropped");
        Ok(())
    }
}
