//! Store doubles for failure-path tests.

use async_trait::async_trait;
use uuid::Uuid;

use blog_core::domain::{NewPost, Post, PostPatch};
use blog_core::error::RepoError;
use blog_core::ports::PostStore;
use blog_infra::InMemoryPostStore;

fn refused() -> RepoError {
    RepoError::Connection("connection refused".to_string())
}

/// Every call fails as if the database were down.
pub struct UnavailableStore;

#[async_trait]
impl PostStore for UnavailableStore {
    async fn insert_many(&self, _posts: Vec<NewPost>) -> Result<Vec<Uuid>, RepoError> {
        Err(refused())
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<Post>, RepoError> {
        Err(refused())
    }

    async fn find_one(&self) -> Result<Option<Post>, RepoError> {
        Err(refused())
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        Err(refused())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Err(refused())
    }

    async fn update(&self, _id: Uuid, _patch: PostPatch) -> Result<Option<Post>, RepoError> {
        Err(refused())
    }

    async fn delete_by_id(&self, _id: Uuid) -> Result<u64, RepoError> {
        Err(refused())
    }

    async fn drop_all(&self) -> Result<(), RepoError> {
        Err(refused())
    }
}

/// Behaves like the in-memory store except that dropping the collection fails.
#[derive(Default)]
pub struct UndroppableStore {
    inner: InMemoryPostStore,
}

#[async_trait]
impl PostStore for UndroppableStore {
    async fn insert_many(&self, posts: Vec<NewPost>) -> Result<Vec<Uuid>, RepoError> {
        self.inner.insert_many(posts).await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        self.inner.find_by_id(id).await
    }

    async fn find_one(&self) -> Result<Option<Post>, RepoError> {
        self.inner.find_one().await
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        self.inner.find_all().await
    }

    async fn count(&self) -> Result<u64, RepoError> {
        self.inner.count().await
    }

    async fn update(&self, id: Uuid, patch: PostPatch) -> Result<Option<Post>, RepoError> {
        self.inner.update(id, patch).await
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<u64, RepoError> {
        self.inner.delete_by_id(id).await
    }

    async fn drop_all(&self) -> Result<(), RepoError> {
        Err(refused())
    }
}
