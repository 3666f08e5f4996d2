use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{NewPost, Post, PostPatch};
use crate::error::DomainError;
use crate::ports::PostStore;

const ENTITY: &str = "Post";

/// Stateless CRUD service over the post collection.
///
/// Cloning is cheap; all clones share the same store.
#[derive(Clone)]
pub struct PostService {
    store: Arc<dyn PostStore>,
}

impl PostService {
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn PostStore> {
        &self.store
    }

    /// Every stored post, unpaginated.
    pub async fn list(&self) -> Result<Vec<Post>, DomainError> {
        let posts = self.store.find_all().await?;
        tracing::debug!(count = posts.len(), "Listed posts");
        Ok(posts)
    }

    /// Store a new post and return it as persisted.
    pub async fn create(&self, new: NewPost) -> Result<Post, DomainError> {
        new.validate()?;

        let id = self
            .store
            .insert_many(vec![new])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::Internal("store assigned no id".to_string()))?;

        let post = self.store.find_by_id(id).await?.ok_or_else(|| {
            DomainError::Internal(format!("post {id} missing right after insert"))
        })?;

        tracing::info!(post_id = %post.id, "Post created");
        Ok(post)
    }

    /// Overwrite the mutable fields of the post at `path_id`.
    ///
    /// `body_id`, when present, must equal `path_id`.
    pub async fn replace(
        &self,
        path_id: &str,
        body_id: Option<&str>,
        patch: PostPatch,
    ) -> Result<Post, DomainError> {
        if let Some(body_id) = body_id {
            if body_id != path_id {
                return Err(DomainError::Validation(format!(
                    "payload id {body_id} does not match path id {path_id}"
                )));
            }
        }
        patch.validate()?;

        let not_found = || DomainError::NotFound {
            entity_type: ENTITY,
            id: path_id.to_string(),
        };
        let id = Uuid::parse_str(path_id).map_err(|_| not_found())?;

        let post = self.store.update(id, patch).await?.ok_or_else(not_found)?;

        tracing::info!(post_id = %post.id, "Post replaced");
        Ok(post)
    }

    /// Remove the post at `id`. Unknown ids are a successful no-op.
    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let Ok(uuid) = Uuid::parse_str(id) else {
            tracing::debug!(post_id = %id, "Delete of non-uuid id ignored");
            return Ok(());
        };

        let removed = self.store.delete_by_id(uuid).await?;
        if removed == 0 {
            tracing::debug!(post_id = %uuid, "Delete matched no post");
        } else {
            tracing::info!(post_id = %uuid, "Post deleted");
        }
        Ok(())
    }
}
