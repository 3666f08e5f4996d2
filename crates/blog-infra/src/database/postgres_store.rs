//! PostgreSQL post store.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DbConn, DbErr, EntityTrait, IntoActiveModel, PaginatorTrait, QueryOrder, Set,
};
use uuid::Uuid;

use blog_core::domain::{NewPost, Post, PostPatch};
use blog_core::error::RepoError;
use blog_core::ports::PostStore;

use super::entity::post::{self, Entity as PostEntity};

/// Post store backed by the `posts` table.
pub struct PostgresPostStore {
    db: DbConn,
}

impl PostgresPostStore {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn map_db_err(err: DbErr) -> RepoError {
    match &err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(err.to_string()),
        _ => RepoError::Query(err.to_string()),
    }
}

#[async_trait]
impl PostStore for PostgresPostStore {
    async fn insert_many(&self, posts: Vec<NewPost>) -> Result<Vec<Uuid>, RepoError> {
        if posts.is_empty() {
            return Ok(Vec::new());
        }

        let records: Vec<Post> = posts.into_iter().map(Post::assign).collect();
        let ids = records.iter().map(|p| p.id).collect::<Vec<_>>();
        let models = records.into_iter().map(post::ActiveModel::from);

        PostEntity::insert_many(models)
            .exec_without_returning(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(inserted = ids.len(), "Posts inserted");
        Ok(ids)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let result = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn find_one(&self) -> Result<Option<Post>, RepoError> {
        let result = PostEntity::find()
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .order_by_asc(post::Column::Created)
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        PostEntity::find().count(&self.db).await.map_err(map_db_err)
    }

    async fn update(&self, id: Uuid, patch: PostPatch) -> Result<Option<Post>, RepoError> {
        let Some(model) = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let mut post = Post::from(model.clone());
        post.apply(patch);

        // id and created stay Unchanged so they are left out of the UPDATE.
        let mut active = model.into_active_model();
        active.title = Set(post.title);
        active.content = Set(post.content);
        active.author_first_name = Set(post.author.first_name);
        active.author_last_name = Set(post.author.last_name);

        // A concurrent delete between the find and the UPDATE leaves nothing to update.
        match active.update(&self.db).await {
            Ok(updated) => Ok(Some(updated.into())),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(map_db_err(e)),
        }
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<u64, RepoError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected)
    }

    async fn drop_all(&self) -> Result<(), RepoError> {
        let result = PostEntity::delete_many()
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(dropped = result.rows_affected, "Collection dropped");
        Ok(())
    }
}
