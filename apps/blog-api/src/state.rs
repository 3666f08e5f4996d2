//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::PostService;
use blog_core::ports::PostStore;
use blog_infra::{DatabaseConfig, InMemoryPostStore};

#[cfg(feature = "postgres")]
use anyhow::Context;
#[cfg(feature = "postgres")]
use blog_infra::PostgresPostStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
}

impl AppState {
    /// Build state around an already constructed store.
    pub fn with_store(store: Arc<dyn PostStore>) -> Self {
        Self {
            posts: PostService::new(store),
        }
    }

    /// Build the application state with the store selected by configuration.
    ///
    /// A configured database that cannot be reached is a startup failure.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> anyhow::Result<Self> {
        #[cfg(feature = "postgres")]
        let store: Arc<dyn PostStore> = match db_config {
            Some(config) => {
                let conn = blog_infra::database::connect(config)
                    .await
                    .context("failed to connect to the post database")?;
                Arc::new(PostgresPostStore::new(conn))
            }
            None => {
                tracing::warn!("DATABASE_URL not set. Running with the in-memory post store.");
                Arc::new(InMemoryPostStore::new())
            }
        };

        #[cfg(not(feature = "postgres"))]
        let store: Arc<dyn PostStore> = {
            if db_config.is_some() {
                tracing::warn!("DATABASE_URL ignored: built without the postgres feature");
            }
            tracing::info!("Running without postgres feature - using in-memory store");
            Arc::new(InMemoryPostStore::new())
        };

        tracing::info!("Application state initialized");

        Ok(Self::with_store(store))
    }
}
