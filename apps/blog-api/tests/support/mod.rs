//! Live-server harness for the `/blogposts` resource.
//!
//! The harness owns one server and one isolated in-memory store for its whole
//! lifetime. Each scenario runs between a seeding step and an unconditional
//! drop of the collection:
//!
//! ```text
//! start -> (seed -> scenario -> drop)* -> stop
//! ```
//!
//! The server and the harness share the same `Arc<dyn PostStore>`, so direct
//! store reads observe exactly what the service persisted.
#![allow(dead_code)]

pub mod stores;

pub use fixtures::{DEFAULT_FIXTURE_SEED, FixtureGenerator};

use std::any::Any;
use std::future::Future;
use std::net::TcpListener;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use actix_web::dev::ServerHandle;
use futures::FutureExt;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use blog_api::AppState;
use blog_core::domain::Post;
use blog_core::ports::PostStore;
use blog_infra::InMemoryPostStore;

/// Posts inserted before every scenario.
pub const SEED_COUNT: usize = 10;

pub struct TestHarness {
    store: Arc<dyn PostStore>,
    base_url: String,
    client: reqwest::Client,
    server: ServerHandle,
    fixtures: FixtureGenerator,
}

impl TestHarness {
    /// Start a server over a fresh in-memory store. Must run inside an actix runtime.
    pub fn start() -> Self {
        Self::start_with_store(Arc::new(InMemoryPostStore::new()))
    }

    pub fn start_with_store(store: Arc<dyn PostStore>) -> Self {
        init_tracing();

        let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind test listener");
        let port = listener.local_addr().expect("listener has no address").port();

        let server = blog_api::run(listener, AppState::with_store(store.clone()), Some(1))
            .expect("failed to build test server");
        let handle = server.handle();
        actix_rt::spawn(server);

        Self {
            store,
            base_url: format!("http://127.0.0.1:{port}"),
            client: reqwest::Client::new(),
            server: handle,
            fixtures: FixtureGenerator::from_env(),
        }
    }

    pub fn store(&self) -> Arc<dyn PostStore> {
        self.store.clone()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Seed, run `body`, then drop the collection even if `body` panicked.
    ///
    /// A failed drop panics: later scenarios cannot trust the collection.
    /// If `body` panicked as well, its message is carried in the teardown panic.
    pub async fn scenario<F, Fut, T>(&mut self, name: &str, body: F) -> T
    where
        F: FnOnce(Scenario) -> Fut,
        Fut: Future<Output = T>,
    {
        let seeded = self.seed().await;
        tracing::info!(scenario = name, seeded = seeded.len(), "Scenario started");

        let ctx = Scenario {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            store: self.store.clone(),
            seeded,
        };
        let outcome = AssertUnwindSafe(body(ctx)).catch_unwind().await;

        let dropped = self.store.drop_all().await;

        match (outcome, dropped) {
            (Ok(value), Ok(())) => {
                tracing::info!(scenario = name, "Scenario torn down");
                value
            }
            (Err(panic), Ok(())) => std::panic::resume_unwind(panic),
            (Ok(_), Err(e)) => {
                panic!("teardown of scenario `{name}` failed, aborting suite: {e}")
            }
            (Err(panic), Err(e)) => panic!(
                "teardown of scenario `{name}` failed, aborting suite: {e}; \
                 the scenario had already panicked: {}",
                panic_message(&*panic)
            ),
        }
    }

    /// Stop the server gracefully.
    pub async fn stop(self) {
        self.server.stop(true).await;
    }

    async fn seed(&mut self) -> Vec<Post> {
        let batch = self.fixtures.posts(SEED_COUNT);
        let ids = self
            .store
            .insert_many(batch)
            .await
            .expect("failed to seed posts");

        let mut seeded = Vec::with_capacity(ids.len());
        for id in ids {
            let post = self
                .store
                .find_by_id(id)
                .await
                .expect("failed to read back seeded post")
                .expect("seeded post missing from store");
            seeded.push(post);
        }
        seeded
    }
}

/// Everything a scenario may touch, handed over by value.
pub struct Scenario {
    pub client: reqwest::Client,
    pub base_url: String,
    pub store: Arc<dyn PostStore>,
    /// Posts inserted for this scenario, in insertion order.
    pub seeded: Vec<Post>,
}

impl Scenario {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn list(&self) -> reqwest::Response {
        self.client
            .get(self.url("/blogposts"))
            .send()
            .await
            .expect("GET /blogposts failed")
    }

    pub async fn create(&self, body: &Value) -> reqwest::Response {
        self.client
            .post(self.url("/blogposts"))
            .json(body)
            .send()
            .await
            .expect("POST /blogposts failed")
    }

    pub async fn replace(&self, id: &str, body: &Value) -> reqwest::Response {
        self.client
            .put(self.url(&format!("/blogposts/{id}")))
            .json(body)
            .send()
            .await
            .expect("PUT /blogposts/{id} failed")
    }

    pub async fn delete(&self, id: &str) -> reqwest::Response {
        self.client
            .delete(self.url(&format!("/blogposts/{id}")))
            .send()
            .await
            .expect("DELETE /blogposts/{id} failed")
    }
}

/// Best-effort text of a panic payload.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| payload.downcast_ref::<&str>().map(|s| s.to_string()))
        .unwrap_or_default()
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // Several harnesses may start in one test binary; only the first install wins.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
