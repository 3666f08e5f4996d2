//! # Blog Infrastructure
//!
//! Concrete implementations of the `PostStore` port defined in `blog-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL document store via SeaORM

pub mod database;
pub mod store;

pub use database::DatabaseConfig;
pub use store::InMemoryPostStore;

#[cfg(feature = "postgres")]
pub use database::PostgresPostStore;
