//! Use-case layer sitting between the HTTP handlers and the document store.

mod post_service;

pub use post_service::PostService;
