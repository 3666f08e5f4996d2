//! Data Transfer Objects - request/response types for the API.
//!
//! Request fields are optional at the serde level so that a missing field
//! becomes a validation message instead of a generic parse failure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Author name as sent by clients.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Request to create a post. `id` is assigned by the server and must be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<AuthorInput>,
}

impl CreatePostRequest {
    /// Collect every presence problem in the payload.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.id.is_some() {
            errors.push("id is assigned by the server and must not be supplied".to_string());
        }
        if self.title.is_none() {
            errors.push("title is required".to_string());
        }
        if self.content.is_none() {
            errors.push("content is required".to_string());
        }
        match &self.author {
            None => errors.push("author is required".to_string()),
            Some(author) => {
                if author.first_name.is_none() {
                    errors.push("author.firstName is required".to_string());
                }
                if author.last_name.is_none() {
                    errors.push("author.lastName is required".to_string());
                }
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Full or partial replacement of a post's mutable fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReplacePostRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorInput>,
}

/// Projected post: the author is collapsed into a single display string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created: DateTime<Utc>,
}
