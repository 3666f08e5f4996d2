use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::DomainError;

/// Two-part author name as it is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Display form used on the wire: `"{first_name} {last_name}"`.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Post entity - a stored blog post.
///
/// `id` and `created` are assigned by the store and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: Author,
    pub created: DateTime<Utc>,
}

impl Post {
    /// Materialize a new record with a fresh id and creation time.
    ///
    /// Only store implementations call this; clients never pick ids.
    pub fn assign(new: NewPost) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: new.title,
            content: new.content,
            author: new.author,
            created: Utc::now(),
        }
    }

    /// Overwrite the mutable fields present in `patch`.
    pub fn apply(&mut self, patch: PostPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(first_name) = patch.author.first_name {
            self.author.first_name = first_name;
        }
        if let Some(last_name) = patch.author.last_name {
            self.author.last_name = last_name;
        }
    }
}

/// A post that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: Author,
}

impl NewPost {
    pub fn new(title: impl Into<String>, content: impl Into<String>, author: Author) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author,
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        require_text("title", &self.title)?;
        require_text("author.firstName", &self.author.first_name)?;
        require_text("author.lastName", &self.author.last_name)
    }
}

/// Replacement values for the mutable fields of a post. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: AuthorPatch,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl PostPatch {
    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(title) = &self.title {
            require_text("title", title)?;
        }
        if let Some(first_name) = &self.author.first_name {
            require_text("author.firstName", first_name)?;
        }
        if let Some(last_name) = &self.author.last_name {
            require_text("author.lastName", last_name)?;
        }
        Ok(())
    }
}

fn require_text(field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!("{field} must not be blank")));
    }
    Ok(())
}
