//! Feedback domain types.

use serde::Serialize;

use super::ValidationError;

/// Maximum length for a feedback message (64 KiB).
const MAX_MESSAGE_LEN: usize = 65536;

/// A stored feedback entry.
///
/// `id` is assigned by the store on insert, is immutable, and is never
/// reused after deletion. `is_read` only ever transitions false to true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct FeedbackRecord {
    pub id: i64,
    pub name: Option<String>,
    pub message: String,
    pub is_read: bool,
}

impl FeedbackRecord {
    /// Name as shown to reviewers; anonymous entries read "no name".
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("no name")
    }
}

/// Listing order for feedback queries, always keyed on id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOrder {
    NewestFirst,
    OldestFirst,
}

/// Validated message body: non-empty, at most 64 KiB.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBody(String);

impl MessageBody {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "message" });
        }
        if s.len() > MAX_MESSAGE_LEN {
            return Err(ValidationError::TooLong {
                field: "message",
                max: MAX_MESSAGE_LEN,
            });
        }
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for MessageBody {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Normalize a submitted name: blank input becomes anonymous, anything else
/// is kept trimmed.
pub fn normalize_name(name: Option<String>) -> Option<String> {
    name.and_then(|n| {
        let trimmed = n.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_owned())
        }
    })
}
