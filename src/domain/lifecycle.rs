//! Content lifecycle events raised by the publishing platform.

use std::fmt;
use std::str::FromStr;

/// Post status as reported by the platform when content is saved or deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentStatus {
    Draft,
    Publish,
    Trash,
    Other(String),
}

impl ContentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ContentStatus::Draft => "draft",
            ContentStatus::Publish => "publish",
            ContentStatus::Trash => "trash",
            ContentStatus::Other(value) => value,
        }
    }
}

impl FromStr for ContentStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "draft" => ContentStatus::Draft,
            "publish" => ContentStatus::Publish,
            "trash" => ContentStatus::Trash,
            other => ContentStatus::Other(other.to_string()),
        })
    }
}

impl fmt::Display for ContentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A save or delete of a piece of content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifecycleEvent {
    pub content_id: u64,
    pub status: ContentStatus,
    pub is_revision: bool,
    pub is_autosave: bool,
}

impl LifecycleEvent {
    /// Only published or trashed content that is not a revision or autosave
    /// triggers workflows.
    pub fn should_trigger(&self) -> bool {
        if self.is_revision || self.is_autosave {
            return false;
        }
        matches!(self.status, ContentStatus::Publish | ContentStatus::Trash)
    }
}
