//! Post records as handed over by the fetcher.

use serde::{Deserialize, Serialize};

/// Engagement counters attached to a post.
///
/// Informational only; they do not influence scoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engagement {
    #[serde(default, alias = "like_count")]
    pub likes: u64,
    #[serde(default, alias = "repost_count")]
    pub reposts: u64,
    #[serde(default, alias = "reply_count")]
    pub replies: u64,
}

/// A single already-fetched post.
///
/// Field aliases accept the fetcher's record layout (`created_at`, `metrics`)
/// so raw records deserialize directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Stable identifier (e.g. an AT-URI). Used to drop duplicates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub text: String,
    #[serde(default, alias = "metrics", skip_serializing_if = "Option::is_none")]
    pub engagement: Option<Engagement>,
    #[serde(default, alias = "created_at", skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl Post {
    /// Create a post with only its text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: None,
            text: text.into(),
            engagement: None,
            timestamp: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_engagement(mut self, engagement: Engagement) -> Self {
        self.engagement = Some(engagement);
        self
    }

    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }
}

impl From<&str> for Post {
    fn from(text: &str) -> Self {
        Post::new(text)
    }
}

impl From<String> for Post {
    fn from(text: String) -> Self {
        Post::new(text)
    }
}
