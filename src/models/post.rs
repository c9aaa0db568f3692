//! Community feed post model.

use serde::{Deserialize, Serialize};

use super::UserRole;

/// Timestamp label given to every freshly appended post.
pub const FRESH_POST_LABEL: &str = "Just now";

/// A post on the community feed.
///
/// `likes` and `comments` are display-only counters; nothing increments them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub author: String,
    pub role: UserRole,
    pub content: String,
    /// Human-readable label, not a machine timestamp
    pub timestamp: String,
    pub likes: u32,
    pub comments: u32,
    pub tags: Vec<String>,
}

/// Request body for creating a new post.
///
/// The serving store fills in id, timestamp label and counters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub author: String,
    pub role: UserRole,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl CreatePostRequest {
    /// Build the stored post from this draft with the given id.
    pub fn into_post(self, id: String) -> Post {
        Post {
            id,
            author: self.author,
            role: self.role,
            content: self.content,
            timestamp: FRESH_POST_LABEL.to_string(),
            likes: 0,
            comments: 0,
            tags: self.tags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_post_zeroes_counters() {
        let draft = CreatePostRequest {
            author: "A".to_string(),
            role: UserRole::Advocate,
            content: "C".to_string(),
            tags: vec!["X".to_string()],
        };

        let post = draft.into_post("42".to_string());
        assert_eq!(post.id, "42");
        assert_eq!(post.likes, 0);
        assert_eq!(post.comments, 0);
        assert_eq!(post.timestamp, FRESH_POST_LABEL);
        assert_eq!(post.tags, vec!["X".to_string()]);
    }

    #[test]
    fn test_draft_tags_default_to_empty() {
        let draft: CreatePostRequest =
            serde_json::from_str(r#"{"author":"A","role":"Student","content":"C"}"#).unwrap();
        assert!(draft.tags.is_empty());
    }

    #[test]
    fn test_draft_rejects_unknown_role() {
        let result: Result<CreatePostRequest, _> =
            serde_json::from_str(r#"{"author":"A","role":"Judge","content":"C","tags":[]}"#);
        assert!(result.is_err());
    }
}
