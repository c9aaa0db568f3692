//! Legal news and blog models.

use serde::{Deserialize, Serialize};

use super::UserRole;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum NewsCategory {
    Judiciary,
    Legislation,
    International,
    Corporate,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum NewsImportance {
    Breaking,
    Trending,
    Regular,
}

/// A legal news headline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LegalNews {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub source: String,
    pub timestamp: String,
    pub category: NewsCategory,
    pub importance: NewsImportance,
}

/// A long-form article in the insights section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlogEntry {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub author: String,
    pub author_role: UserRole,
    pub date: String,
    pub read_time: String,
    pub cover_image: String,
    /// Free-form, unlike news categories
    pub category: String,
    pub is_verified: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blog_entry_uses_camel_case() {
        let json = r#"{
            "id": "b1",
            "title": "T",
            "excerpt": "E",
            "author": "Prof. Ved Prakash",
            "authorRole": "Professor",
            "date": "Oct 22, 2024",
            "readTime": "12 min read",
            "coverImage": "https://example.com/c.jpg",
            "category": "Criminal Law",
            "isVerified": true
        }"#;

        let blog: BlogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(blog.author_role, UserRole::Professor);
        assert_eq!(blog.read_time, "12 min read");
        assert!(blog.is_verified);
    }
}
