//! Offline seed catalog used when the remote store cannot be reached.

use crate::models::{
    BlogEntry, Collections, CreatePostRequest, JobCategory, JobOpening, JobType, LegalNews,
    Member, NewsCategory, NewsImportance, Post, Record, UserRole,
};

/// Content of the single seed post shown while running offline.
pub const OFFLINE_NOTICE: &str = "System: Running in local-first mode. Connect a Render Web \
                                  Service to enable cloud synchronization.";

/// Session-local stand-in for the remote store. Changes last until it is dropped.
#[derive(Debug, Clone)]
pub struct LocalCatalog {
    table: Collections,
}

impl Default for LocalCatalog {
    fn default() -> Self {
        Self {
            table: offline_collections(),
        }
    }
}

impl LocalCatalog {
    pub fn list<T: Record>(&self) -> Vec<T> {
        self.table.list::<T>()
    }

    pub fn append_post(&mut self, draft: CreatePostRequest) -> Post {
        let post = draft.into_post(uuid::Uuid::new_v4().to_string());
        self.table.prepend_post(post.clone());
        post
    }
}

fn offline_collections() -> Collections {
    Collections {
        posts: vec![Post {
            id: "mock-1".to_string(),
            author: "Vidhigya System".to_string(),
            role: UserRole::Advocate,
            content: OFFLINE_NOTICE.to_string(),
            timestamp: "System".to_string(),
            likes: 0,
            comments: 0,
            tags: vec!["System".to_string(), "Offline".to_string()],
        }],
        members: vec![
            Member {
                id: "m1".to_string(),
                name: "Adv. Yash Kumar".to_string(),
                role: UserRole::Advocate,
                institution: Some("Supreme Court".to_string()),
                specialization: Some(vec!["Litigation".to_string()]),
                avatar: "YK".to_string(),
                github_handle: None,
                is_github_connected: None,
            },
            Member {
                id: "m2".to_string(),
                name: "Prof. Ved Prakash".to_string(),
                role: UserRole::Professor,
                institution: Some("Faculty of Law".to_string()),
                specialization: Some(vec!["Constitutional".to_string()]),
                avatar: "VP".to_string(),
                github_handle: None,
                is_github_connected: None,
            },
        ],
        jobs: vec![JobOpening {
            id: "mj1".to_string(),
            title: "Legal Associate".to_string(),
            organization: "Local Chambers".to_string(),
            location: "New Delhi".to_string(),
            job_type: JobType::FullTime,
            category: JobCategory::Litigation,
            experience: None,
            salary: None,
            deadline: "Dec 2024".to_string(),
            description: "Simulated job data for local testing.".to_string(),
            posted_at: "Just now".to_string(),
        }],
        hearings: Vec::new(),
        news: vec![LegalNews {
            id: "mn1".to_string(),
            title: "Digital Courts Phase III launched".to_string(),
            summary: "New e-filing portal and virtual hearing rooms now live nationwide."
                .to_string(),
            source: "System News".to_string(),
            timestamp: "Today".to_string(),
            category: NewsCategory::Judiciary,
            importance: NewsImportance::Regular,
        }],
        blogs: vec![BlogEntry {
            id: "mb1".to_string(),
            title: "Ethics of AI in Legal Practice".to_string(),
            excerpt: "Exploring the boundary between assistance and unauthorized practice of law."
                .to_string(),
            author: "System Editor".to_string(),
            author_role: UserRole::Professor,
            date: "Oct 2024".to_string(),
            read_time: "5 min read".to_string(),
            cover_image: "https://images.unsplash.com/photo-1589829545856-d10d557cf95f?auto=format&fit=crop&q=80".to_string(),
            category: "Technology".to_string(),
            is_verified: true,
        }],
    }
}
