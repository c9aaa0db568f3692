//! In-memory collection store.
//!
//! The store is the source of truth while the process runs; nothing is persisted.

mod seed;

pub use seed::initial_collections;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::models::{Collections, CreatePostRequest, Post, Record};

struct StoreState {
    table: Collections,
    /// Last id handed out by `append_post`, in Unix milliseconds
    last_post_id: i64,
}

/// Process-wide collections served over the REST API.
pub struct CollectionStore {
    state: RwLock<StoreState>,
}

impl CollectionStore {
    pub fn new(table: Collections) -> Self {
        Self {
            state: RwLock::new(StoreState {
                table,
                last_post_id: 0,
            }),
        }
    }

    /// Store populated with the launch dataset.
    pub fn seeded() -> Self {
        Self::new(initial_collections())
    }

    /// List a whole collection in insertion order.
    pub async fn list<T: Record>(&self) -> Vec<T> {
        self.state.read().await.table.list::<T>()
    }

    /// Append a post to the head of the feed.
    ///
    /// Appends are serialized by the write lock, so ids stay unique and strictly
    /// increasing even when several requests race.
    pub async fn append_post(&self, draft: CreatePostRequest) -> Post {
        let mut state = self.state.write().await;

        let id = next_post_id(state.last_post_id, Utc::now().timestamp_millis());
        state.last_post_id = id;

        let post = draft.into_post(id.to_string());
        state.table.prepend_post(post.clone());

        tracing::debug!(post_id = %post.id, "Appended post");
        post
    }
}

/// Time-derived id that never repeats or goes backwards.
fn next_post_id(last: i64, now_millis: i64) -> i64 {
    now_millis.max(last + 1)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use super::*;
    use crate::models::{CourtHearing, Member, UserRole};

    fn draft(content: &str) -> CreatePostRequest {
        CreatePostRequest {
            author: "A".to_string(),
            role: UserRole::Advocate,
            content: content.to_string(),
            tags: vec!["X".to_string()],
        }
    }

    #[test]
    fn test_next_post_id_is_monotonic() {
        assert_eq!(next_post_id(0, 1_700_000_000_000), 1_700_000_000_000);
        assert_eq!(next_post_id(1_700_000_000_000, 1_700_000_000_000), 1_700_000_000_001);
        // Clock stepping backwards still yields a fresh id
        assert_eq!(next_post_id(1_700_000_000_005, 1_699_999_999_000), 1_700_000_000_006);
    }

    #[tokio::test]
    async fn test_seeded_collections() {
        let store = CollectionStore::seeded();

        assert_eq!(store.list::<Post>().await.len(), 1);
        assert_eq!(store.list::<Member>().await.len(), 4);
        assert_eq!(store.list::<CourtHearing>().await.len(), 1);
    }

    #[tokio::test]
    async fn test_append_prepends_with_generated_fields() {
        let store = CollectionStore::seeded();
        let seed_id = store.list::<Post>().await[0].id.clone();

        let created = store.append_post(draft("C")).await;
        assert!(!created.id.is_empty());
        assert_eq!(created.likes, 0);
        assert_eq!(created.comments, 0);
        assert_eq!(created.timestamp, "Just now");

        let ids: Vec<_> = store.list::<Post>().await.into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![created.id, seed_id]);
    }

    #[tokio::test]
    async fn test_concurrent_appends_get_unique_ids() {
        let store = Arc::new(CollectionStore::new(Collections::default()));

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.append_post(draft(&format!("post {}", i))).await })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            ids.insert(handle.await.unwrap().id);
        }
        assert_eq!(ids.len(), 32);

        // Newest first means ids descend down the feed
        let feed: Vec<i64> = store
            .list::<Post>()
            .await
            .iter()
            .map(|p| p.id.parse().unwrap())
            .collect();
        assert!(feed.windows(2).all(|w| w[0] > w[1]));
    }
}
