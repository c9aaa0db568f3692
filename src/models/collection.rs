//! Collection identifiers and the typed table shared by both data sources.

use std::fmt;

use serde::{de::DeserializeOwned, Serialize};

use super::{BlogEntry, CourtHearing, JobOpening, LegalNews, Member, Post};

/// One of the six named collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Posts,
    Members,
    Jobs,
    Hearings,
    News,
    Blogs,
}

impl Collection {
    pub const ALL: [Collection; 6] = [
        Collection::Posts,
        Collection::Members,
        Collection::Jobs,
        Collection::Hearings,
        Collection::News,
        Collection::Blogs,
    ];

    /// Path segment under the API prefix.
    pub fn path(&self) -> &'static str {
        match self {
            Collection::Posts => "posts",
            Collection::Members => "members",
            Collection::Jobs => "jobs",
            Collection::Hearings => "hearings",
            Collection::News => "news",
            Collection::Blogs => "blogs",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.path())
    }
}

/// A record kind bound to exactly one collection.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const COLLECTION: Collection;

    /// The rows of this kind held by a table, in source order.
    fn rows(table: &Collections) -> &[Self];
}

macro_rules! impl_record {
    ($ty:ty, $variant:ident, $field:ident) => {
        impl Record for $ty {
            const COLLECTION: Collection = Collection::$variant;

            fn rows(table: &Collections) -> &[Self] {
                &table.$field
            }
        }
    };
}

impl_record!(Post, Posts, posts);
impl_record!(Member, Members, members);
impl_record!(JobOpening, Jobs, jobs);
impl_record!(CourtHearing, Hearings, hearings);
impl_record!(LegalNews, News, news);
impl_record!(BlogEntry, Blogs, blogs);

/// One ordered vector per record kind.
#[derive(Debug, Clone, Default)]
pub struct Collections {
    pub posts: Vec<Post>,
    pub members: Vec<Member>,
    pub jobs: Vec<JobOpening>,
    pub hearings: Vec<CourtHearing>,
    pub news: Vec<LegalNews>,
    pub blogs: Vec<BlogEntry>,
}

impl Collections {
    /// Snapshot of a whole collection.
    pub fn list<T: Record>(&self) -> Vec<T> {
        T::rows(self).to_vec()
    }

    /// Insert a post at the head of the feed (most recent first).
    pub fn prepend_post(&mut self, post: Post) {
        self.posts.insert(0, post);
    }
}
