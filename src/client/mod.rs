//! Resilient data access for presentation code.
//!
//! A [`DataService`] is one client session. It talks to the remote collection
//! store while that works and switches to a session-local [`LocalCatalog`] the
//! first time a remote call fails. Data operations never return an error: a
//! failure is absorbed and answered from the catalog instead, and every result
//! says which source served it.
//!
//! Once degraded, the session stays on the catalog until [`DataService::check_health`]
//! succeeds. Posts appended while degraded are never sent to the remote store.

mod catalog;
mod remote;

pub use catalog::{LocalCatalog, OFFLINE_NOTICE};
pub use remote::{RemoteError, RemoteStore};

use crate::config::ClientConfig;
use crate::models::{
    BlogEntry, CourtHearing, CreatePostRequest, HealthReport, JobOpening, LegalNews, Member, Post,
    Record,
};

/// Which source the session currently treats as authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// No call has completed yet
    Undetermined,
    Remote,
    Fallback,
}

/// A result tagged with the source that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum Sourced<T> {
    Remote(T),
    Fallback(T),
}

impl<T> Sourced<T> {
    pub fn is_remote(&self) -> bool {
        matches!(self, Sourced::Remote(_))
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Sourced::Fallback(_))
    }

    pub fn data(&self) -> &T {
        match self {
            Sourced::Remote(data) | Sourced::Fallback(data) => data,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            Sourced::Remote(data) | Sourced::Fallback(data) => data,
        }
    }
}

/// Outcome of a health probe.
#[derive(Debug, Clone, PartialEq)]
pub enum HealthStatus {
    Connected(HealthReport),
    /// The remote store could not be reached; data is being simulated locally
    Simulated,
}

impl HealthStatus {
    pub const SIMULATED: &'static str = "simulated";

    /// Tag for a connection indicator.
    pub fn status(&self) -> &str {
        match self {
            HealthStatus::Connected(report) => &report.status,
            HealthStatus::Simulated => Self::SIMULATED,
        }
    }
}

/// One client session over the remote store and its offline fallback.
pub struct DataService {
    remote: RemoteStore,
    local: LocalCatalog,
    mode: Mode,
}

impl DataService {
    pub fn new(config: &ClientConfig) -> Result<Self, RemoteError> {
        Ok(Self {
            remote: RemoteStore::new(config)?,
            local: LocalCatalog::default(),
            mode: Mode::Undetermined,
        })
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            tracing::info!(from = ?self.mode, to = ?mode, "Data source changed");
            self.mode = mode;
        }
    }

    fn degrade(&mut self, operation: &str, err: &RemoteError) {
        tracing::warn!(operation, error = %err, "Remote store unavailable, using local catalog");
        self.set_mode(Mode::Fallback);
    }

    /// Probe the remote store. The only call that can leave fallback mode.
    pub async fn check_health(&mut self) -> HealthStatus {
        match self.remote.health().await {
            Ok(report) => {
                self.set_mode(Mode::Remote);
                HealthStatus::Connected(report)
            }
            Err(err) => {
                self.degrade("health", &err);
                HealthStatus::Simulated
            }
        }
    }

    /// Read a whole collection from whichever source is active.
    pub async fn list<T: Record>(&mut self) -> Sourced<Vec<T>> {
        if self.mode != Mode::Fallback {
            match self.remote.list::<T>().await {
                Ok(rows) => {
                    self.set_mode(Mode::Remote);
                    return Sourced::Remote(rows);
                }
                Err(err) => self.degrade(T::COLLECTION.path(), &err),
            }
        }

        Sourced::Fallback(self.local.list::<T>())
    }

    pub async fn get_posts(&mut self) -> Sourced<Vec<Post>> {
        self.list::<Post>().await
    }

    pub async fn get_members(&mut self) -> Sourced<Vec<Member>> {
        self.list::<Member>().await
    }

    pub async fn get_jobs(&mut self) -> Sourced<Vec<JobOpening>> {
        self.list::<JobOpening>().await
    }

    pub async fn get_hearings(&mut self) -> Sourced<Vec<CourtHearing>> {
        self.list::<CourtHearing>().await
    }

    pub async fn get_news(&mut self) -> Sourced<Vec<LegalNews>> {
        self.list::<LegalNews>().await
    }

    pub async fn get_blogs(&mut self) -> Sourced<Vec<BlogEntry>> {
        self.list::<BlogEntry>().await
    }

    /// Publish a post. A failed remote append is replayed against the local catalog.
    pub async fn add_post(&mut self, draft: CreatePostRequest) -> Sourced<Post> {
        if self.mode != Mode::Fallback {
            match self.remote.append_post(&draft).await {
                Ok(post) => {
                    self.set_mode(Mode::Remote);
                    return Sourced::Remote(post);
                }
                Err(err) => self.degrade("add_post", &err),
            }
        }

        Sourced::Fallback(self.local.append_post(draft))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sourced_accessors() {
        let remote = Sourced::Remote(vec![1, 2]);
        assert!(remote.is_remote());
        assert_eq!(remote.data().len(), 2);

        let fallback = Sourced::Fallback("seed");
        assert!(fallback.is_fallback());
        assert_eq!(fallback.into_inner(), "seed");
    }

    #[test]
    fn test_simulated_status_tag() {
        assert_eq!(HealthStatus::Simulated.status(), "simulated");
    }

    #[test]
    fn test_new_session_is_undetermined() {
        let service = DataService::new(&ClientConfig::default()).unwrap();
        assert_eq!(service.mode(), Mode::Undetermined);
    }
}
