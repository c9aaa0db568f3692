//! Data models for the Vidhigya community application.
//!
//! Field names serialize to camelCase to match the web client's JSON contract.

mod collection;
mod health;
mod hearing;
mod job;
mod member;
mod news;
mod post;

pub use collection::*;
pub use health::*;
pub use hearing::*;
pub use job::*;
pub use member::*;
pub use news::*;
pub use post::*;
