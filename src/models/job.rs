//! Job board model.

use serde::{Deserialize, Serialize};

/// Employment type of an opening.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum JobType {
    #[serde(rename = "Full-time")]
    FullTime,
    Internship,
    Clerkship,
    Contract,
}

/// Practice area of an opening.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum JobCategory {
    Litigation,
    Corporate,
    Academic,
    Judiciary,
}

/// A job or internship posted to the board.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JobOpening {
    pub id: String,
    pub title: String,
    pub organization: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub category: JobCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    pub deadline: String,
    pub description: String,
    pub posted_at: String,
}
