//! Court diary model.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum HearingPriority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum HearingStatus {
    Pending,
    Adjourned,
    Disposed,
}

/// A listed hearing in the court diary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CourtHearing {
    pub id: String,
    pub case_title: String,
    pub case_number: String,
    pub court: String,
    pub date: String,
    pub priority: HearingPriority,
    pub status: HearingStatus,
}
