//! Member model for the community directory.

use serde::{Deserialize, Serialize};

/// Professional role of a community member or author.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum UserRole {
    Student,
    Advocate,
    Professor,
    #[serde(rename = "Judicial Officer")]
    JudicialOfficer,
}

/// A registered member of the legal community.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub name: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialization: Option<Vec<String>>,
    /// Initials shown in place of a profile picture
    pub avatar: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_handle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_github_connected: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_judicial_officer_wire_name() {
        let json = serde_json::to_string(&UserRole::JudicialOfficer).unwrap();
        assert_eq!(json, "\"Judicial Officer\"");

        let role: UserRole = serde_json::from_str("\"Judicial Officer\"").unwrap();
        assert_eq!(role, UserRole::JudicialOfficer);
    }

    #[test]
    fn test_optional_fields_omitted() {
        let member = Member {
            id: "1".to_string(),
            name: "Yash Vardhan".to_string(),
            role: UserRole::Student,
            institution: None,
            specialization: None,
            avatar: "YV".to_string(),
            github_handle: None,
            is_github_connected: None,
        };

        let value = serde_json::to_value(&member).unwrap();
        assert!(value.get("institution").is_none());
        assert!(value.get("githubHandle").is_none());
        assert_eq!(value["role"], "Student");
    }
}
