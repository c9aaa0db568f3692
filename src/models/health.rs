//! Health report served by the liveness probe.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const CONNECTED_STATUS: &str = "connected";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub status: String,
    #[serde(default)]
    pub environment: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl HealthReport {
    pub fn connected(environment: &str) -> Self {
        Self {
            status: CONNECTED_STATUS.to_string(),
            environment: environment.to_string(),
            timestamp: Some(Utc::now()),
        }
    }

    /// Report for a store that answered 2xx without a body we understand.
    pub fn acknowledged() -> Self {
        Self {
            status: CONNECTED_STATUS.to_string(),
            environment: String::new(),
            timestamp: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_and_timestamp_are_optional() {
        let report: HealthReport = serde_json::from_str(r#"{"status":"connected"}"#).unwrap();
        assert_eq!(report.status, CONNECTED_STATUS);
        assert!(report.environment.is_empty());
        assert!(report.timestamp.is_none());
    }

    #[test]
    fn test_connected_report_carries_timestamp() {
        let value = serde_json::to_value(HealthReport::connected("test")).unwrap();
        assert_eq!(value["environment"], "test");
        assert!(value["timestamp"].is_string());
    }
}
