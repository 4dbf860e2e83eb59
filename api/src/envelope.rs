//! Response envelope shared by every endpoint
//!
//! `{ "success": bool, "message"?: string, "data"?: T, "timestamp"?: string }`.
//! Absent parts are omitted from the JSON rather than sent as `null`.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl<T> Envelope<T> {
    /// Successful response carrying a payload and a message
    pub fn with_data(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
            timestamp: None,
        }
    }

    /// Successful list response without a message
    pub fn list(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
            timestamp: None,
        }
    }
}

impl Envelope<()> {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
            timestamp: None,
        }
    }

    /// Successful status response stamped with a timestamp
    pub fn status(message: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
            timestamp: Some(timestamp.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_failure_omits_data() {
        let value = serde_json::to_value(Envelope::failure("Route non trouvée")).unwrap();
        assert_eq!(value, json!({"success": false, "message": "Route non trouvée"}));
    }

    #[test]
    fn test_list_omits_message() {
        let value = serde_json::to_value(Envelope::list(vec![1, 2, 3])).unwrap();
        assert_eq!(value, json!({"success": true, "data": [1, 2, 3]}));
    }

    #[test]
    fn test_status_has_timestamp() {
        let value = serde_json::to_value(Envelope::status("ok", "2026-01-01T00:00:00.000Z")).unwrap();
        assert_eq!(value["timestamp"], "2026-01-01T00:00:00.000Z");
        assert!(value.get("data").is_none());
    }
}
