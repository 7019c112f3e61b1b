//! Response envelope shared by every endpoint.

use serde::Deserialize;
use serde_json::Value;

use super::error::{ApiError, UNKNOWN_API_ERROR};

/// `{success, data?, error?}` wrapper around every API response.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
}

impl Envelope {
    /// Unwrap the payload.
    ///
    /// A successful envelope without `data` yields `Value::Null`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` with the server message (or
    /// [`UNKNOWN_API_ERROR`]) when `success` is false.
    pub fn into_data(self) -> Result<Value, ApiError> {
        if self.success {
            Ok(self.data.unwrap_or(Value::Null))
        } else {
            let message = self
                .error
                .filter(|e| !e.trim().is_empty())
                .unwrap_or_else(|| UNKNOWN_API_ERROR.to_string());
            Err(ApiError::Api(message))
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    fn envelope(value: Value) -> Envelope {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_success_returns_data() {
        let data = envelope(json!({"success": true, "data": [1, 2]}))
            .into_data()
            .unwrap();
        assert_eq!(data, json!([1, 2]));
    }

    #[test]
    fn test_success_without_data_is_null() {
        let data = envelope(json!({"success": true})).into_data().unwrap();
        assert!(data.is_null());
    }

    #[test]
    fn test_failure_uses_server_message() {
        let err = envelope(json!({"success": false, "error": "Quota exceeded"}))
            .into_data()
            .unwrap_err();
        assert!(matches!(err, ApiError::Api(ref m) if m == "Quota exceeded"));
    }

    #[test]
    fn test_failure_without_message_uses_fallback() {
        for body in [json!({"success": false}), json!({"error": ""}), json!({})] {
            let err = envelope(body).into_data().unwrap_err();
            assert_eq!(err.to_string(), UNKNOWN_API_ERROR);
        }
    }
}
