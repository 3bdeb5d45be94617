//! Response envelope returned by every namespace operation.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// `{success, data?, error?}` envelope.
///
/// A successful response always carries `data`; a failed one always
/// carries a non-empty `error` message and no `data`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Whether the operation succeeded.
    pub success: bool,
    /// Payload on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable message on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Creates a failed response.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }

    /// Convert back into a `Result` for in-process callers.
    pub fn into_result(self) -> Result<T, String> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            _ => Err(self
                .error
                .unwrap_or_else(|| "Unknown error".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_omits_error() {
        let resp = ApiResponse::ok(vec![1, 2]);
        let json = serde_json::to_value(&resp).expect("serialize");
        assert_eq!(json, serde_json::json!({"success": true, "data": [1, 2]}));
    }

    #[test]
    fn test_failure_omits_data() {
        let resp: ApiResponse<Vec<i32>> = ApiResponse::failure("Failed to fetch folders");
        let json = serde_json::to_value(&resp).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({"success": false, "error": "Failed to fetch folders"})
        );
        assert_eq!(resp.into_result(), Err("Failed to fetch folders".to_string()));
    }

    #[test]
    fn test_empty_payload_is_still_success() {
        let resp: ApiResponse<Vec<i32>> = ApiResponse::ok(Vec::new());
        assert!(resp.success);
        assert_eq!(resp.into_result(), Ok(Vec::new()));
    }
}
