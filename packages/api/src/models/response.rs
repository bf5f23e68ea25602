//! The `{success, data?, error?}` envelope returned by the user-management API.

use serde::{Deserialize, Serialize};

/// Result envelope of a user-management call.
///
/// `success = true` carries `data` when the call returns a value;
/// `success = false` carries a human-readable `error`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ServiceResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ServiceResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }

    /// The server message, or `fallback` when the server gave none.
    pub fn error_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.error.as_deref() {
            Some(msg) if !msg.is_empty() => msg,
            _ => fallback,
        }
    }
}

impl ServiceResponse<()> {
    /// Success without a payload.
    pub fn ok() -> Self {
        Self::success(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_or_fallback() {
        let resp = ServiceResponse::<()>::failure("Email already in use");
        assert_eq!(resp.error_or("Failed to update profile"), "Email already in use");

        let resp = ServiceResponse::<()> {
            success: false,
            data: None,
            error: None,
        };
        assert_eq!(resp.error_or("Failed to update profile"), "Failed to update profile");

        let resp = ServiceResponse::<()>::failure("");
        assert_eq!(resp.error_or("fallback"), "fallback");

        // only an empty message counts as missing
        let resp = ServiceResponse::<()>::failure(" ");
        assert_eq!(resp.error_or("fallback"), " ");
    }

    #[test]
    fn test_envelope_json_shape() {
        let json = serde_json::to_value(ServiceResponse::<()>::failure("nope")).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "nope");
        assert!(json.get("data").is_none());

        let parsed: ServiceResponse<String> = serde_json::from_str(r#"{"success":true,"data":"x"}"#).unwrap();
        assert_eq!(parsed, ServiceResponse::success("x".to_string()));
    }
}
