use crate::{Error, Result, error::ErrorKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct AskRequest {
    /// `null` and a missing field both mean "use the default question".
    #[serde(default)]
    pub prompt: Option<String>,
}

impl AskRequest {
    /// Parses a raw request body. An empty body counts as `{}`.
    pub fn from_body(body: &[u8]) -> Result<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        let value: serde_json::Value = serde_json::from_slice(body)
            .map_err(|e| Error::bad_request(format!("body is not valid JSON: {}", e)))?;
        if !value.is_object() {
            return Err(Error::bad_request("body must be a JSON object"));
        }

        serde_json::from_value(value)
            .map_err(|e| Error::bad_request(format!("invalid request: {}", e)))
    }
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub response: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: ErrorKind,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_prompt_is_read() {
        let request = AskRequest::from_body(br#"{"prompt": "What do you do?"}"#).unwrap();
        assert_eq!(request.prompt.as_deref(), Some("What do you do?"));
    }

    #[test]
    fn test_missing_prompt_is_none() {
        let request = AskRequest::from_body(br#"{"question": "ignored"}"#).unwrap();
        assert_eq!(request.prompt, None);
    }

    #[test]
    fn test_null_prompt_is_none() {
        let request = AskRequest::from_body(br#"{"prompt": null}"#).unwrap();
        assert_eq!(request.prompt, None);
    }

    #[test]
    fn test_empty_prompt_is_kept() {
        let request = AskRequest::from_body(br#"{"prompt": ""}"#).unwrap();
        assert_eq!(request.prompt.as_deref(), Some(""));
    }

    #[test]
    fn test_empty_body_is_empty_object() {
        assert_eq!(AskRequest::from_body(b"").unwrap().prompt, None);
        assert_eq!(AskRequest::from_body(b"  \n").unwrap().prompt, None);
    }

    #[test]
    fn test_malformed_json_is_bad_request() {
        let error = AskRequest::from_body(b"{\"prompt\": ").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::BadRequest);
    }

    #[test]
    fn test_non_object_json_is_bad_request() {
        for body in [&b"null"[..], b"[\"hi\"]", b"\"hi\"", b"42"] {
            let error = AskRequest::from_body(body).unwrap_err();
            assert_eq!(error.kind(), ErrorKind::BadRequest);
        }
    }

    #[test]
    fn test_non_string_prompt_is_bad_request() {
        let error = AskRequest::from_body(br#"{"prompt": 42}"#).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::BadRequest);
    }

    #[test]
    fn test_response_serialization() {
        let body = serde_json::to_string(&AskResponse {
            response: "Hello \"there\"".to_string(),
        })
        .unwrap();
        assert_eq!(body, r#"{"response":"Hello \"there\""}"#);
    }
}
