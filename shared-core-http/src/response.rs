//! Building JSON responses on the server side.

use http::header::CONTENT_TYPE;
use http::{Response, StatusCode};
use serde::{Deserialize, Serialize};

use crate::error::{HttpError, Result};

/// Body of an error response: `{"error": {"message": .., "code": ..}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    pub code: u16,
}

impl ErrorEnvelope {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            error: ErrorBody {
                message: message.into(),
                code: status.as_u16(),
            },
        }
    }
}

/// Build a response with `Content-Type: application/json` and `data`
/// serialized as the body. `None` yields an empty body.
pub fn json_response<T: Serialize + ?Sized>(
    status: StatusCode,
    data: Option<&T>,
) -> Result<Response<Vec<u8>>> {
    let body = match data {
        Some(data) => serde_json::to_vec(data).map_err(HttpError::Encode)?,
        None => Vec::new(),
    };
    Ok(Response::builder()
        .status(status)
        .header(CONTENT_TYPE, "application/json")
        .body(body)?)
}

/// Build an [`ErrorEnvelope`] response whose `code` repeats `status`.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Result<Response<Vec<u8>>> {
    json_response(status, Some(&ErrorEnvelope::new(status, message)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn json_body_and_headers() {
        let data = json!({"message": "success", "id": 123});
        let response = json_response(StatusCode::OK, Some(&data)).unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
        let body: Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(body["message"], "success");
        assert_eq!(body["id"], 123);
    }

    #[test]
    fn empty_body_for_none() {
        let response = json_response::<Value>(StatusCode::NO_CONTENT, None).unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
        assert!(response.body().is_empty());
    }

    #[test]
    fn error_envelope_shape() {
        let response = error_response(StatusCode::BAD_REQUEST, "Invalid input").unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(
            body,
            json!({"error": {"message": "Invalid input", "code": 400}})
        );

        let envelope: ErrorEnvelope = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(envelope, ErrorEnvelope::new(StatusCode::BAD_REQUEST, "Invalid input"));
    }
}
