use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LemonError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Lemon Squeezy API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("No data returned from Lemon Squeezy: {0}")]
    NoData(String),
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<ErrorObject>,
}

#[derive(Debug, Deserialize)]
struct ErrorObject {
    detail: Option<String>,
    title: Option<String>,
}

impl LemonError {
    /// Builds an `Api` error from a non-success response body, preferring the
    /// first JSON:API error's `detail`, then its `title`.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|body| body.errors.into_iter().next())
            .and_then(|err| err.detail.or(err.title))
            .filter(|msg| !msg.is_empty())
            .unwrap_or_else(|| format!("request failed with status {}", status));

        LemonError::Api { status, message }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, LemonError::Api { status: 404, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_uses_first_detail() {
        let body = r#"{"errors":[{"status":"422","title":"Unprocessable Entity","detail":"The url field is required."}]}"#;
        match LemonError::from_response(422, body) {
            LemonError::Api { status, message } => {
                assert_eq!(status, 422);
                assert_eq!(message, "The url field is required.");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn api_error_falls_back_to_title() {
        let body = r#"{"errors":[{"status":"404","title":"Not Found"}]}"#;
        let err = LemonError::from_response(404, body);
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Lemon Squeezy API error (404): Not Found");
    }

    #[test]
    fn api_error_handles_non_json_body() {
        let err = LemonError::from_response(502, "<html>bad gateway</html>");
        assert_eq!(
            err.to_string(),
            "Lemon Squeezy API error (502): request failed with status 502"
        );
    }
}
