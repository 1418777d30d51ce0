//! Error taxonomy for calls to the IAM and course backends.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Transport(String),

    #[error("the request timed out")]
    Timeout,

    /// A 401 that was still returned after the single refresh-and-replay.
    #[error("you are not authorized to perform this request")]
    Unauthorized,

    /// The token could not be refreshed; stored credentials were cleared.
    #[error("your session has expired, please sign in again")]
    SessionExpired,

    #[error("you do not have permission to perform this action")]
    Forbidden,

    #[error("the requested resource was not found")]
    NotFound,

    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("unexpected response from the server: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("the server did not return a user profile")]
    MissingProfile,
}

impl ApiError {
    /// Classify a non-2xx response. The message prefers the body's `message`
    /// field, as the backends report validation failures there.
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 => ApiError::Unauthorized,
            403 => ApiError::Forbidden,
            404 => ApiError::NotFound,
            _ => ApiError::Status {
                status,
                message: body_message(body)
                    .unwrap_or_else(|| format!("request failed with status {status}")),
            },
        }
    }

    pub fn is_session_expired(&self) -> bool {
        matches!(self, ApiError::SessionExpired)
    }
}

fn body_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "title", "error"]
        .iter()
        .find_map(|key| value.get(key)?.as_str())
        .map(str::to_string)
        .filter(|m| !m.trim().is_empty())
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_comes_from_body() {
        let err = ApiError::from_status(400, r#"{"message":"Email already registered"}"#);
        assert_eq!(err.to_string(), "Email already registered");

        let err = ApiError::from_status(500, "<html>oops</html>");
        assert_eq!(err.to_string(), "request failed with status 500");
    }

    #[test]
    fn well_known_statuses() {
        assert!(matches!(ApiError::from_status(401, ""), ApiError::Unauthorized));
        assert!(matches!(ApiError::from_status(403, ""), ApiError::Forbidden));
        assert!(matches!(ApiError::from_status(404, "{}"), ApiError::NotFound));
    }
}
