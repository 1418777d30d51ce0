//! Login and registration against the IAM backend.

use serde::{Deserialize, Serialize};
use store::{AuthResponse, KeyValueStore, Role, Session};

use crate::backend::Backend;
use crate::error::ApiError;
use crate::transport::Transport;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Username or email.
    pub key_login: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
    pub role: Role,
}

impl<T: Transport, S: KeyValueStore> Backend<T, S> {
    /// Log in and keep the returned tokens.
    pub async fn login(&self, request: &LoginRequest) -> Result<Session, ApiError> {
        let response: AuthResponse = self
            .iam
            .post("/api/auth/login", request)
            .await
            .map_err(|e| {
                tracing::error!("Login error: {}", e);
                match e {
                    ApiError::Unauthorized => ApiError::InvalidCredentials,
                    other => other,
                }
            })?;
        self.start_session(response)
    }

    /// Register a new account and keep the returned tokens.
    pub async fn register(&self, request: &RegisterRequest) -> Result<Session, ApiError> {
        let response: AuthResponse = self
            .iam
            .post("/api/auth/register", request)
            .await
            .inspect_err(|e| tracing::error!("Register error: {}", e))?;
        self.start_session(response)
    }

    fn start_session(&self, response: AuthResponse) -> Result<Session, ApiError> {
        let Some(token) = response.bearer() else {
            return Err(ApiError::InvalidCredentials);
        };
        let Some(user) = response.user.clone() else {
            return Err(ApiError::MissingProfile);
        };
        self.credentials()
            .store(token, response.refresh_token.as_deref());
        tracing::info!(user = %user.id, role = %user.role, "Signed in");
        Ok(Session::new(user, token.to_string(), response.refresh_token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::SessionEvent;
    use crate::testing::MockTransport;
    use crate::transport::{HttpResponse, Method};
    use serde_json::json;
    use store::{ConsoleConfig, MemoryStore};

    fn backend(transport: MockTransport) -> Backend<MockTransport, MemoryStore> {
        Backend::new(&ConsoleConfig::default(), MemoryStore::new(), transport)
    }

    const USER: &str = r#"{"id":"u1","fullName":"Ada Lovelace","email":"ada@uni.edu","role":1}"#;

    #[tokio::test]
    async fn test_login_stores_tokens_and_builds_session() {
        let transport = MockTransport::new(|_| {
            HttpResponse::new(
                200,
                format!(r#"{{"accessToken":"a1","refreshToken":"r1","user":{USER}}}"#),
            )
        });
        let backend = backend(transport.clone());

        let session = backend
            .login(&LoginRequest {
                key_login: "ada".to_string(),
                password: "secret".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(session.role, Role::Examiner);
        assert_eq!(session.full_name, "Ada Lovelace");
        assert_eq!(backend.credentials().access_token().as_deref(), Some("a1"));
        assert_eq!(backend.credentials().refresh_token().as_deref(), Some("r1"));

        let sent = transport.last();
        assert_eq!(sent.method, Method::POST);
        assert_eq!(sent.url, "http://localhost:5000/iam/api/auth/login");
        assert_eq!(
            sent.body,
            Some(json!({ "keyLogin": "ada", "password": "secret" }))
        );
    }

    #[tokio::test]
    async fn test_login_rejected_is_invalid_credentials() {
        let backend = backend(MockTransport::new(|_| HttpResponse::new(401, "")));
        let err = backend
            .login(&LoginRequest {
                key_login: "ada".to_string(),
                password: "wrong".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_response_without_token_or_user() {
        let backend = backend_with_body(r#"{"refreshToken":"r"}"#);
        let request = LoginRequest {
            key_login: "a".to_string(),
            password: "b".to_string(),
        };
        assert!(matches!(
            backend.login(&request).await,
            Err(ApiError::InvalidCredentials)
        ));

        let backend = backend_with_body(r#"{"token":"t"}"#);
        assert!(matches!(
            backend.login(&request).await,
            Err(ApiError::MissingProfile)
        ));
        assert!(!backend.credentials().is_authenticated());
    }

    fn backend_with_body(body: &'static str) -> Backend<MockTransport, MemoryStore> {
        backend(MockTransport::ok(body))
    }

    #[tokio::test]
    async fn test_register_sends_role_code() {
        let transport = MockTransport::new(|_| {
            HttpResponse::new(200, format!(r#"{{"token":"t","user":{USER}}}"#))
        });
        let backend = backend(transport.clone());
        backend
            .register(&RegisterRequest {
                full_name: "Ada Lovelace".to_string(),
                email: "ada@uni.edu".to_string(),
                phone_number: "555".to_string(),
                password: "pw".to_string(),
                role: Role::Student,
            })
            .await
            .unwrap();

        let body = transport.last().body.unwrap();
        assert_eq!(body["role"], json!(2));
        assert_eq!(body["fullName"], json!("Ada Lovelace"));
        assert_eq!(body["phoneNumber"], json!("555"));
    }

    #[tokio::test]
    async fn test_logout_clears_and_signals() {
        let backend = backend(MockTransport::ok("{}"));
        backend.credentials().store("a", Some("r"));
        let mut events = backend.credentials().subscribe();

        backend.logout();
        assert!(!backend.credentials().is_authenticated());
        assert_eq!(events.try_next().unwrap(), Some(SessionEvent::LoggedOut));
    }
}
