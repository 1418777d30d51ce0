//! The pair of backend clients the console talks to.

use store::{ConsoleConfig, KeyValueStore, TokenStore};

use crate::client::ApiClient;
use crate::credentials::{Credentials, SessionEvent};
use crate::transport::{ReqwestTransport, Transport};

/// IAM and course clients sharing one set of [`Credentials`].
pub struct Backend<T, S> {
    pub(crate) iam: ApiClient<T, S>,
    pub(crate) course: ApiClient<T, S>,
    credentials: Credentials<S>,
}

impl<T: Clone, S> Clone for Backend<T, S> {
    fn clone(&self) -> Self {
        Self {
            iam: self.iam.clone(),
            course: self.course.clone(),
            credentials: self.credentials.clone(),
        }
    }
}

impl<S: KeyValueStore> Backend<ReqwestTransport, S> {
    /// Build both clients over `reqwest` with the configured timeout.
    pub fn connect(config: &ConsoleConfig, storage: S) -> Self {
        Self::new(config, storage, ReqwestTransport::new(config.api.timeout()))
    }
}

impl<T: Transport + Clone, S: KeyValueStore> Backend<T, S> {
    pub fn new(config: &ConsoleConfig, storage: S, transport: T) -> Self {
        let credentials = Credentials::new(TokenStore::new(storage, &config.storage));
        let refresh_url = config.api.refresh_url();
        Self {
            iam: ApiClient::new(
                config.api.iam_base_url(),
                refresh_url.clone(),
                transport.clone(),
                credentials.clone(),
            ),
            course: ApiClient::new(
                config.api.course_base_url(),
                refresh_url,
                transport,
                credentials.clone(),
            ),
            credentials,
        }
    }
}

impl<T, S: KeyValueStore> Backend<T, S> {
    pub fn credentials(&self) -> &Credentials<S> {
        &self.credentials
    }

    /// Forget the stored tokens and tell subscribers the user signed out.
    pub fn logout(&self) {
        tracing::info!("Signing out");
        self.credentials.clear(SessionEvent::LoggedOut);
    }
}

/// Build a `?a=1&b=2` query from the present parameters.
pub(crate) fn query_string(params: &[(&str, Option<String>)]) -> String {
    let pairs: Vec<String> = params
        .iter()
        .filter_map(|(key, value)| value.as_ref().map(|v| format!("{key}={v}")))
        .collect();
    if pairs.is_empty() {
        String::new()
    } else {
        format!("?{}", pairs.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_string() {
        assert_eq!(query_string(&[("examId", None)]), "");
        assert_eq!(
            query_string(&[
                ("semesterId", Some("2".to_string())),
                ("subjectId", None),
                ("status", Some("false".to_string())),
            ]),
            "?semesterId=2&status=false"
        );
    }
}
