//! The configured HTTP client every view talks to the backend through.

use std::rc::Rc;

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use store::config::ApiConfig;

use crate::auth::{Credential, CredentialSource, NoCredentials};
use crate::error::{extract_error_message, ApiError};

/// Thin wrapper over [`reqwest::Client`] bound to one backend.
///
/// Cloning is cheap and clones share the connection pool and credential
/// source. No retries, no queueing: one call, one request.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Rc<str>,
    credentials: Rc<dyn CredentialSource>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, credentials: impl CredentialSource + 'static) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: Rc::from(config.base_url.trim_end_matches('/')),
            credentials: Rc::new(credentials),
        }
    }

    /// A client that never attaches a credential.
    pub fn anonymous(config: &ApiConfig) -> Self {
        Self::new(config, NoCredentials)
    }

    /// Absolute URL for an API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Absolute URL for a file the backend serves (cover images).
    /// URLs that are already absolute pass through.
    pub fn asset_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("data:") {
            path.to_string()
        } else {
            self.url(path)
        }
    }

    /// Start a request, attaching whatever credential the source holds now.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.anonymous_request(method, path);
        match self.credentials.credential() {
            Some(credential) if !credential.is_empty() => builder.bearer_auth(credential.as_str()),
            _ => builder,
        }
    }

    /// Start a request with an explicit credential, ignoring the source.
    pub(crate) fn request_as(&self, method: Method, path: &str, credential: &Credential) -> RequestBuilder {
        self.anonymous_request(method, path)
            .bearer_auth(credential.as_str())
    }

    /// Start a request that carries no credential.
    pub(crate) fn anonymous_request(&self, method: Method, path: &str) -> RequestBuilder {
        tracing::debug!("{} {}", method, path);
        self.http
            .request(method, self.url(path))
            .header(reqwest::header::ACCEPT, "application/json")
    }

    /// Send and decode a JSON body.
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let response = Self::checked(builder.send().await?).await?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Send and ignore whatever 2xx body comes back.
    pub(crate) async fn send_unit(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        Self::checked(builder.send().await?).await?;
        Ok(())
    }

    async fn checked(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let message = extract_error_message(&body);
        tracing::warn!(
            "{} answered {}{}",
            status.canonical_reason().unwrap_or("request"),
            status.as_u16(),
            message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
        );
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::anonymous(&ApiConfig {
            base_url: "http://localhost:8000/".to_string(),
        })
    }

    #[test]
    fn test_url_joins_single_slash() {
        let api = client();
        assert_eq!(api.url(""), "http://localhost:8000/");
        assert_eq!(api.url("/livres/get-all"), "http://localhost:8000/livres/get-all");
        assert_eq!(api.url("auth/me"), "http://localhost:8000/auth/me");
    }

    #[test]
    fn test_asset_url() {
        let api = client();
        assert_eq!(
            api.asset_url("/static/covers/dune.jpg"),
            "http://localhost:8000/static/covers/dune.jpg"
        );
        assert_eq!(
            api.asset_url("https://cdn.example.org/dune.jpg"),
            "https://cdn.example.org/dune.jpg"
        );
    }

    #[test]
    fn test_request_reads_source_at_call_time() {
        use std::cell::RefCell;

        #[derive(Clone, Default)]
        struct Slot(Rc<RefCell<Option<Credential>>>);

        impl CredentialSource for Slot {
            fn credential(&self) -> Option<Credential> {
                self.0.borrow().clone()
            }
        }

        let slot = Slot::default();
        let api = ApiClient::new(&ApiConfig::default(), slot.clone());

        let bare = api.request(Method::GET, "/loans/me").build().unwrap();
        assert!(bare.headers().get(reqwest::header::AUTHORIZATION).is_none());

        *slot.0.borrow_mut() = Some(Credential::new("abc.def.ghi"));
        let signed = api.request(Method::GET, "/loans/me").build().unwrap();
        assert_eq!(
            signed.headers().get(reqwest::header::AUTHORIZATION).unwrap(),
            "Bearer abc.def.ghi"
        );

        *slot.0.borrow_mut() = None;
        let after = api.request(Method::GET, "/loans/me").build().unwrap();
        assert!(after.headers().get(reqwest::header::AUTHORIZATION).is_none());
    }

    #[test]
    fn test_request_as_overrides_source() {
        let api = client();
        let req = api
            .request_as(Method::GET, "/auth/me", &Credential::new("x.y.z"))
            .build()
            .unwrap();
        assert_eq!(req.url().as_str(), "http://localhost:8000/auth/me");
        assert_eq!(
            req.headers().get(reqwest::header::AUTHORIZATION).unwrap(),
            "Bearer x.y.z"
        );
    }
}
