use reqwest::Method;

use crate::auth::Credential;
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Claims, LoginRequest, LoginResponse, MessageResponse, SignupRequest};

impl ApiClient {
    /// `GET /auth/me` with an explicit credential, before any session holds it.
    pub async fn who_am_i(&self, credential: &Credential) -> Result<Claims, ApiError> {
        self.send_json(self.request_as(Method::GET, "/auth/me", credential))
            .await
    }

    /// Exchange email and password for a bearer credential.
    pub async fn login(&self, email: &str, password: &str) -> Result<Credential, ApiError> {
        let body = LoginRequest {
            email: email.trim().to_string(),
            mot_de_passe: password.to_string(),
        };
        let response: LoginResponse = self
            .send_json(self.anonymous_request(Method::POST, "/auth/login").json(&body))
            .await?;
        Ok(Credential::new(response.access_token))
    }

    pub async fn signup(&self, request: &SignupRequest) -> Result<MessageResponse, ApiError> {
        self.send_json(self.anonymous_request(Method::POST, "/auth/signup").json(request))
            .await
    }

    pub async fn verify_email(&self, token: &str) -> Result<MessageResponse, ApiError> {
        self.send_json(
            self.anonymous_request(Method::GET, "/auth/verify-email")
                .query(&[("token", token)]),
        )
        .await
    }
}
