//! # API gateway client, the single point of outbound HTTP
//!
//! [`Client`] wraps one [`reqwest::Client`] configured with a base address
//! fixed at construction and a shared bearer-token slot. Every request
//! automatically carries the current token (when one is set), so screens and
//! the session store never build auth headers themselves.
//!
//! ## Contract
//!
//! - Each call is fire-once: no retry, no timeout override, no queueing.
//! - Success returns the parsed payload; any failure is an
//!   [`ApiError`] carrying the optional server-supplied `detail` text and the
//!   HTTP status when one was received.
//! - The token slot is written by the session store on login/register/restore
//!   and cleared on logout; cloning the client shares the slot.
//!
//! ## Endpoint surface
//!
//! | Method | Call |
//! |--------|------|
//! | [`login`](Client::login) | `POST /auth/login` |
//! | [`register`](Client::register) | `POST /auth/register` |
//! | [`current_user`](Client::current_user) | `GET /auth/me` |
//! | [`my_profile`](Client::my_profile) | `GET /profiles/me` |
//! | [`update_profile`](Client::update_profile) | `PUT /profiles/me` |
//! | [`references`](Client::references) | `GET /references/` |
//! | [`request_reference`](Client::request_reference) | `POST /references/request` |
//! | [`intros`](Client::intros) | `GET /ai/intros` |
//! | [`generate_intro`](Client::generate_intro) | `POST /ai/generate` |
//! | [`delete_intro`](Client::delete_intro) | `DELETE /ai/intros/{id}` |

use std::sync::{Arc, RwLock};

use reqwest::Method;
use serde::de::DeserializeOwned;

mod error;
pub mod models;

pub use error::ApiError;
pub use models::{
    AuthPayload, Intro, NewAccount, Profile, ProfileUpdate, Reference, ReferenceRequest,
    ReferenceStatus, Tone, User,
};

/// Base path used when no explicit address is configured.
pub const DEFAULT_BASE_URL: &str = "/api";

/// HTTP client for the RentMe REST API.
#[derive(Clone)]
pub struct Client {
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
    http: reqwest::Client,
}

impl Client {
    /// Create a client rooted at `base_url` (e.g. `"https://api.rentme.app"`
    /// or a same-origin `"/api"` prefix). A trailing slash is stripped.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: Arc::new(RwLock::new(None)),
            http: reqwest::Client::new(),
        }
    }

    /// Replace the bearer token attached to outgoing requests.
    /// `None` clears it. Shared across clones of this client.
    pub fn set_token(&self, token: Option<&str>) {
        let mut slot = self.token.write().unwrap_or_else(|e| e.into_inner());
        *slot = token.map(String::from);
    }

    /// Whether a bearer token is currently set.
    pub fn has_token(&self) -> bool {
        self.token
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.http.request(method, &url);
        let token = self.token.read().unwrap_or_else(|e| e.into_inner());
        if let Some(token) = token.as_deref() {
            req = req.bearer_auth(token);
        }
        req
    }

    /// Send a request and parse the JSON payload, translating any failure
    /// into the uniform [`ApiError`] shape.
    async fn execute<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = req.send().await.map_err(|err| {
            tracing::debug!("request failed before a response arrived: {err}");
            ApiError::from(err)
        })?;

        let status = response.status();
        if status.is_success() {
            return response.json::<T>().await.map_err(ApiError::from);
        }

        let detail = response
            .json::<error::ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.detail);
        Err(ApiError::from_status(status.as_u16(), detail))
    }

    /// Like [`execute`](Self::execute) but discards the response body.
    async fn execute_empty(&self, req: reqwest::RequestBuilder) -> Result<(), ApiError> {
        let response = req.send().await.map_err(ApiError::from)?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let detail = response
            .json::<error::ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.detail);
        Err(ApiError::from_status(status.as_u16(), detail))
    }

    // =========================================================================
    // Auth
    // =========================================================================

    /// Exchange credentials for a token and user record.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthPayload, ApiError> {
        let body = models::LoginBody { email, password };
        let req = self.request(Method::POST, "/auth/login").json(&body);
        self.execute(req).await
    }

    /// Create an account; the success payload is identical to login's.
    pub async fn register(&self, account: &NewAccount) -> Result<AuthPayload, ApiError> {
        let req = self.request(Method::POST, "/auth/register").json(account);
        self.execute(req).await
    }

    /// Fetch the user the current token belongs to.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        let req = self.request(Method::GET, "/auth/me");
        self.execute(req).await
    }

    // =========================================================================
    // Profile
    // =========================================================================

    pub async fn my_profile(&self) -> Result<Profile, ApiError> {
        let req = self.request(Method::GET, "/profiles/me");
        self.execute(req).await
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<Profile, ApiError> {
        let req = self.request(Method::PUT, "/profiles/me").json(update);
        self.execute(req).await
    }

    // =========================================================================
    // References
    // =========================================================================

    pub async fn references(&self) -> Result<Vec<Reference>, ApiError> {
        let req = self.request(Method::GET, "/references/");
        self.execute(req).await
    }

    pub async fn request_reference(
        &self,
        request: &ReferenceRequest,
    ) -> Result<Reference, ApiError> {
        let req = self.request(Method::POST, "/references/request").json(request);
        self.execute(req).await
    }

    // =========================================================================
    // AI introductions
    // =========================================================================

    pub async fn intros(&self) -> Result<Vec<Intro>, ApiError> {
        let req = self.request(Method::GET, "/ai/intros");
        self.execute(req).await
    }

    pub async fn generate_intro(&self, tone: Tone) -> Result<Intro, ApiError> {
        let body = models::GenerateBody { tone };
        let req = self.request(Method::POST, "/ai/generate").json(&body);
        self.execute(req).await
    }

    pub async fn delete_intro(&self, id: &str) -> Result<(), ApiError> {
        // Ids are server-issued, but encode anyway so an arbitrary id cannot
        // break out of the path segment.
        let path = format!("/ai/intros/{}", urlencoding::encode(id));
        let req = self.request(Method::DELETE, &path);
        self.execute_empty(req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_slot_shared_across_clones() {
        let client = Client::new("http://127.0.0.1:9");
        let clone = client.clone();

        assert!(!clone.has_token());
        client.set_token(Some("tok1"));
        assert!(clone.has_token());
        clone.set_token(None);
        assert!(!client.has_token());
    }

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let client = Client::new("http://127.0.0.1:8000/");
        assert_eq!(client.base_url, "http://127.0.0.1:8000");
    }

    #[test]
    fn test_verification_percent_breakdown() {
        let mut profile = Profile::default();
        assert_eq!(profile.verification_percent(), 0);

        profile.employment_verified = true;
        assert_eq!(profile.verification_percent(), 33);

        profile.income_verified = true;
        assert_eq!(profile.verification_percent(), 66);

        profile.credit_verified = true;
        assert_eq!(profile.verification_percent(), 100);
    }
}
