//! HTTP client for the storefront authentication service
//!
//! Requests are JSON in, JSON out. Any response the service sends back, success
//! or rejection, is returned as an [`AuthReply`]; only failures to obtain a
//! response become an [`AuthError`].

use super::error::AuthError;
use super::traits::AuthClientTrait;
use super::types::{AuthReply, LoginRequest, ServiceBody, SignupRequest};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

/// Default service address
pub const DEFAULT_AUTH_URL: &str = "https://fastapi-backend-s81v.onrender.com";

/// Endpoint paths, relative to the configured base so a path prefix survives
pub const LOGIN_PATH: &str = "login";
pub const SIGNUP_PATH: &str = "signup";

const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Client for communicating with the authentication service
pub struct AuthClient {
    http: Client,
    base_url: Url,
}

impl AuthClient {
    /// Build a client for `base_url`; every request gives up after `timeout`
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        // Keep whatever cookies the service sets, like a browser would with
        // credentials included
        let http = Client::builder()
            .user_agent(APP_USER_AGENT)
            .default_headers(headers)
            .cookie_store(true)
            .timeout(timeout)
            .build()?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// POST a JSON body and collect status plus body fields
    async fn post_json<T: Serialize + Sync>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<AuthReply, AuthError> {
        let url = self.base_url.join(path)?;

        let response = self.http.post(url).json(body).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        debug!(%status, path, "auth service replied");

        Ok(AuthReply::new(status.as_u16(), ServiceBody::from_slice(&bytes)))
    }
}

#[async_trait]
impl AuthClientTrait for AuthClient {
    #[instrument(skip(self, request), fields(username = %request.username))]
    async fn login(&self, request: &LoginRequest) -> Result<AuthReply, AuthError> {
        self.post_json(LOGIN_PATH, request).await
    }

    #[instrument(skip(self, request), fields(username = %request.username))]
    async fn signup(&self, request: &SignupRequest) -> Result<AuthReply, AuthError> {
        self.post_json(SIGNUP_PATH, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn login_request() -> LoginRequest {
        LoginRequest {
            username: "a@b.c".to_string(),
            password: "secret".to_string(),
        }
    }

    fn client_for(server: &MockServer) -> AuthClient {
        AuthClient::new(&server.uri(), Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_new_rejects_bad_url() {
        assert!(AuthClient::new("not a url", Duration::from_secs(1)).is_err());
    }

    #[test]
    fn test_default_url_parses() {
        let client = AuthClient::new(DEFAULT_AUTH_URL, Duration::from_secs(1)).unwrap();
        assert_eq!(
            client.base_url().join(LOGIN_PATH).unwrap().as_str(),
            "https://fastapi-backend-s81v.onrender.com/login"
        );
    }

    #[test]
    fn test_base_path_prefix_is_kept() {
        for base in ["https://api.example.com/v1", "https://api.example.com/v1/"] {
            let client = AuthClient::new(base, Duration::from_secs(1)).unwrap();
            assert_eq!(
                client.base_url().join(SIGNUP_PATH).unwrap().as_str(),
                "https://api.example.com/v1/signup"
            );
        }
    }

    #[tokio::test]
    async fn test_login_under_prefixed_base() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": "abc"})))
            .expect(1)
            .mount(&server)
            .await;

        let base = format!("{}/api/v1", server.uri());
        let client = AuthClient::new(&base, Duration::from_secs(5)).unwrap();
        let reply = client.login(&login_request()).await.unwrap();

        assert!(reply.is_accepted());
        assert_eq!(reply.body.access_token.as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn test_login_posts_json_and_reads_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .and(header("accept", "application/json"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({"username": "a@b.c", "password": "secret"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": "abc"})))
            .expect(1)
            .mount(&server)
            .await;

        let reply = client_for(&server).login(&login_request()).await.unwrap();

        assert!(reply.is_accepted());
        assert_eq!(reply.body.access_token.as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn test_rejection_is_a_reply_not_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"detail": "bad credentials"})),
            )
            .mount(&server)
            .await;

        let reply = client_for(&server).login(&login_request()).await.unwrap();

        assert_eq!(reply.status, 401);
        assert!(!reply.is_accepted());
        assert_eq!(reply.body.detail.as_deref(), Some("bad credentials"));
    }

    #[tokio::test]
    async fn test_signup_posts_to_signup_path() {
        let server = MockServer::start().await;
        let request = SignupRequest {
            username: "ada@example.com".to_string(),
            password: "analytical".to_string(),
            email: "ada@example.com".to_string(),
            phone_number: "5551234567".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
        };
        Mock::given(method("POST"))
            .and(path("/signup"))
            .and(body_json(serde_json::to_value(&request).unwrap()))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 7})))
            .expect(1)
            .mount(&server)
            .await;

        let reply = client_for(&server).signup(&request).await.unwrap();

        assert_eq!(reply.status, 201);
        assert!(reply.is_accepted());
    }

    #[tokio::test]
    async fn test_non_json_error_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&server)
            .await;

        let reply = client_for(&server).login(&login_request()).await.unwrap();

        assert_eq!(reply.status, 502);
        assert_eq!(reply.body, ServiceBody::default());
    }

    #[tokio::test]
    async fn test_slow_service_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let client = AuthClient::new(&server.uri(), Duration::from_millis(100)).unwrap();
        let err = client.login(&login_request()).await.unwrap_err();

        assert!(matches!(err, AuthError::Timeout), "got {err:?}");
    }

    #[tokio::test]
    async fn test_unreachable_service_is_an_error() {
        // Nothing listens on the discard port
        let client = AuthClient::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
        let err = client.login(&login_request()).await.unwrap_err();

        assert!(
            matches!(err, AuthError::Transport(_) | AuthError::Timeout),
            "got {err:?}"
        );
    }
}
