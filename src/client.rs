use reqwest::StatusCode;
use reqwest::blocking::{Client as HttpClient, RequestBuilder};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::time::Duration;

use crate::config::Credentials;
use crate::error::{Error, NetworkError, Result};
use crate::models::{Emails, User};
use crate::session::Session;
use crate::util::urljoin;

const GITHUB_API_URL: &str = "https://api.github.com";

/// Blocking client for the GitHub user endpoints.
///
/// Holds an immutable [`Session`] and a pooled HTTP client, so it can be cloned
/// and shared across threads freely.
#[derive(Debug, Clone)]
pub struct Client {
    session: Session,
    base_url: String,
    timeout: Duration,
    http: HttpClient,
}

impl Client {
    /// Creates a client that issues requests under `session`.
    pub fn new(session: Session) -> Result<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!("gogithub-rs/{}", env!("CARGO_PKG_VERSION")))
                .unwrap_or(HeaderValue::from_static("gogithub-rs")),
        );
        default_headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github.v3+json"),
        );

        let http = HttpClient::builder()
            .default_headers(default_headers)
            .build()
            .map_err(|e| Error::network(GITHUB_API_URL, NetworkError::Build(e)))?;

        Ok(Self {
            session,
            base_url: GITHUB_API_URL.to_string(),
            timeout: Duration::from_secs(60),
            http,
        })
    }

    pub fn anonymous() -> Result<Self> {
        Self::new(Session::anonymous())
    }

    /// Creates a client from credentials found in the environment or `.githubrc`.
    ///
    /// See [`Credentials::resolve`] for the lookup order.
    pub fn from_env() -> Result<Self> {
        Self::new(Credentials::resolve(None, None)?.into_session()?)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[cfg(test)]
    pub(crate) fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Resource path [`Client::get_user`] targets for `username`.
    ///
    /// Asking for yourself, or for nobody while authenticated, selects `/user`;
    /// everything else goes to `/users/{username}` verbatim. An anonymous
    /// session asking for `""` also resolves to `/user`, which GitHub rejects.
    pub fn user_path(&self, username: &str) -> String {
        if self.session.username() == username
            || (self.session.is_authenticated() && username.is_empty())
        {
            "/user".to_string()
        } else {
            format!("/users/{}", username)
        }
    }

    /// Fetches a user profile.
    pub fn get_user(&self, username: &str) -> Result<User> {
        let url = urljoin(&self.base_url, &self.user_path(username));
        let body = self.get(&url)?;
        decode_object("user", &body)
    }

    /// Fetches the email addresses of the authenticated user.
    ///
    /// Fails with [`Error::Precondition`] without touching the network when the
    /// session is anonymous.
    pub fn get_emails(&self) -> Result<Emails> {
        if !self.session.is_authenticated() {
            return Err(Error::Precondition(
                "You must be authenticated to fetch emails.",
            ));
        }

        let url = urljoin(&self.base_url, "/user/emails");
        let body = self.get(&url)?;
        decode("user email", &body)
    }

    /// Issues a single GET and returns the body of a `200 OK` response.
    ///
    /// Any other status is an error and its body is discarded unread.
    pub fn get(&self, url: &str) -> Result<Vec<u8>> {
        let req = self
            .apply_auth(self.http.get(url).timeout(self.timeout))
            .build()
            .map_err(|e| Error::network(url, NetworkError::Build(e)))?;

        log::debug!(
            "GET {} ({})",
            url,
            if self.session.is_authenticated() {
                "basic auth"
            } else {
                "anonymous"
            }
        );

        let resp = self
            .http
            .execute(req)
            .map_err(|e| Error::network(url, NetworkError::Transport(e)))?;

        let status = resp.status();
        if status != StatusCode::OK {
            log::warn!("GitHub answered HTTP {} for {}", status, url);
            return Err(Error::network(url, NetworkError::Status(status)));
        }

        let body = resp
            .bytes()
            .map_err(|e| Error::network(url, NetworkError::Body(e)))?;
        log::debug!("read {} byte(s) from {}", body.len(), url);
        Ok(body.to_vec())
    }

    fn apply_auth(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.session {
            Session::Basic { username, password } => req.basic_auth(username, Some(password)),
            Session::Anonymous => req,
        }
    }
}

fn decode<T: DeserializeOwned>(what: &'static str, body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|source| Error::Decode { what, source })
}

// Derived struct deserializers also accept arrays and fill fields by position.
fn decode_object<T: DeserializeOwned>(what: &'static str, body: &[u8]) -> Result<T> {
    let object: Map<String, Value> = decode(what, body)?;
    serde_json::from_value(Value::Object(object))
        .map_err(|source| Error::Decode { what, source })
}
