use std::collections::HashMap;

use crate::error::{Error, Result};

const UNSUPPORTED: &str =
    "unsupported authentication type: only username/password is supported at this time";

/// Credentials under which requests are made.
///
/// Immutable once built; cheap to clone and safe to share between threads.
#[derive(Clone, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    Anonymous,
    Basic { username: String, password: String },
}

impl Session {
    pub fn anonymous() -> Self {
        Session::Anonymous
    }

    /// Builds a basic-auth session. Both parts must be non-empty.
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Result<Self> {
        let username = username.into();
        let password = password.into();
        if username.is_empty() || password.is_empty() {
            return Err(Error::Config(UNSUPPORTED.to_string()));
        }
        Ok(Session::Basic { username, password })
    }

    /// Builds a session from a loosely-typed credential map.
    ///
    /// - `None` or an empty map yields an anonymous session.
    /// - `username` and `password` both non-empty yields a basic-auth session;
    ///   any other keys are ignored.
    /// - Anything else is rejected with [`Error::Config`].
    pub fn from_credentials(credentials: Option<&HashMap<String, String>>) -> Result<Self> {
        let credentials = match credentials {
            Some(c) if !c.is_empty() => c,
            _ => return Ok(Session::Anonymous),
        };

        let username = credentials.get("username").map(String::as_str).unwrap_or("");
        let password = credentials.get("password").map(String::as_str).unwrap_or("");
        Session::basic(username, password)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Basic { .. })
    }

    /// Username of the session; empty when anonymous.
    pub fn username(&self) -> &str {
        match self {
            Session::Anonymous => "",
            Session::Basic { username, .. } => username,
        }
    }

    pub fn password(&self) -> &str {
        match self {
            Session::Anonymous => "",
            Session::Basic { password, .. } => password,
        }
    }
}

// Keep passwords out of logs.
impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Session::Anonymous => f.write_str("Anonymous"),
            Session::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"***")
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn missing_or_empty_credentials_are_anonymous() {
        assert_eq!(Session::from_credentials(None).unwrap(), Session::Anonymous);
        assert_eq!(
            Session::from_credentials(Some(&HashMap::new())).unwrap(),
            Session::Anonymous
        );
    }

    #[test]
    fn half_populated_credentials_are_rejected() {
        for pairs in [
            &[("username", "a"), ("password", "")][..],
            &[("username", ""), ("password", "b")][..],
            &[("username", "a")][..],
            &[("token", "abc")][..],
        ] {
            let err = Session::from_credentials(Some(&map(pairs))).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Config, "{pairs:?}");
            assert!(err.to_string().starts_with("unsupported authentication type"));
        }
    }

    #[test]
    fn full_credentials_are_kept_verbatim() {
        let s = Session::from_credentials(Some(&map(&[
            ("username", "a"),
            ("password", "b"),
            ("extra", "ignored"),
        ])))
        .unwrap();
        assert!(s.is_authenticated());
        assert_eq!(s.username(), "a");
        assert_eq!(s.password(), "b");
    }

    #[test]
    fn debug_hides_password() {
        let s = Session::basic("alice", "hunter2").unwrap();
        let out = format!("{s:?}");
        assert!(out.contains("alice"));
        assert!(!out.contains("hunter2"));
    }
}
