use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::session::Session;
use crate::util::strip_quotes;

/// Username/password pair gathered from the caller's environment.
///
/// Either part may be missing; [`Credentials::into_session`] decides whether the
/// result is anonymous, basic-auth, or invalid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl Credentials {
    /// Resolves credentials, field by field, in order of precedence:
    /// - explicit `username`/`password` arguments
    /// - environment variables `GITHUB_USERNAME` / `GITHUB_PASSWORD`
    /// - rc file from `GOGITHUB_RC`, `./.githubrc` or `~/.githubrc`
    ///
    /// Empty strings count as absent.
    pub fn resolve(username: Option<String>, password: Option<String>) -> Result<Self> {
        let mut username = non_empty(username).or_else(|| env_var("GITHUB_USERNAME"));
        let mut password = non_empty(password).or_else(|| env_var("GITHUB_PASSWORD"));

        if username.is_none() || password.is_none() {
            for rc_path in rc_candidates() {
                if rc_path.exists() {
                    let cfg = read_rc(&rc_path)?;
                    log::debug!("read credentials from {}", rc_path.display());
                    username = username.or(cfg.username);
                    password = password.or(cfg.password);
                    break;
                }
            }
        }

        Ok(Self { username, password })
    }

    pub fn into_session(self) -> Result<Session> {
        match (self.username, self.password) {
            (None, None) => Ok(Session::anonymous()),
            (u, p) => Session::basic(u.unwrap_or_default(), p.unwrap_or_default()),
        }
    }
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.is_empty())
}

fn env_var(name: &str) -> Option<String> {
    non_empty(std::env::var(name).ok())
}

fn read_rc(path: &Path) -> Result<Credentials> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!(
            "failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;
    Ok(parse_rc(&text))
}

fn parse_rc(text: &str) -> Credentials {
    let mut cfg = Credentials::default();

    // A key may carry its value on the following line.
    let mut pending_key: Option<&str> = None;

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(pk) = pending_key.take() {
            if !line.contains(':') {
                set_field(&mut cfg, pk, strip_quotes(line));
                continue;
            }
        }

        if let Some((k, v)) = line.split_once(':') {
            let k = k.trim();
            let v = strip_quotes(v.trim());
            if !matches!(k, "username" | "password") {
                continue;
            }
            if v.is_empty() {
                pending_key = Some(k);
            } else {
                set_field(&mut cfg, k, v);
            }
        }
    }

    cfg
}

fn set_field(cfg: &mut Credentials, key: &str, value: &str) {
    let value = non_empty(Some(value.to_string()));
    match key {
        "username" => cfg.username = value,
        "password" => cfg.password = value,
        _ => {}
    }
}

fn rc_candidates() -> Vec<PathBuf> {
    if let Ok(p) = std::env::var("GOGITHUB_RC") {
        return vec![PathBuf::from(p)];
    }

    let mut v = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        v.push(cwd.join(".githubrc"));
    }
    if let Some(home) = dirs::home_dir() {
        v.push(home.join(".githubrc"));
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serial_test::serial;

    fn clear_env() {
        // SAFETY: env-mutating tests are serialised with `#[serial]`.
        unsafe {
            std::env::remove_var("GITHUB_USERNAME");
            std::env::remove_var("GITHUB_PASSWORD");
        }
    }

    fn point_rc_at(path: &Path) {
        unsafe { std::env::set_var("GOGITHUB_RC", path) };
    }

    fn write_rc(name: &str, contents: &str) -> PathBuf {
        let file = format!("gogithub-{}-{}", std::process::id(), name);
        let path = std::env::temp_dir().join(file);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn parse_rc_handles_comments_quotes_and_continuations() {
        let cfg = parse_rc(
            "# GitHub login\n\
             username: \"alice\"\n\
             \n\
             password:\n\
             's3cret'\n\
             token: ignored\n",
        );
        assert_eq!(cfg.username.as_deref(), Some("alice"));
        assert_eq!(cfg.password.as_deref(), Some("s3cret"));
    }

    #[test]
    fn parse_rc_keeps_colons_inside_values() {
        let cfg = parse_rc("username: bob\npassword: a:b:c\n");
        assert_eq!(cfg.username.as_deref(), Some("bob"));
        assert_eq!(cfg.password.as_deref(), Some("a:b:c"));
    }

    #[test]
    fn into_session_validates_the_pair() {
        let anon = Credentials::default().into_session().unwrap();
        assert!(!anon.is_authenticated());

        let half = Credentials {
            username: Some("alice".into()),
            password: None,
        };
        assert_eq!(half.into_session().unwrap_err().kind(), ErrorKind::Config);

        let full = Credentials {
            username: Some("alice".into()),
            password: Some("pw".into()),
        };
        assert_eq!(full.into_session().unwrap().username(), "alice");
    }

    #[test]
    #[serial]
    fn explicit_arguments_win_over_environment() {
        clear_env();
        point_rc_at(&std::env::temp_dir().join("gogithub-missing-rc"));
        unsafe {
            std::env::set_var("GITHUB_USERNAME", "env-user");
            std::env::set_var("GITHUB_PASSWORD", "env-pass");
        }

        let creds = Credentials::resolve(Some("cli-user".into()), None).unwrap();
        assert_eq!(creds.username.as_deref(), Some("cli-user"));
        assert_eq!(creds.password.as_deref(), Some("env-pass"));

        let creds = Credentials::resolve(Some(String::new()), None).unwrap();
        assert_eq!(creds.username.as_deref(), Some("env-user"));
        clear_env();
    }

    #[test]
    #[serial]
    fn rc_file_fills_missing_fields() {
        clear_env();
        let rc = write_rc("fill", "username: rc-user\npassword: rc-pass\n");
        point_rc_at(&rc);

        let creds = Credentials::resolve(None, Some("cli-pass".into())).unwrap();
        assert_eq!(creds.username.as_deref(), Some("rc-user"));
        assert_eq!(creds.password.as_deref(), Some("cli-pass"));

        std::fs::remove_file(rc).ok();
    }

    #[test]
    #[serial]
    fn unreadable_rc_file_reports_the_path() {
        clear_env();
        let dir = std::env::temp_dir().join(format!("gogithub-{}-rc-dir", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        point_rc_at(&dir);

        let err = Credentials::resolve(None, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
        let msg = err.to_string();
        assert!(msg.starts_with("failed to read configuration file"), "{msg}");
        assert!(!msg.contains("unsupported authentication type"), "{msg}");

        std::fs::remove_dir(dir).ok();
    }

    #[test]
    #[serial]
    fn nothing_configured_is_anonymous() {
        clear_env();
        point_rc_at(&std::env::temp_dir().join("gogithub-missing-rc"));

        let session = Credentials::resolve(None, None).unwrap().into_session().unwrap();
        assert!(!session.is_authenticated());
    }
}
