use std::fmt;
use std::ops::Deref;

use serde::Deserialize;

use crate::util::null_default;

/// GitHub user plan (<http://developer.github.com/v3/users/>).
///
/// Only present on the authenticated user's own profile; zeroed otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Plan {
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub space: u64,
    #[serde(deserialize_with = "null_default")]
    pub collaborators: u64,
    #[serde(deserialize_with = "null_default")]
    pub private_repos: u64,
}

/// GitHub user profile (<http://developer.github.com/v3/users/>).
///
/// Unknown fields are ignored; missing or `null` fields take their zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "null_default")]
    pub login: String,
    #[serde(deserialize_with = "null_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_default")]
    pub avatar_url: String,
    #[serde(deserialize_with = "null_default")]
    pub gravatar_id: String,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub company: String,
    #[serde(deserialize_with = "null_default")]
    pub blog: String,
    #[serde(deserialize_with = "null_default")]
    pub location: String,
    #[serde(deserialize_with = "null_default")]
    pub email: String,
    // Older API docs spelled it "hirable".
    #[serde(alias = "hirable", deserialize_with = "null_default")]
    pub hireable: bool,
    #[serde(deserialize_with = "null_default")]
    pub bio: String,
    #[serde(deserialize_with = "null_default")]
    pub public_repos: u64,
    #[serde(deserialize_with = "null_default")]
    pub public_gists: u64,
    #[serde(deserialize_with = "null_default")]
    pub followers: u64,
    #[serde(deserialize_with = "null_default")]
    pub following: u64,
    #[serde(deserialize_with = "null_default")]
    pub html_url: String,
    #[serde(deserialize_with = "null_default")]
    pub created_at: String,
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_default")]
    pub plan: Plan,
}

/// Email addresses of the authenticated user, in server order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Emails(pub Vec<String>);

impl Deref for Emails {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.0
    }
}

impl From<Emails> for Vec<String> {
    fn from(e: Emails) -> Self {
        e.0
    }
}

impl IntoIterator for Emails {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (space: {}, collaborators: {}, private repos: {})",
            if self.name.is_empty() { "-" } else { &self.name },
            self.space,
            self.collaborators,
            self.private_repos
        )
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn line(f: &mut fmt::Formatter<'_>, label: &str, value: &str) -> fmt::Result {
            if value.is_empty() {
                Ok(())
            } else {
                writeln!(f, "{:<12} {}", label, value)
            }
        }

        writeln!(f, "{} (#{})", self.login, self.id)?;
        line(f, "name:", &self.name)?;
        line(f, "type:", &self.kind)?;
        line(f, "company:", &self.company)?;
        line(f, "location:", &self.location)?;
        line(f, "email:", &self.email)?;
        line(f, "blog:", &self.blog)?;
        line(f, "bio:", &self.bio)?;
        line(f, "profile:", &self.html_url)?;
        line(f, "created:", &self.created_at)?;
        writeln!(f, "{:<12} {}", "hireable:", self.hireable)?;
        writeln!(
            f,
            "{:<12} {} repos, {} gists, {} followers, {} following",
            "public:", self.public_repos, self.public_gists, self.followers, self.following
        )?;
        write!(f, "{:<12} {}", "plan:", self.plan)
    }
}

impl fmt::Display for Emails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}
