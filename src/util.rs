use serde::{Deserialize, Deserializer};

/// Treats JSON `null` like a missing field. GitHub sends `null` for unset
/// profile fields, which `#[serde(default)]` alone does not cover.
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub(crate) fn urljoin(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

pub(crate) fn strip_quotes(s: &str) -> &str {
    let s = s.trim();
    if (s.starts_with('"') && s.ends_with('"') && s.len() >= 2)
        || (s.starts_with('\'') && s.ends_with('\'') && s.len() >= 2)
    {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urljoin_handles_slashes() {
        assert_eq!(
            urljoin("https://api.github.com/", "/user"),
            "https://api.github.com/user"
        );
        assert_eq!(
            urljoin("https://api.github.com", "users/bob"),
            "https://api.github.com/users/bob"
        );
    }

    #[test]
    fn strip_quotes_only_strips_matching_pairs() {
        assert_eq!(strip_quotes(" \"alice\" "), "alice");
        assert_eq!(strip_quotes("'s3cret'"), "s3cret");
        assert_eq!(strip_quotes("\"unbalanced"), "\"unbalanced");
        assert_eq!(strip_quotes("\""), "\"");
    }
}
