//! Authentication handling for GitHub API.

use secrecy::SecretString;

use crate::error::{Error, Result};

/// Environment variable consulted by [`Auth::auto`].
pub const DEFAULT_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Authentication method for GitHub API.
///
/// Public organization data is readable without a token, so anonymous
/// access is a valid choice; a token only raises the rate limit.
#[derive(Debug, Clone, Default)]
pub enum Auth {
    /// No token; requests are sent unauthenticated.
    #[default]
    Anonymous,

    /// Use token from environment variable.
    EnvVar(String),

    /// Use a specific token.
    Token(SecretString),
}

impl Auth {
    /// Use `GITHUB_TOKEN` if it is set, anonymous access otherwise.
    #[must_use]
    pub fn auto() -> Self {
        Self::from_env_or_anonymous(DEFAULT_TOKEN_ENV)
    }

    /// Use the named environment variable if it is set, anonymous access otherwise.
    #[must_use]
    pub fn from_env_or_anonymous(var: &str) -> Self {
        if std::env::var(var).is_ok_and(|v| !v.trim().is_empty()) {
            Self::EnvVar(var.to_string())
        } else {
            Self::Anonymous
        }
    }

    /// Resolve the authentication to a token, if any.
    ///
    /// # Errors
    /// Returns [`Error::NoToken`] if the environment variable is unset or empty.
    pub fn resolve(&self) -> Result<Option<SecretString>> {
        match self {
            Self::Anonymous => Ok(None),
            Self::EnvVar(var) => match std::env::var(var) {
                Ok(token) if !token.trim().is_empty() => {
                    Ok(Some(SecretString::from(token.trim().to_string())))
                }
                _ => Err(Error::NoToken(var.clone())),
            },
            Self::Token(t) => Ok(Some(t.clone())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn test_anonymous_resolves_to_none() {
        assert!(Auth::Anonymous.resolve().unwrap().is_none());
    }

    #[test]
    fn test_token_auth() {
        let auth = Auth::Token(SecretString::from("test_token"));
        let token = auth.resolve().unwrap().unwrap();
        assert_eq!(token.expose_secret(), "test_token");
    }

    #[test]
    fn test_missing_env_var_is_no_token() {
        let auth = Auth::EnvVar("ORGSCOPE_TEST_TOKEN_THAT_IS_NEVER_SET".into());
        assert!(matches!(auth.resolve(), Err(Error::NoToken(_))));
    }

    #[test]
    fn test_unset_env_falls_back_to_anonymous() {
        let auth = Auth::from_env_or_anonymous("ORGSCOPE_TEST_TOKEN_THAT_IS_NEVER_SET");
        assert!(matches!(auth, Auth::Anonymous));
    }

    #[test]
    fn test_debug_does_not_leak_token() {
        let auth = Auth::Token(SecretString::from("super-secret"));
        assert!(!format!("{auth:?}").contains("super-secret"));
    }
}
