//! Auth session types and magic-link redirect parsing
//!
//! The magic-link flow itself belongs to the backend; the client only has to
//! pick the tokens out of the redirect URL fragment and keep the session
//! around for the page lifetime.

use serde::{Deserialize, Serialize};

/// Signed-in user identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
}

/// Bearer session for authenticated requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user: AuthUser,
}

/// Tokens delivered in the magic-link redirect fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentTokens {
    pub access_token: String,
    pub refresh_token: Option<String>,
}

/// Parse `#access_token=...&refresh_token=...` from a location hash
///
/// Returns None when the fragment carries no access token (normal page
/// loads, or an `#error=...` redirect).
pub fn parse_fragment(fragment: &str) -> Option<FragmentTokens> {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);

    let mut access_token = None;
    let mut refresh_token = None;
    for pair in fragment.split('&') {
        let (key, value) = pair.split_once('=')?;
        match key {
            "access_token" if !value.is_empty() => access_token = Some(value.to_string()),
            "refresh_token" if !value.is_empty() => refresh_token = Some(value.to_string()),
            _ => {}
        }
    }

    Some(FragmentTokens {
        access_token: access_token?,
        refresh_token,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_magic_link_fragment() {
        let tokens = parse_fragment(
            "#access_token=abc123&expires_in=3600&refresh_token=def456&token_type=bearer",
        )
        .unwrap();
        assert_eq!(tokens.access_token, "abc123");
        assert_eq!(tokens.refresh_token.as_deref(), Some("def456"));
    }

    #[test]
    fn parses_fragment_without_leading_hash() {
        let tokens = parse_fragment("access_token=abc&token_type=bearer").unwrap();
        assert_eq!(tokens.access_token, "abc");
        assert!(tokens.refresh_token.is_none());
    }

    #[test]
    fn empty_or_plain_fragment_yields_none() {
        assert!(parse_fragment("").is_none());
        assert!(parse_fragment("#").is_none());
        assert!(parse_fragment("#section-2").is_none());
    }

    #[test]
    fn error_redirect_yields_none() {
        assert!(parse_fragment("#error=access_denied&error_code=otp_expired").is_none());
    }

    #[test]
    fn empty_access_token_yields_none() {
        assert!(parse_fragment("#access_token=&token_type=bearer").is_none());
    }

    #[test]
    fn session_round_trips_through_json() {
        let session = AuthSession {
            access_token: "tok".to_string(),
            refresh_token: None,
            user: AuthUser {
                id: "u1".to_string(),
                email: "me@example.com".to_string(),
            },
        };
        let json = serde_json::to_string(&session).unwrap();
        let back: AuthSession = serde_json::from_str(&json).unwrap();
        assert_eq!(back.access_token, "tok");
        assert_eq!(back.user, session.user);
    }
}
