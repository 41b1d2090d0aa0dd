use crate::{api::OAuthProvider, utils::navigation};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::{cell::RefCell, collections::HashSet, rc::Rc};

pub const OAUTH_FAILED_PATH: &str = "/login?error=oauth_failed";

// RFC 3986 unreserved characters stay literal.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub error: Option<String>,
}

impl CallbackParams {
    pub fn from_search(search: &str) -> Self {
        let non_empty = |name: &str| {
            navigation::query_value(search, name).filter(|v| !v.trim().is_empty())
        };
        Self {
            code: non_empty("code"),
            error: non_empty("error"),
        }
    }

    /// The authorization code, unless the provider reported an error.
    pub fn usable_code(&self) -> Result<&str, String> {
        if let Some(error) = &self.error {
            return Err(format!("provider returned error: {}", error));
        }
        self.code
            .as_deref()
            .ok_or_else(|| "callback is missing the authorization code".to_string())
    }
}

pub fn callback_path(provider: OAuthProvider) -> String {
    format!("/auth/{}/callback", provider.as_str())
}

pub fn redirect_uri(origin: &str, provider: OAuthProvider) -> String {
    format!("{}{}", origin.trim_end_matches('/'), callback_path(provider))
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

pub fn authorize_url(provider: OAuthProvider, client_id: &str, redirect_uri: &str) -> String {
    match provider {
        OAuthProvider::Google => format!(
            "https://accounts.google.com/o/oauth2/v2/auth?client_id={}&redirect_uri={}&response_type=code&scope={}&access_type=online&prompt=select_account",
            encode(client_id),
            encode(redirect_uri),
            encode("openid email profile"),
        ),
        OAuthProvider::Strava => format!(
            "https://www.strava.com/oauth/authorize?client_id={}&redirect_uri={}&response_type=code&approval_prompt=auto&scope={}",
            encode(client_id),
            encode(redirect_uri),
            encode("read,activity:read"),
        ),
    }
}

/// Remembers which authorization codes were already handed to the backend.
/// Codes are single use, so a second exchange would always fail.
#[derive(Debug, Default)]
pub struct CodeLatch {
    claimed: RefCell<HashSet<String>>,
}

impl CodeLatch {
    /// True exactly once per code.
    pub fn try_claim(&self, code: &str) -> bool {
        self.claimed.borrow_mut().insert(code.to_string())
    }
}

thread_local! {
    static STRAVA_LATCH: Rc<CodeLatch> = Rc::new(CodeLatch::default());
}

/// The latch shared by every mount of a provider's callback page. Only
/// Strava codes are guarded; Google callbacks always exchange.
pub fn latch_for(provider: OAuthProvider) -> Option<Rc<CodeLatch>> {
    match provider {
        OAuthProvider::Strava => Some(STRAVA_LATCH.with(Rc::clone)),
        OAuthProvider::Google => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_prefer_provider_error_over_code() {
        let params = CallbackParams::from_search("?code=abc&error=access_denied");
        assert!(params.usable_code().unwrap_err().contains("access_denied"));

        let missing = CallbackParams::from_search("?state=xyz");
        assert!(missing.usable_code().is_err());

        let blank = CallbackParams::from_search("?code=");
        assert!(blank.code.is_none());

        let ok = CallbackParams::from_search("?code=4%2F0Ab-xyz&scope=read");
        assert_eq!(ok.usable_code(), Ok("4/0Ab-xyz"));
    }

    #[test]
    fn authorize_urls_encode_redirect_uri() {
        let uri = redirect_uri("https://velomart.test/", OAuthProvider::Strava);
        assert_eq!(uri, "https://velomart.test/auth/strava/callback");

        let url = authorize_url(OAuthProvider::Strava, "12345", &uri);
        assert!(url.starts_with("https://www.strava.com/oauth/authorize?client_id=12345"));
        assert!(url.contains("redirect_uri=https%3A%2F%2Fvelomart.test%2Fauth%2Fstrava%2Fcallback"));
        assert!(url.contains("scope=read%2Cactivity%3Aread"));

        let google = authorize_url(
            OAuthProvider::Google,
            "abc.apps.googleusercontent.com",
            "http://localhost:8080/auth/google/callback",
        );
        assert!(google.contains("client_id=abc.apps.googleusercontent.com"));
        assert!(google.contains("scope=openid%20email%20profile"));
    }

    #[test]
    fn latch_claims_each_code_once() {
        let latch = CodeLatch::default();
        assert!(latch.try_claim("c1"));
        assert!(!latch.try_claim("c1"));
        assert!(latch.try_claim("c2"));
    }

    #[test]
    fn strava_latch_is_shared_across_mounts() {
        let first = latch_for(OAuthProvider::Strava).unwrap();
        let second = latch_for(OAuthProvider::Strava).unwrap();
        assert!(first.try_claim("shared-code"));
        assert!(!second.try_claim("shared-code"));
        assert!(latch_for(OAuthProvider::Google).is_none());
    }
}
