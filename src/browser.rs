//! Browser handoff: confirmation URL construction and best-effort opening.

use reqwest::Url;

use crate::error::{AuthError, Result};

const CONFIRM_PATH: &str = "/handler/cli-auth-confirm";

/// Build the confirmation URL the user visits to approve the session.
///
/// The login code is appended as a percent-encoded query value, so codes
/// containing separators like `&` survive as a single parameter. A trailing
/// slash on `app_url` is tolerated.
pub fn confirm_url(app_url: &str, login_code: &str) -> Result<String> {
    let base = format!("{}{}", app_url.trim_end_matches('/'), CONFIRM_PATH);
    let mut url = Url::parse(&base)
        .map_err(|e| AuthError::Configuration(format!("invalid app_url {app_url:?}: {e}")))?;
    url.query_pairs_mut().append_pair("login_code", login_code);
    Ok(url.to_string())
}

/// Browser-opening collaborator, injected into the flow so tests can stub
/// the side effect. Open failure is reported but never fatal; the printed
/// URL is the fallback.
pub trait UrlOpener: Send + Sync {
    fn open(&self, url: &str) -> std::io::Result<()>;
}

/// Default opener backed by the platform browser.
pub struct SystemBrowser;

impl UrlOpener for SystemBrowser {
    fn open(&self, url: &str) -> std::io::Result<()> {
        webbrowser::open(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_url_joins_handler_path() {
        let url = confirm_url("https://app.example.com", "code-1").unwrap();
        assert_eq!(
            url,
            "https://app.example.com/handler/cli-auth-confirm?login_code=code-1"
        );
    }

    #[test]
    fn confirm_url_tolerates_trailing_slash() {
        let url = confirm_url("https://app.example.com/", "code-1").unwrap();
        assert_eq!(
            url,
            "https://app.example.com/handler/cli-auth-confirm?login_code=code-1"
        );
    }

    #[test]
    fn confirm_url_percent_encodes_login_code() {
        let url = confirm_url("https://app.example.com", "a&b=c").unwrap();
        assert!(url.ends_with("login_code=a%26b%3Dc"), "got: {url}");
    }

    #[test]
    fn confirm_url_rejects_unparseable_app_url() {
        let result = confirm_url("not a url", "code-1");
        assert!(matches!(result, Err(AuthError::Configuration(_))));
    }
}
