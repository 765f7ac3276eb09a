//! Login flow orchestration: initiate, hand off to the browser, poll.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::browser::{confirm_url, SystemBrowser, UrlOpener};
use crate::client::CliAuthClient;
use crate::config::CliAuthConfig;
use crate::error::Result;
use crate::session::SessionPoll;

/// Server-side lifetime requested for the pending session.
pub const SESSION_EXPIRY: Duration = Duration::from_secs(600);

/// Pause between status polls.
pub const POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Browser-confirmed CLI login flow.
///
/// Runs three phases in order: create a pending session, present the
/// confirmation URL (print + best-effort browser open), then poll the
/// session until the user approves it.
///
/// The flow holds no state across runs; each [`run`] creates an independent
/// session.
///
/// # Example
/// ```no_run
/// use stack_cli::config::CliAuthConfig;
/// use stack_cli::flow::LoginFlow;
///
/// # async fn example() -> stack_cli::error::Result<()> {
/// let config = CliAuthConfig::new("https://app.example.com", "proj-id", "pck-key");
/// let flow = LoginFlow::new(config);
/// let refresh_token = flow.run().await?;
/// # Ok(())
/// # }
/// ```
///
/// [`run`]: LoginFlow::run
pub struct LoginFlow {
    config: CliAuthConfig,
    client: CliAuthClient,
    opener: Arc<dyn UrlOpener>,
    poll_interval: Duration,
}

impl LoginFlow {
    pub fn new(config: CliAuthConfig) -> Self {
        let client = CliAuthClient::new(&config);
        Self {
            config,
            client,
            opener: Arc::new(SystemBrowser),
            poll_interval: POLL_INTERVAL,
        }
    }

    /// Replace the browser opener (tests stub it out entirely).
    pub fn with_opener(mut self, opener: Arc<dyn UrlOpener>) -> Self {
        self.opener = opener;
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Run the flow to completion and return the refresh token.
    ///
    /// Configuration is validated before any network call. The poll loop
    /// has no client-side deadline; the 10-minute server-side expiry
    /// requested at initiation terminates every flow, surfacing as a poll
    /// error once the session is gone. Exactly one poll request is in
    /// flight at a time, and none is sent before the interval elapses.
    /// Dropping the returned future cancels between polls.
    pub async fn run(&self) -> Result<String> {
        self.config.validate()?;

        let session = self.client.create_session(SESSION_EXPIRY).await?;
        debug!(expires_at = %session.expires_at, "pending session created");

        let url = confirm_url(&self.config.app_url, &session.login_code)?;
        println!("Confirm the login in your browser:\n\n  {url}\n");
        if let Err(err) = self.opener.open(&url) {
            debug!(error = %err, "browser open failed, printed URL is the fallback");
        }

        loop {
            match self.client.poll_session(&session.polling_code).await? {
                SessionPoll::Success { refresh_token } => return Ok(refresh_token),
                SessionPoll::Pending => tokio::time::sleep(self.poll_interval).await,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_expiry_is_ten_minutes() {
        assert_eq!(SESSION_EXPIRY, Duration::from_secs(600));
    }

    #[test]
    fn poll_interval_defaults_to_two_seconds() {
        assert_eq!(POLL_INTERVAL, Duration::from_secs(2));
    }
}
