//! HTTP client for the Stack CLI auth endpoints.
//!
//! Two calls, both one-shot with no transport retry:
//! 1. `POST /api/v1/auth/cli` creates a pending session
//! 2. `POST /api/v1/auth/cli/poll` reports the session status
//!
//! Every request carries the project identity headers. Non-expected HTTP
//! statuses are fatal and preserve the status code plus raw body.

use std::time::Duration;

use chrono::Utc;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::CliAuthConfig;
use crate::error::{AuthError, Result};
use crate::session::{PendingSession, SessionPoll};

const CLI_AUTH_PATH: &str = "/api/v1/auth/cli";
const CLI_AUTH_POLL_PATH: &str = "/api/v1/auth/cli/poll";

/// Client for the CLI auth session endpoints.
pub struct CliAuthClient {
    client: reqwest::Client,
    base_url: String,
    project_id: String,
    publishable_client_key: String,
}

impl CliAuthClient {
    pub fn new(config: &CliAuthConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            project_id: config.project_id.clone(),
            publishable_client_key: config.publishable_client_key.clone(),
        }
    }

    fn request(&self, path: &str) -> reqwest::RequestBuilder {
        self.client
            .post(format!("{}{}", self.base_url, path))
            .header("x-stack-project-id", &self.project_id)
            .header("x-stack-access-type", "client")
            .header("x-stack-publishable-client-key", &self.publishable_client_key)
    }

    /// Create a pending auth session with the given server-side lifetime.
    ///
    /// Any status other than 200 aborts the flow with
    /// [`AuthError::Initiation`].
    pub async fn create_session(&self, expires_in: Duration) -> Result<PendingSession> {
        let resp = self
            .request(CLI_AUTH_PATH)
            .json(&CreateSessionRequest {
                expires_in_millis: expires_in.as_millis() as u64,
            })
            .send()
            .await?;

        let status = resp.status();
        if status != StatusCode::OK {
            let body = resp.text().await.unwrap_or_default();
            return Err(AuthError::Initiation {
                status: status.as_u16(),
                body,
            });
        }

        let payload: CreateSessionResponse = resp
            .json()
            .await
            .map_err(|e| AuthError::InvalidResponse(format!("session creation body: {e}")))?;
        debug!("created pending CLI auth session");
        Ok(PendingSession {
            polling_code: payload.polling_code,
            login_code: payload.login_code,
            expires_at: Utc::now() + chrono::Duration::seconds(expires_in.as_secs() as i64),
        })
    }

    /// Ask the service whether the session has been confirmed.
    ///
    /// 200 and 201 are both reachable-and-answered; anything else aborts
    /// with [`AuthError::Poll`].
    pub async fn poll_session(&self, polling_code: &str) -> Result<SessionPoll> {
        let resp = self
            .request(CLI_AUTH_POLL_PATH)
            .json(&PollRequest { polling_code })
            .send()
            .await?;

        let status = resp.status();
        if status != StatusCode::OK && status != StatusCode::CREATED {
            let body = resp.text().await.unwrap_or_default();
            return Err(AuthError::Poll {
                status: status.as_u16(),
                body,
            });
        }

        let payload: PollResponse = resp
            .json()
            .await
            .map_err(|e| AuthError::InvalidResponse(format!("poll body: {e}")))?;
        interpret_poll(payload)
    }
}

/// Map a 2xx poll body to an outcome. Only `"success"` resolves the flow;
/// every other status value, including a missing field, means keep waiting.
fn interpret_poll(payload: PollResponse) -> Result<SessionPoll> {
    match payload.status.as_deref() {
        Some("success") => {
            let refresh_token = payload.refresh_token.ok_or_else(|| {
                AuthError::InvalidResponse("success poll missing refresh_token".to_string())
            })?;
            Ok(SessionPoll::Success { refresh_token })
        }
        other => {
            debug!(status = ?other, "session not yet confirmed");
            Ok(SessionPoll::Pending)
        }
    }
}

#[derive(Debug, Serialize)]
struct CreateSessionRequest {
    expires_in_millis: u64,
}

#[derive(Debug, Deserialize)]
struct CreateSessionResponse {
    polling_code: String,
    login_code: String,
}

#[derive(Debug, Serialize)]
struct PollRequest<'a> {
    polling_code: &'a str,
}

#[derive(Debug, Deserialize)]
struct PollResponse {
    status: Option<String>,
    refresh_token: Option<String>,
}
