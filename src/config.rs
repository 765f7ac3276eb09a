//! Login flow configuration (code > env, with a fixed default endpoint).

use crate::error::{AuthError, Result};

/// Default Stack API endpoint. A configuration default supplied at
/// construction, never process-wide state.
pub const DEFAULT_BASE_URL: &str = "https://api.stack-auth.com";

/// Identity and endpoint configuration for one login flow.
///
/// `app_url`, `project_id`, and `publishable_client_key` must be non-empty;
/// [`CliAuthConfig::validate`] enforces this before any network call.
#[derive(Debug, Clone)]
pub struct CliAuthConfig {
    /// Auth service endpoint the session and poll requests go to.
    pub base_url: String,
    /// Origin of the consuming application; hosts the confirmation handler.
    pub app_url: String,
    pub project_id: String,
    pub publishable_client_key: String,
}

impl CliAuthConfig {
    pub fn new(
        app_url: impl Into<String>,
        project_id: impl Into<String>,
        publishable_client_key: impl Into<String>,
    ) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            app_url: app_url.into(),
            project_id: project_id.into(),
            publishable_client_key: publishable_client_key.into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Load from environment variables (STACK_API_URL, STACK_CLI_APP_URL,
    /// STACK_CLI_PROJECT_ID, STACK_CLI_PUBLISHABLE_CLIENT_KEY).
    ///
    /// Unset identity fields stay empty and are caught by [`validate`]
    /// before any request goes out.
    ///
    /// [`validate`]: CliAuthConfig::validate
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        Self {
            base_url: std::env::var("STACK_API_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            app_url: std::env::var("STACK_CLI_APP_URL").unwrap_or_default(),
            project_id: std::env::var("STACK_CLI_PROJECT_ID").unwrap_or_default(),
            publishable_client_key: std::env::var("STACK_CLI_PUBLISHABLE_CLIENT_KEY")
                .unwrap_or_default(),
        }
    }

    /// Check that every required identity field is present.
    ///
    /// The error message names the first missing field.
    pub fn validate(&self) -> Result<()> {
        let required = [
            (&self.app_url, "app_url"),
            (&self.project_id, "project_id"),
            (&self.publishable_client_key, "publishable_client_key"),
        ];
        for (value, name) in required {
            if value.trim().is_empty() {
                return Err(AuthError::Configuration(format!(
                    "missing required field: {name}"
                )));
            }
        }
        Ok(())
    }
}
