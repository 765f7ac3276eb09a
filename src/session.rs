use chrono::{DateTime, Utc};

/// A pending CLI auth session returned by the initiation call.
///
/// Both codes are opaque server-generated strings: `login_code` goes into
/// the browser confirmation URL, `polling_code` drives the status polls.
/// The session lives only in memory for the duration of one flow.
#[derive(Debug, Clone)]
pub struct PendingSession {
    pub polling_code: String,
    pub login_code: String,
    /// Client-side estimate of when the server expires the session. The
    /// server owns the actual expiry; this is informational.
    pub expires_at: DateTime<Utc>,
}

/// Outcome of a single status poll.
#[derive(Debug, Clone)]
pub enum SessionPoll {
    /// Not confirmed yet; poll again after the interval.
    Pending,
    /// The user approved the login and the session resolved.
    Success { refresh_token: String },
}
