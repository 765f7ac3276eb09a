//! Stack CLI login flow.
//!
//! Implements the browser-confirmed login handshake against a Stack auth
//! service: create a pending CLI session, send the user to the browser to
//! approve it, then poll until the session resolves into a refresh token.
//!
//! # Quick Start
//!
//! ```no_run
//! use stack_cli::config::CliAuthConfig;
//! use stack_cli::flow::LoginFlow;
//!
//! # async fn example() -> stack_cli::error::Result<()> {
//! let config = CliAuthConfig::new("https://app.example.com", "proj-id", "pck-key");
//! let refresh_token = LoginFlow::new(config).run().await?;
//! println!("{refresh_token}");
//! # Ok(())
//! # }
//! ```

pub mod browser;
pub mod client;
pub mod config;
pub mod error;
pub mod flow;
pub mod session;

#[cfg(feature = "cli")]
pub mod cli;

pub use browser::{SystemBrowser, UrlOpener};
pub use client::CliAuthClient;
pub use config::CliAuthConfig;
pub use error::{AuthError, Result};
pub use flow::LoginFlow;
pub use session::{PendingSession, SessionPoll};
