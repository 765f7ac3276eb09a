//! CLI entry point for the Stack binary.

pub mod login;

use clap::{Parser, Subcommand};

/// Stack Auth CLI
#[derive(Parser, Debug)]
#[command(name = "stack", version, about = "Stack Auth CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in via browser confirmation and print the refresh token
    Login(LoginArgs),
}

/// Arguments for `stack login`. Flags override environment values.
#[derive(Parser, Debug)]
pub struct LoginArgs {
    /// Application origin hosting the auth handler
    #[arg(long)]
    pub app_url: Option<String>,

    /// Project identifier
    #[arg(long)]
    pub project_id: Option<String>,

    /// Publishable client key for the project
    #[arg(long)]
    pub publishable_client_key: Option<String>,

    /// Auth service endpoint override
    #[arg(long)]
    pub api_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_login_with_all_flags() {
        let cli = Cli::try_parse_from([
            "stack",
            "login",
            "--app-url",
            "https://app.example.com",
            "--project-id",
            "proj-1",
            "--publishable-client-key",
            "pck-1",
            "--api-url",
            "http://localhost:8102",
        ])
        .unwrap();
        match cli.command {
            Commands::Login(args) => {
                assert_eq!(args.app_url.as_deref(), Some("https://app.example.com"));
                assert_eq!(args.project_id.as_deref(), Some("proj-1"));
                assert_eq!(args.publishable_client_key.as_deref(), Some("pck-1"));
                assert_eq!(args.api_url.as_deref(), Some("http://localhost:8102"));
            }
        }
    }

    #[test]
    fn parse_login_without_flags() {
        let cli = Cli::try_parse_from(["stack", "login"]).unwrap();
        match cli.command {
            Commands::Login(args) => {
                assert!(args.app_url.is_none());
                assert!(args.project_id.is_none());
            }
        }
    }

    #[test]
    fn parse_rejects_unknown_command() {
        assert!(Cli::try_parse_from(["stack", "frobnicate"]).is_err());
    }
}
