//! Handler for `stack login`.

use crate::cli::LoginArgs;
use crate::config::CliAuthConfig;
use crate::flow::LoginFlow;

/// Handle `stack login`.
///
/// Environment values seed the config; explicit flags win.
pub async fn handle_login(args: LoginArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = CliAuthConfig::from_env();
    if let Some(app_url) = args.app_url {
        config.app_url = app_url;
    }
    if let Some(project_id) = args.project_id {
        config.project_id = project_id;
    }
    if let Some(key) = args.publishable_client_key {
        config.publishable_client_key = key;
    }
    if let Some(api_url) = args.api_url {
        config.base_url = api_url;
    }

    let refresh_token = LoginFlow::new(config).run().await?;
    println!("Login successful!");
    println!("Refresh token: {refresh_token}");
    Ok(())
}
